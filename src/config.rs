//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Server
// =============================================================================

/// Public address of the Minecraft Java server shown on the page.
pub const SERVER_ADDRESS: &str = "mc.craftceres.cc";

/// Base path of the mcstatus.io Java status API (server address is appended).
pub const STATUS_API_BASE: &str = "https://api.mcstatus.io/v2/status/java/";

/// Build the status endpoint URL for the configured server.
pub fn status_url() -> String {
    format!("{}{}", STATUS_API_BASE, SERVER_ADDRESS)
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
///
/// Bounds the status request, which would otherwise wait forever on a hung
/// connection. A timeout goes through [`STATUS_FALLBACK`] like any other
/// failed request.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Message carried by non-2xx status responses.
pub const NETWORK_RESPONSE_ERROR: &str = "NETWORK RESPONSE ERROR";

/// What the status badge shows when the status request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum StatusFallback {
    /// Leave the badge exactly as it was before the request.
    #[default]
    KeepPending,
    /// Replace the badge with an "unavailable" notice.
    ShowUnavailable,
}

/// Current reaction to a failed status request.
pub const STATUS_FALLBACK: StatusFallback = StatusFallback::KeepPending;

// =============================================================================
// Status Badge
// =============================================================================

/// Status badge texts and colors.
pub mod status {
    /// Placeholder shown until the status request completes.
    pub const PLACEHOLDER: &str = "Cargando...";
    /// Text shown when the server reports offline.
    pub const OFFLINE_TEXT: &str = "Desconectado";
    /// Prefix of the online text, followed by `{online}/{max}`.
    pub const ONLINE_PREFIX: &str = "En línea | ";
    /// Text shown when the status could not be determined.
    pub const UNAVAILABLE_TEXT: &str = "Estado no disponible";

    pub const TEXT_COLOR: &str = "white";
    pub const ONLINE_BACKGROUND: &str = "#30d158";
    pub const OFFLINE_BACKGROUND: &str = "red";
    pub const UNAVAILABLE_BACKGROUND: &str = "#8e8e93";
}

// =============================================================================
// Clipboard
// =============================================================================

/// How long the "copied" acknowledgment stays visible, in milliseconds.
pub const COPY_ACK_MS: u32 = 2500;

// =============================================================================
// DOM Contract
// =============================================================================

/// Element ids and state class names shared with `assets/style.css`.
pub mod dom_ids {
    pub const STATUS: &str = "estados";
    pub const SERVER_ADDRESS: &str = "mcserver";
    pub const COPY_ACK: &str = "copiado";
    pub const SOCIALS: &str = "socials";

    /// Class toggled on the acknowledgment element.
    pub const COPIED_CLASS: &str = "copiado";
    /// Class marking the socials panel as appearing.
    pub const APPEAR_CLASS: &str = "aparecer";
    /// Class marking the socials panel as hidden.
    pub const HIDDEN_CLASS: &str = "hidden";
}

// =============================================================================
// Social Links
// =============================================================================

/// Kind of social network, used to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Discord,
    Instagram,
    Youtube,
    Tiktok,
}

/// A link rendered inside the socials panel.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub url: &'static str,
}

/// Links listed in the socials panel, in display order.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::Discord,
        label: "Discord",
        url: "https://discord.gg/craftceres",
    },
    SocialLink {
        kind: SocialKind::Instagram,
        label: "Instagram",
        url: "https://instagram.com/craftceres",
    },
    SocialLink {
        kind: SocialKind::Youtube,
        label: "YouTube",
        url: "https://youtube.com/@craftceres",
    },
    SocialLink {
        kind: SocialKind::Tiktok,
        label: "TikTok",
        url: "https://tiktok.com/@craftceres",
    },
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_url() {
        assert_eq!(
            status_url(),
            "https://api.mcstatus.io/v2/status/java/mc.craftceres.cc"
        );
    }

    #[test]
    fn test_social_links_are_https() {
        assert!(SOCIAL_LINKS.iter().all(|l| l.url.starts_with("https://")));
    }

    #[test]
    fn test_default_fallback_keeps_pending() {
        assert_eq!(STATUS_FALLBACK, StatusFallback::default());
    }
}
