//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.
//! Brand icons only exist in the Bootstrap set and ignore the theme.

use icondata::Icon;

use crate::config::{IconTheme, SocialKind};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuClipboard as Copy, LuServer as Server, LuShare2 as Share,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheck2 as Check, BsClipboard as Copy, BsHddNetwork as Server, BsShare as Share,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHECK, Check);
themed_icon!(COPY, Copy);
themed_icon!(SERVER, Server);
themed_icon!(SHARE, Share);

/// Brand icon for a social link.
pub fn social(kind: SocialKind) -> Icon {
    match kind {
        SocialKind::Discord => icondata::BsDiscord,
        SocialKind::Instagram => icondata::BsInstagram,
        SocialKind::Youtube => icondata::BsYoutube,
        SocialKind::Tiktok => icondata::BsTiktok,
    }
}
