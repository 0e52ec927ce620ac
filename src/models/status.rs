use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::status as text;
use crate::core::error::FetchError;

/// Player counts reported by the status API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCount {
    pub online: i64,
    pub max: i64,
}

/// Server version block (only the cleaned name is used).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub name_clean: Option<String>,
}

/// Message of the day block (only the plain-text variant is used).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Motd {
    #[serde(default, deserialize_with = "lenient")]
    pub clean: Option<String>,
}

/// Decode an informational field, dropping it when it has an unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Response body of the Java status endpoint.
///
/// `online` is kept as raw JSON: only the literal boolean `true` counts as
/// online, so `1` or `"true"` must not be coerced during deserialization.
/// `players` stays raw as well and is only decoded for an online server, so
/// nothing but `online` can keep an offline response from rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    #[serde(default)]
    pub online: Value,
    #[serde(default)]
    pub players: Value,
    #[serde(default, deserialize_with = "lenient")]
    pub host: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub port: Option<u16>,
    #[serde(default, deserialize_with = "lenient")]
    pub version: Option<VersionInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub motd: Option<Motd>,
}

impl ServerStatus {
    /// Parse a raw response body.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|e| FetchError::JsonParseError(e.to_string()))
    }

    /// Convert an already parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        serde_json::from_value(value).map_err(|e| FetchError::JsonParseError(e.to_string()))
    }

    /// True only when `online` is the JSON boolean `true`.
    pub fn is_online(&self) -> bool {
        self.online == Value::Bool(true)
    }

    /// Decode the player counts.
    pub fn player_count(&self) -> Result<PlayerCount, FetchError> {
        PlayerCount::deserialize(&self.players)
            .map_err(|e| FetchError::JsonParseError(format!("players: {}", e)))
    }

    /// Hover title for the badge: `host:port · version`, when known.
    pub fn summary(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        let addr = match self.port {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        match self.version.as_ref().and_then(|v| v.name_clean.as_deref()) {
            Some(version) => Some(format!("{} · {}", addr, version)),
            None => Some(addr),
        }
    }
}

/// What the status badge currently displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusView {
    /// No status received yet; badge keeps its placeholder and styling.
    #[default]
    Pending,
    Online {
        online: i64,
        max: i64,
    },
    Offline,
    /// Status request failed and the fallback asks to say so.
    Unavailable,
}

impl StatusView {
    /// Derive the badge state from a status response.
    ///
    /// An online response without player counts is rejected.
    pub fn from_status(status: &ServerStatus) -> Result<Self, FetchError> {
        if !status.is_online() {
            return Ok(Self::Offline);
        }
        let players = status.player_count()?;
        Ok(Self::Online {
            online: players.online,
            max: players.max,
        })
    }

    /// Badge text.
    pub fn text(&self) -> String {
        match self {
            Self::Pending => text::PLACEHOLDER.to_string(),
            Self::Online { online, max } => {
                format!("{}{}/{}", text::ONLINE_PREFIX, online, max)
            }
            Self::Offline => text::OFFLINE_TEXT.to_string(),
            Self::Unavailable => text::UNAVAILABLE_TEXT.to_string(),
        }
    }

    /// Inline text color, `None` while pending.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::Pending => None,
            _ => Some(text::TEXT_COLOR),
        }
    }

    /// Inline background color, `None` while pending.
    pub fn background(&self) -> Option<&'static str> {
        match self {
            Self::Pending => None,
            Self::Online { .. } => Some(text::ONLINE_BACKGROUND),
            Self::Offline => Some(text::OFFLINE_BACKGROUND),
            Self::Unavailable => Some(text::UNAVAILABLE_BACKGROUND),
        }
    }

    /// Inline `style` attribute; empty while pending.
    pub fn inline_style(&self) -> String {
        match (self.color(), self.background()) {
            (Some(color), Some(background)) => {
                format!("color: {}; background-color: {}", color, background)
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(body: &str) -> StatusView {
        let status = ServerStatus::from_json(body).unwrap();
        StatusView::from_status(&status).unwrap()
    }

    #[test]
    fn test_online_renders_player_counts() {
        let v = view(r#"{"online":true,"players":{"online":5,"max":20}}"#);
        assert_eq!(v, StatusView::Online { online: 5, max: 20 });
        assert_eq!(v.text(), "En línea | 5/20");
        assert_eq!(v.background(), Some("#30d158"));
        assert_eq!(v.color(), Some("white"));
    }

    #[test]
    fn test_offline_renders_disconnected() {
        let v = view(r#"{"online":false,"players":{"online":0,"max":20}}"#);
        assert_eq!(v, StatusView::Offline);
        assert_eq!(v.text(), "Desconectado");
        assert_eq!(v.background(), Some("red"));
        assert_eq!(v.color(), Some("white"));
    }

    #[test]
    fn test_only_literal_true_is_online() {
        for online in ["false", "null", "1", "\"true\"", "{}", "[]"] {
            let body = format!(r#"{{"online":{},"players":{{"online":3,"max":10}}}}"#, online);
            assert_eq!(view(&body), StatusView::Offline, "online = {}", online);
        }
    }

    #[test]
    fn test_missing_online_is_offline() {
        assert_eq!(view(r#"{"players":{"online":1,"max":2}}"#), StatusView::Offline);
    }

    #[test]
    fn test_offline_without_players() {
        // mcstatus.io omits `players` for offline servers
        let v = view(r#"{"online":false,"host":"mc.craftceres.cc","port":25565}"#);
        assert_eq!(v, StatusView::Offline);
    }

    #[test]
    fn test_offline_ignores_malformed_players() {
        for body in [
            r#"{"online":false,"players":{"online":-1,"max":20}}"#,
            r#"{"online":false,"players":"n/a"}"#,
            r#"{"online":false,"players":{"online":1.5}}"#,
        ] {
            assert_eq!(view(body), StatusView::Offline, "{}", body);
        }
    }

    #[test]
    fn test_bad_extra_fields_do_not_block_render() {
        let status =
            ServerStatus::from_json(r#"{"online":false,"players":null,"port":70000,"host":7}"#)
                .unwrap();
        assert_eq!(status.port, None);
        assert_eq!(status.host, None);
        assert_eq!(StatusView::from_status(&status).unwrap(), StatusView::Offline);

        let status = ServerStatus::from_json(
            r#"{"online":true,"players":{"online":2,"max":8},"version":"1.20","motd":{"clean":["x"]}}"#,
        )
        .unwrap();
        assert_eq!(status.version, None);
        assert_eq!(status.motd, Some(Motd { clean: None }));
        let v = view(r#"{"online":true,"players":{"online":2,"max":8},"port":-3}"#);
        assert_eq!(v.text(), "En línea | 2/8");
    }

    #[test]
    fn test_negative_counts_render_as_reported() {
        let v = view(r#"{"online":true,"players":{"online":-1,"max":20}}"#);
        assert_eq!(v.text(), "En línea | -1/20");
    }

    #[test]
    fn test_online_with_malformed_players_is_error() {
        let status = ServerStatus::from_json(r#"{"online":true,"players":{"max":20}}"#).unwrap();
        assert!(matches!(
            StatusView::from_status(&status),
            Err(FetchError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_online_without_players_is_error() {
        let status = ServerStatus::from_json(r#"{"online":true}"#).unwrap();
        assert!(matches!(
            StatusView::from_status(&status),
            Err(FetchError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ServerStatus::from_json("<html>"),
            Err(FetchError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_full_api_payload() {
        let body = r#"{
            "online": true,
            "host": "mc.craftceres.cc",
            "port": 25565,
            "ip_address": "203.0.113.7",
            "eula_blocked": false,
            "retrieved_at": 1700000000000,
            "expires_at": 1700000060000,
            "version": { "name_raw": "Paper 1.20.4", "name_clean": "Paper 1.20.4", "protocol": 765 },
            "players": { "online": 12, "max": 100, "list": [] },
            "motd": { "raw": "§aCraftCeres", "clean": "CraftCeres", "html": "" },
            "icon": null,
            "mods": [],
            "software": null,
            "plugins": [],
            "srv_record": null
        }"#;
        let status = ServerStatus::from_json(body).unwrap();
        assert!(status.is_online());
        assert_eq!(status.summary().as_deref(), Some("mc.craftceres.cc:25565 · Paper 1.20.4"));
        assert_eq!(status.motd.and_then(|m| m.clean).as_deref(), Some("CraftCeres"));
        assert_eq!(view(body).text(), "En línea | 12/100");
    }

    #[test]
    fn test_summary_without_host() {
        assert_eq!(ServerStatus::default().summary(), None);
    }

    #[test]
    fn test_pending_has_no_inline_style() {
        let v = StatusView::default();
        assert_eq!(v, StatusView::Pending);
        assert_eq!(v.color(), None);
        assert_eq!(v.background(), None);
        assert_eq!(v.text(), "Cargando...");
        assert_eq!(v.inline_style(), "");
    }

    #[test]
    fn test_inline_style() {
        assert_eq!(
            StatusView::Online { online: 1, max: 2 }.inline_style(),
            "color: white; background-color: #30d158"
        );
        assert_eq!(
            StatusView::Offline.inline_style(),
            "color: white; background-color: red"
        );
    }

    #[test]
    fn test_unavailable() {
        let v = StatusView::Unavailable;
        assert_eq!(v.text(), "Estado no disponible");
        assert_eq!(v.background(), Some("#8e8e93"));
    }
}
