//! Shapes exchanged with the bot's REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque identifier. The backend sends Discord snowflakes and database keys
/// as numbers or strings; either way they are only ever compared and echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(u64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Id::Num(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl Id {
    /// Rebuilds an id from text typed or picked in the UI, keeping numbers numeric.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<u64>()
            .map(Id::Num)
            .unwrap_or_else(|_| Id::Text(raw.trim().to_string()))
    }

    /// Same token regardless of whether it arrived as a number or a string.
    pub fn same_as(&self, other: &Id) -> bool {
        self == other || self.to_string() == other.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Ctftime,
    Custom,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Ctftime => "ctftime",
            EventKind::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventKind::Ctftime => "CTFTime",
            EventKind::Custom => "Custom",
        }
    }

    /// CTFTime events page by finish time; custom events page by id alone.
    pub fn is_time_ordered(self) -> bool {
        matches!(self, EventKind::Ctftime)
    }

    pub fn other(self) -> Self {
        match self {
            EventKind::Ctftime => EventKind::Custom,
            EventKind::Custom => EventKind::Ctftime,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordChannel {
    pub id: Id,
    #[serde(default)]
    pub jump_url: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// Entry of a guild reference list (text channel, category or role).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildRef {
    pub id: Id,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: Id,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub event_id: Option<Id>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub finish: Option<i64>,
    #[serde(default)]
    pub channel_id: Option<Id>,
    #[serde(default)]
    pub channel: Option<DiscordChannel>,
    #[serde(default)]
    pub scheduled_event_id: Option<Id>,
    #[serde(default)]
    pub now_running: Option<bool>,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub users: Vec<User>,
}

impl EventItem {
    pub fn is_running(&self) -> bool {
        self.now_running.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: Id,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "administrator", alias = "Administrator", alias = "Admin", alias = "ADMIN")]
    Admin,
    #[serde(alias = "PM", alias = "Pm", alias = "privileged_manager")]
    Pm,
    #[serde(alias = "Member", alias = "MEMBER")]
    Member,
    #[serde(other)]
    Other,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Pm => "PM",
            Role::Member => "Member",
            Role::Other => "Other",
        }
    }
}

/// A guild member as the bot knows it. Participant lists inside events carry
/// the same shape with `events` left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub discord_id: Id,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub rhythm_games: Vec<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub discord: Option<DiscordUser>,
    #[serde(default)]
    pub events: Vec<EventItem>,
}

impl User {
    /// Display name, then username, then the raw id.
    pub fn display_name(&self) -> String {
        self.discord
            .as_ref()
            .and_then(|d| {
                d.display_name
                    .as_deref()
                    .filter(|n| !n.is_empty())
                    .or_else(|| d.name.as_deref().filter(|n| !n.is_empty()))
            })
            .map(str::to_string)
            .unwrap_or_else(|| self.discord_id.to_string())
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// PM or administrator: may archive and relink events.
    pub fn can_manage_events(&self) -> bool {
        self.has_role(Role::Admin) || self.has_role(Role::Pm)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigItem {
    pub key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigResponse {
    #[serde(default)]
    pub guild_id: Option<Id>,
    #[serde(default)]
    pub guild_name: Option<String>,
    #[serde(default)]
    pub config: Vec<ConfigItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub status: String,
    pub skills: Vec<String>,
    pub rhythm_games: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCustomEvent {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelinkRequest {
    pub channel_id: Id,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigUpdate {
    pub value: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let ids: Vec<Id> = serde_json::from_value(json!([12, "abc", "34"])).unwrap();
        assert_eq!(ids[0], Id::Num(12));
        assert_eq!(ids[1], Id::Text("abc".into()));
        assert!(ids[2].same_as(&Id::Num(34)));
        assert_eq!(Id::parse(" 99 "), Id::Num(99));
    }

    #[test]
    fn test_event_parses_with_missing_optionals() {
        let event: EventItem = serde_json::from_value(json!({
            "id": 7,
            "title": "corCTF",
            "type": "ctftime"
        }))
        .unwrap();
        assert_eq!(event.kind, EventKind::Ctftime);
        assert!(!event.archived);
        assert!(event.users.is_empty());
        assert!(!event.is_running());
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let mut user: User = serde_json::from_value(json!({
            "discord_id": 42,
            "discord": { "id": 42, "display_name": "Alice", "name": "alice" }
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Alice");

        user.discord.as_mut().unwrap().display_name = None;
        assert_eq!(user.display_name(), "alice");

        user.discord = None;
        assert_eq!(user.display_name(), "42");
    }

    #[test]
    fn test_roles_and_capability() {
        let user: User = serde_json::from_value(json!({
            "discord_id": "1",
            "roles": ["member", "PM", "something-new"]
        }))
        .unwrap();
        assert_eq!(user.roles, vec![Role::Member, Role::Pm, Role::Other]);
        assert!(user.can_manage_events());
    }
}
