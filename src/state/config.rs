//! Config section: guild configuration items with local drafts.

use once_cell::sync::Lazy;
use ratatui::widgets::ListState;
use regex::Regex;
use serde_json::Value;

use super::modal::{Modal, ModalAction, SelectOption};
use crate::api::{ApiResult, ConfigItem, ConfigResponse, GeneralResponse, GuildRef};
use crate::services::ApiCommand;

static STATUS_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+ID:\s*").expect("valid regex"));
static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").expect("valid regex"));

/// What a config value refers to, by key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    Channel,
    Category,
    Role,
}

impl ConfigKind {
    pub fn from_key(key: &str) -> Option<Self> {
        if key.ends_with("CHANNEL_ID") {
            Some(ConfigKind::Channel)
        } else if key.ends_with("CATEGORY_ID") {
            Some(ConfigKind::Category)
        } else if key.ends_with("ROLE_ID") {
            Some(ConfigKind::Role)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigKind::Channel => "Channel",
            ConfigKind::Category => "Category",
            ConfigKind::Role => "Role",
        }
    }
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn value_to_draft(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Puts the id of a status message like "Channel not found ID: 123" on its own line.
pub fn format_status_message(message: &str) -> String {
    if !message.contains(" ID:") {
        return message.to_string();
    }
    STATUS_ID_RE.replace(message, "\nID: ").into_owned()
}

/// JSON sent for a draft. With coercion on, integer-looking drafts go out as numbers.
pub fn draft_payload(draft: &str, coerce_numeric: bool) -> Value {
    let trimmed = draft.trim();
    if coerce_numeric && NUMERIC_RE.is_match(trimmed) {
        if let Ok(n) = trimmed.parse::<u64>() {
            return Value::from(n);
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::from(n);
        }
    }
    Value::String(draft.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub item: ConfigItem,
    pub draft: String,
}

impl ConfigEntry {
    pub fn kind(&self) -> Option<ConfigKind> {
        ConfigKind::from_key(&self.item.key)
    }
}

/// State management for guild configuration
pub struct ConfigState {
    pub entries: Vec<ConfigEntry>,
    pub guild_name: Option<String>,
    pub notice: Option<String>,
    pub can_edit: bool,
    pub loading: bool,
    pub channels: Vec<GuildRef>,
    pub categories: Vec<GuildRef>,
    pub roles: Vec<GuildRef>,
    /// Failures from the last guild option fetch, one line per list.
    pub options_error: Option<String>,
    /// Free-text editing of the highlighted draft is active.
    pub editing: bool,
    pub coerce_numeric: bool,
    pub list_state: ListState,
}

impl ConfigState {
    pub fn new(coerce_numeric: bool) -> Self {
        Self {
            entries: Vec::new(),
            guild_name: None,
            notice: None,
            can_edit: true,
            loading: false,
            channels: Vec::new(),
            categories: Vec::new(),
            roles: Vec::new(),
            options_error: None,
            editing: false,
            coerce_numeric,
            list_state: ListState::default(),
        }
    }

    pub fn begin_load(&mut self) -> ApiCommand {
        self.loading = true;
        ApiCommand::LoadConfig
    }

    pub fn apply_config(&mut self, result: ApiResult<ConfigResponse>) {
        self.loading = false;
        self.editing = false;
        match (result.ok, result.data.clone()) {
            (true, Some(response)) => {
                let previous = self.list_state.selected();
                self.entries = response
                    .config
                    .into_iter()
                    .map(|item| ConfigEntry { draft: value_to_draft(&item.value), item })
                    .collect();
                self.guild_name = response.guild_name;
                self.notice = None;
                self.can_edit = true;
                let index = match previous {
                    Some(i) if i < self.entries.len() => Some(i),
                    _ if !self.entries.is_empty() => Some(0),
                    _ => None,
                };
                self.list_state.select(index);
            }
            _ => {
                self.entries.clear();
                self.list_state.select(None);
                self.notice = Some(result.error_text("Failed to load config"));
                // 403 is a missing capability, not a transient failure.
                self.can_edit = !result.is_forbidden();
                if !self.can_edit {
                    tracing::info!("config editing disabled: administrator permission required");
                }
            }
        }
    }

    pub fn apply_guild_options(
        &mut self,
        channels: ApiResult<Vec<GuildRef>>,
        categories: ApiResult<Vec<GuildRef>>,
        roles: ApiResult<Vec<GuildRef>>,
    ) {
        let mut errors = Vec::new();
        let mut take = |result: ApiResult<Vec<GuildRef>>, what: &str| {
            if result.ok {
                return result.data.unwrap_or_default();
            }
            errors.push(result.error_text(&format!("Failed to load {}", what)));
            Vec::new()
        };
        self.channels = take(channels, "channels");
        self.categories = take(categories, "categories");
        self.roles = take(roles, "roles");
        self.options_error = if errors.is_empty() {
            None
        } else {
            let text = errors.join("\n");
            tracing::warn!(error = %text, "guild options unavailable");
            Some(text)
        };
    }

    pub fn options_for(&self, key: &str) -> &[GuildRef] {
        match ConfigKind::from_key(key) {
            Some(ConfigKind::Channel) => &self.channels,
            Some(ConfigKind::Category) => &self.categories,
            Some(ConfigKind::Role) => &self.roles,
            None => &[],
        }
    }

    /// True when the entry is edited with a picker rather than free text.
    pub fn uses_picker(&self, entry: &ConfigEntry) -> bool {
        !self.options_for(&entry.item.key).is_empty()
    }

    pub fn selected_entry(&self) -> Option<&ConfigEntry> {
        self.entries.get(self.list_state.selected()?)
    }

    pub fn select_offset(&mut self, delta: isize) {
        if self.entries.is_empty() || self.editing {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.entries.len() as isize - 1) as usize;
        self.list_state.select(Some(next));
    }

    /// Picker dialog for the highlighted entry, if it maps to a guild list.
    pub fn picker(&self) -> Option<Modal> {
        if !self.can_edit {
            return None;
        }
        let entry = self.selected_entry()?;
        let refs = self.options_for(&entry.item.key);
        if refs.is_empty() {
            return None;
        }
        let mut options = vec![SelectOption::new("(None)", "")];
        options.extend(refs.iter().map(|r| SelectOption::new(format!("{} ({})", r.name, r.id), r.id.to_string())));
        let kind = entry.kind().map(ConfigKind::label).unwrap_or("Value");
        Some(Modal::select(
            entry.item.key.clone(),
            entry.item.description.clone(),
            kind,
            options,
            entry.draft.clone(),
            ModalAction::PickConfigValue(entry.item.key.clone()),
        ))
    }

    pub fn begin_edit(&mut self) -> bool {
        if !self.can_edit || self.selected_entry().is_none() {
            return false;
        }
        self.editing = true;
        true
    }

    pub fn end_edit(&mut self) {
        self.editing = false;
    }

    pub fn set_draft(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.key == key) {
            entry.draft = value.to_string();
        }
    }

    fn selected_entry_mut(&mut self) -> Option<&mut ConfigEntry> {
        let index = self.list_state.selected()?;
        self.entries.get_mut(index)
    }

    pub fn push_char(&mut self, c: char) {
        if self.editing {
            if let Some(entry) = self.selected_entry_mut() {
                entry.draft.push(c);
            }
        }
    }

    pub fn pop_char(&mut self) {
        if self.editing {
            if let Some(entry) = self.selected_entry_mut() {
                entry.draft.pop();
            }
        }
    }

    /// Sends the highlighted draft. Nothing is sent while editing is disabled.
    pub fn save(&mut self) -> Option<ApiCommand> {
        if !self.can_edit {
            return None;
        }
        self.editing = false;
        let entry = self.selected_entry()?;
        Some(ApiCommand::UpdateConfig {
            key: entry.item.key.clone(),
            value: draft_payload(&entry.draft, self.coerce_numeric),
        })
    }

    /// Outcome dialog; a successful write always re-reads the list.
    pub fn apply_update(&mut self, key: &str, result: ApiResult<GeneralResponse>) -> (Modal, Option<ApiCommand>) {
        if result.ok {
            tracing::info!(key, "config updated");
            (Modal::alert("Success", "Config updated"), Some(self.begin_load()))
        } else {
            (Modal::alert("Failed", result.error_text("Failed to update config")), None)
        }
    }
}
