use ratatui::widgets::ListState;

use crate::api::{ApiResult, GeneralResponse, Id, ProfileUpdate, User};
use crate::services::ApiCommand;

pub const STATUS_OPTIONS: &[&str] = &["Available", "Busy", "Away", "Inactive"];

pub const SKILL_OPTIONS: &[&str] = &[
    "Web", "Pwn", "Reverse", "Crypto", "Forensics", "Misc", "OSINT", "Blockchain", "AI",
];

pub const RHYTHM_OPTIONS: &[&str] = &[
    "maimai", "CHUNITHM", "ONGEKI", "SDVX", "osu!", "Arcaea", "Phigros", "Project Sekai", "Taiko",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeFocus {
    Status,
    Skills,
    RhythmGames,
    Events,
    Save,
}

impl MeFocus {
    const ORDER: [MeFocus; 5] = [
        MeFocus::Status,
        MeFocus::Skills,
        MeFocus::RhythmGames,
        MeFocus::Events,
        MeFocus::Save,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Presence toggles membership: add when absent, remove when present.
pub fn toggle_tag(list: &mut Vec<String>, value: &str) {
    if let Some(index) = list.iter().position(|v| v == value) {
        list.remove(index);
    } else {
        list.push(value.to_string());
    }
}

/// State management for the operator's own profile
pub struct MeState {
    pub user: Option<User>,
    pub loading: bool,
    pub notice: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub rhythm_games: Vec<String>,
    pub focus: MeFocus,
    /// Highlighted option inside the focused row.
    pub cursor: usize,
    pub events_state: ListState,
}

impl Default for MeState {
    fn default() -> Self {
        Self {
            user: None,
            loading: false,
            notice: None,
            status: String::new(),
            skills: Vec::new(),
            rhythm_games: Vec::new(),
            focus: MeFocus::Status,
            cursor: 0,
            events_state: ListState::default(),
        }
    }
}

impl MeState {
    pub fn begin_load(&mut self) -> ApiCommand {
        self.loading = true;
        self.notice = None;
        ApiCommand::LoadProfile
    }

    pub fn apply_profile(&mut self, result: ApiResult<User>) {
        self.loading = false;
        match (result.ok, result.data.clone()) {
            (true, Some(user)) => {
                self.status = user.status.clone();
                self.skills = user.skills.clone();
                self.rhythm_games = user.rhythm_games.clone();
                self.events_state.select(if user.events.is_empty() { None } else { Some(0) });
                self.user = Some(user);
            }
            _ => {
                self.user = None;
                self.events_state.select(None);
                self.notice = Some(result.error_text("Failed to load profile"));
            }
        }
    }

    fn row_len(&self) -> usize {
        match self.focus {
            MeFocus::Status => STATUS_OPTIONS.len(),
            MeFocus::Skills => SKILL_OPTIONS.len(),
            MeFocus::RhythmGames => RHYTHM_OPTIONS.len(),
            MeFocus::Events => self.user.as_ref().map(|u| u.events.len()).unwrap_or(0),
            MeFocus::Save => 1,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.cursor = 0;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.row_len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor as isize + delta).rem_euclid(len as isize) as usize;
        if self.focus == MeFocus::Events {
            self.events_state.select(Some(self.cursor));
        }
    }

    /// Status picks the highlighted option; tag rows toggle it.
    pub fn activate(&mut self) {
        match self.focus {
            MeFocus::Status => {
                if let Some(option) = STATUS_OPTIONS.get(self.cursor) {
                    self.status = option.to_string();
                }
            }
            MeFocus::Skills => {
                if let Some(option) = SKILL_OPTIONS.get(self.cursor) {
                    toggle_tag(&mut self.skills, option);
                }
            }
            MeFocus::RhythmGames => {
                if let Some(option) = RHYTHM_OPTIONS.get(self.cursor) {
                    toggle_tag(&mut self.rhythm_games, option);
                }
            }
            MeFocus::Events | MeFocus::Save => {}
        }
    }

    pub fn highlighted_event(&self) -> Option<Id> {
        if self.focus != MeFocus::Events {
            return None;
        }
        self.user.as_ref()?.events.get(self.cursor).map(|e| e.id.clone())
    }

    /// Full replacement set, sent as-is.
    pub fn submit(&mut self) -> Option<ApiCommand> {
        self.user.as_ref()?;
        Some(ApiCommand::UpdateProfile(ProfileUpdate {
            status: self.status.clone(),
            skills: self.skills.clone(),
            rhythm_games: self.rhythm_games.clone(),
        }))
    }

    /// Notice for the save. A successful save reloads so badges and events
    /// come from the server; a failed one keeps the unsent edits.
    pub fn apply_update(&mut self, result: ApiResult<GeneralResponse>) -> Option<ApiCommand> {
        if !result.ok {
            self.notice = Some(result.error_text("Failed to update profile"));
            return None;
        }
        self.notice = Some("Profile updated".to_string());
        self.loading = true;
        Some(ApiCommand::LoadProfile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile() -> User {
        serde_json::from_value(json!({
            "discord_id": 1,
            "status": "Busy",
            "skills": ["Web"],
            "rhythm_games": [],
            "roles": ["member"],
            "events": [{ "id": 4, "title": "DEF CON Quals", "type": "ctftime" }]
        }))
        .unwrap()
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let original = vec!["Web".to_string(), "Pwn".to_string()];
        let mut tags = original.clone();
        toggle_tag(&mut tags, "Crypto");
        assert_eq!(tags.len(), 3);
        toggle_tag(&mut tags, "Crypto");
        assert_eq!(tags, original);

        toggle_tag(&mut tags, "Web");
        toggle_tag(&mut tags, "Web");
        assert!(tags.contains(&"Web".to_string()));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_load_mirrors_editable_fields() {
        let mut me = MeState::default();
        assert_eq!(me.begin_load(), ApiCommand::LoadProfile);
        me.apply_profile(ApiResult::success(200, Some(profile())));
        assert!(!me.loading);
        assert_eq!(me.status, "Busy");
        assert_eq!(me.skills, vec!["Web".to_string()]);
        assert_eq!(me.events_state.selected(), Some(0));
    }

    #[test]
    fn test_failed_load_clears_profile_and_shows_details() {
        let mut me = MeState::default();
        me.apply_profile(ApiResult::success(200, Some(profile())));
        me.apply_profile(ApiResult::failure(500, "boom", Some(json!({ "message": "boom", "trace": "x" }))));
        assert!(me.user.is_none());
        let notice = me.notice.unwrap();
        assert!(notice.starts_with("boom\n"));
        assert!(notice.contains("\"trace\""));
    }

    #[test]
    fn test_submit_sends_full_set() {
        let mut me = MeState::default();
        assert!(me.submit().is_none());
        me.apply_profile(ApiResult::success(200, Some(profile())));

        me.focus = MeFocus::Skills;
        me.cursor = 1;
        me.activate();
        me.focus = MeFocus::Status;
        me.cursor = 0;
        me.activate();

        match me.submit().unwrap() {
            ApiCommand::UpdateProfile(update) => {
                assert_eq!(update.status, "Available");
                assert_eq!(update.skills, vec!["Web".to_string(), "Pwn".to_string()]);
                assert!(update.rhythm_games.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_update_reloads_and_keeps_notice() {
        let mut me = MeState::default();
        me.apply_profile(ApiResult::success(200, Some(profile())));
        let next = me.apply_update(ApiResult::success(200, None));
        assert_eq!(next, Some(ApiCommand::LoadProfile));
        me.apply_profile(ApiResult::success(200, Some(profile())));
        assert_eq!(me.notice.as_deref(), Some("Profile updated"));
    }

    #[test]
    fn test_failed_save_keeps_unsent_edits() {
        let mut me = MeState::default();
        me.apply_profile(ApiResult::success(200, Some(profile())));
        me.focus = MeFocus::Skills;
        me.cursor = 1;
        me.activate();
        assert_eq!(me.skills, vec!["Web".to_string(), "Pwn".to_string()]);

        let next = me.apply_update(ApiResult::failure(500, "Database locked", None));
        assert!(next.is_none());
        assert!(!me.loading);
        assert_eq!(me.notice.as_deref(), Some("Database locked"));
        assert_eq!(me.skills, vec!["Web".to_string(), "Pwn".to_string()]);
        assert_eq!(me.status, "Busy");
    }

    #[test]
    fn test_events_row_deep_links() {
        let mut me = MeState::default();
        me.apply_profile(ApiResult::success(200, Some(profile())));
        me.focus = MeFocus::Events;
        me.move_cursor(0);
        assert_eq!(me.highlighted_event(), Some(Id::Num(4)));
    }
}
