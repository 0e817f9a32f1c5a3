use ratatui::widgets::ListState;

use crate::api::{ApiResult, Id, User};
use crate::services::ApiCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersFocus {
    List,
    Events,
}

/// State management for the member roster
pub struct UsersState {
    pub users: Vec<User>,
    pub selected: Option<User>,
    pub loading: bool,
    pub loaded: bool,
    pub notice: Option<String>,
    pub focus: UsersFocus,
    pub list_state: ListState,
    pub events_state: ListState,
    /// Requested from elsewhere before the roster arrived.
    pending_open: Option<Id>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            selected: None,
            loading: false,
            loaded: false,
            notice: None,
            focus: UsersFocus::List,
            list_state: ListState::default(),
            events_state: ListState::default(),
            pending_open: None,
        }
    }
}

impl UsersState {
    pub fn begin_load(&mut self) -> ApiCommand {
        self.loading = true;
        self.notice = None;
        ApiCommand::LoadUsers
    }

    /// Applies the roster and resolves any pending selection; the returned
    /// command fetches a pending user missing from the roster.
    pub fn apply_users(&mut self, result: ApiResult<Vec<User>>) -> Option<ApiCommand> {
        self.loading = false;
        self.loaded = true;
        if !result.ok {
            self.users.clear();
            self.set_selected(None);
            self.notice = Some(result.error_text("Failed to load users"));
            return None;
        }
        self.users = result.data.unwrap_or_default();

        let wanted = self
            .pending_open
            .take()
            .or_else(|| self.selected.as_ref().map(|u| u.discord_id.clone()));
        match wanted {
            Some(id) => self.resolve(id),
            None => {
                let first = self.users.first().cloned();
                self.set_selected(first);
                None
            }
        }
    }

    fn resolve(&mut self, id: Id) -> Option<ApiCommand> {
        if let Some(user) = self.users.iter().find(|u| u.discord_id.same_as(&id)).cloned() {
            self.set_selected(Some(user));
            return None;
        }
        Some(ApiCommand::LoadUser(id))
    }

    /// Opens a user requested from another section: the loaded roster is
    /// checked first, then the user is fetched on its own.
    pub fn open(&mut self, id: Id) -> Option<ApiCommand> {
        if self.selected.as_ref().is_some_and(|u| u.discord_id.same_as(&id)) {
            return None;
        }
        if !self.loaded {
            self.pending_open = Some(id);
            return None;
        }
        self.resolve(id)
    }

    pub fn apply_user(&mut self, id: &Id, result: ApiResult<User>) {
        match (result.ok, result.data.clone()) {
            (true, Some(user)) => self.set_selected(Some(user)),
            _ => {
                self.notice = Some(result.error_text(&format!("Failed to load user {}", id)));
            }
        }
    }

    fn set_selected(&mut self, user: Option<User>) {
        let index = user
            .as_ref()
            .and_then(|s| self.users.iter().position(|u| u.discord_id.same_as(&s.discord_id)));
        self.list_state.select(index);
        let has_events = user.as_ref().is_some_and(|u| !u.events.is_empty());
        self.events_state.select(if has_events { Some(0) } else { None });
        self.focus = UsersFocus::List;
        self.selected = user;
    }

    pub fn select(&mut self, index: usize) -> Option<Id> {
        let user = self.users.get(index)?.clone();
        let id = user.discord_id.clone();
        self.set_selected(Some(user));
        Some(id)
    }

    pub fn select_offset(&mut self, delta: isize) -> Option<Id> {
        if self.users.is_empty() {
            return None;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.users.len() as isize - 1) as usize;
        self.select(next)
    }

    pub fn focus_events(&mut self) {
        if self.selected.as_ref().is_some_and(|u| !u.events.is_empty()) {
            self.focus = UsersFocus::Events;
        }
    }

    pub fn focus_list(&mut self) {
        self.focus = UsersFocus::List;
    }

    pub fn event_offset(&mut self, delta: isize) {
        let len = self.selected.as_ref().map(|u| u.events.len()).unwrap_or(0);
        if len == 0 {
            return;
        }
        let current = self.events_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.events_state.select(Some(next));
    }

    pub fn highlighted_event(&self) -> Option<Id> {
        let index = self.events_state.selected()?;
        self.selected.as_ref()?.events.get(index).map(|e| e.id.clone())
    }
}
