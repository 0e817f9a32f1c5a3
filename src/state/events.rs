//! Events section: filtered, cursor-paged event list with a detail pane.

use ratatui::widgets::ListState;
use std::collections::HashSet;

use super::modal::{Modal, ModalAction, SelectOption};
use crate::api::{ApiResult, EventItem, EventKind, GeneralResponse, GuildRef, Id};
use crate::services::{ApiCommand, EventFetch};

pub const PAGE_SIZE: usize = 20;

/// Only links into Discord itself are rendered as links.
pub const JUMP_URL_PREFIX: &str = "https://discord.com/channels/";

/// Position after the last event of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub before_id: Id,
    pub finish_before: Option<i64>,
}

impl Cursor {
    pub fn after(kind: EventKind, last: &EventItem) -> Self {
        Self {
            before_id: last.id.clone(),
            finish_before: if kind.is_time_ordered() { last.finish } else { None },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    LoadingInitial,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Join,
    Archive,
    Relink,
    CreateCustom,
}

impl EventAction {
    pub fn success_message(self) -> &'static str {
        match self {
            EventAction::Join => "Join request sent",
            EventAction::Archive => "Archive request sent",
            EventAction::Relink => "Relink request sent",
            EventAction::CreateCustom => "Custom event created",
        }
    }

    pub fn failure_fallback(self) -> &'static str {
        match self {
            EventAction::Join => "Failed to join event",
            EventAction::Archive => "Failed to archive event",
            EventAction::Relink => "Failed to relink event",
            EventAction::CreateCustom => "Failed to create event",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventsFocus {
    List,
    Participants,
}

/// Appends `page` to `loaded`, skipping ids already present. Returns how many were added.
pub fn append_unique(loaded: &mut Vec<EventItem>, page: Vec<EventItem>) -> usize {
    let mut seen: HashSet<String> = loaded.iter().map(|e| e.id.to_string()).collect();
    let before = loaded.len();
    for item in page {
        if seen.insert(item.id.to_string()) {
            loaded.push(item);
        }
    }
    loaded.len() - before
}

pub fn safe_jump_url(event: &EventItem) -> Option<&str> {
    event
        .channel
        .as_ref()
        .and_then(|c| c.jump_url.as_deref())
        .filter(|url| url.starts_with(JUMP_URL_PREFIX))
}

pub struct EventsState {
    pub kind: EventKind,
    pub archived: bool,
    pub events: Vec<EventItem>,
    pub selected: Option<EventItem>,
    pub phase: LoadPhase,
    pub loading_more: bool,
    pub has_more: bool,
    pub cursor: Option<Cursor>,
    pub notice: Option<String>,
    /// Guild text channels offered when relinking.
    pub channels: Vec<GuildRef>,
    /// Why the channel list is missing, when its fetch failed.
    pub channels_error: Option<String>,
    pub focus: EventsFocus,
    pub list_state: ListState,
    pub participants_state: ListState,
    generation: u64,
    pending_open: Option<Id>,
}

impl Default for EventsState {
    fn default() -> Self {
        Self {
            kind: EventKind::Ctftime,
            archived: false,
            events: Vec::new(),
            selected: None,
            phase: LoadPhase::Idle,
            loading_more: false,
            has_more: false,
            cursor: None,
            notice: None,
            channels: Vec::new(),
            channels_error: None,
            focus: EventsFocus::List,
            list_state: ListState::default(),
            participants_state: ListState::default(),
            generation: 0,
            pending_open: None,
        }
    }
}

impl EventsState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::LoadingInitial
    }

    /// Back to defaults. The generation keeps counting so pages still in
    /// flight are dropped.
    pub fn reset(&mut self) {
        let generation = self.generation + 1;
        *self = Self::default();
        self.generation = generation;
    }

    /// Drops the list and cursor and asks for the first page again. Responses
    /// to earlier loads are ignored from here on.
    fn restart(&mut self) -> ApiCommand {
        self.generation += 1;
        self.phase = LoadPhase::LoadingInitial;
        self.events.clear();
        self.list_state.select(None);
        self.cursor = None;
        self.has_more = false;
        self.loading_more = false;
        ApiCommand::LoadEvents {
            generation: self.generation,
            kind: self.kind,
            archived: self.archived,
            cursor: None,
            append: false,
        }
    }

    pub fn reload(&mut self) -> ApiCommand {
        self.notice = None;
        self.restart()
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.focus = EventsFocus::List;
        self.participants_state.select(None);
    }

    pub fn set_kind(&mut self, kind: EventKind) -> Option<ApiCommand> {
        if kind == self.kind {
            return None;
        }
        self.kind = kind;
        self.clear_selection();
        Some(self.reload())
    }

    pub fn toggle_kind(&mut self) -> ApiCommand {
        self.kind = self.kind.other();
        self.clear_selection();
        self.reload()
    }

    pub fn toggle_archived(&mut self) -> ApiCommand {
        self.archived = !self.archived;
        self.clear_selection();
        self.reload()
    }

    /// Next page, if the list is settled and the last page was full.
    pub fn load_more(&mut self) -> Option<ApiCommand> {
        if self.phase != LoadPhase::Loaded || !self.has_more || self.loading_more {
            return None;
        }
        let cursor = self.cursor.clone()?;
        self.loading_more = true;
        Some(ApiCommand::LoadEvents {
            generation: self.generation,
            kind: self.kind,
            archived: self.archived,
            cursor: Some(cursor),
            append: true,
        })
    }

    pub fn near_end(&self, threshold: usize) -> bool {
        match self.list_state.selected() {
            Some(index) => index + threshold >= self.events.len(),
            None => false,
        }
    }

    /// Applies one page. Returns false when the page belongs to a superseded load.
    pub fn apply_page(&mut self, generation: u64, append: bool, result: ApiResult<Vec<EventItem>>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale event page");
            return false;
        }
        if append {
            self.loading_more = false;
        }

        if !result.ok {
            let text = result.error_text("Failed to load events");
            if append {
                self.notice = Some(text);
            } else {
                self.phase = LoadPhase::Errored;
                self.events.clear();
                self.list_state.select(None);
                self.clear_selection();
                self.notice = Some(text);
            }
            return true;
        }

        let page = result.data.unwrap_or_default();
        self.has_more = page.len() == PAGE_SIZE;
        if let Some(last) = page.last() {
            self.cursor = Some(Cursor::after(self.kind, last));
        }

        if append {
            let added = append_unique(&mut self.events, page);
            tracing::debug!(added, total = self.events.len(), "appended event page");
        } else {
            self.events.clear();
            append_unique(&mut self.events, page);
            self.phase = LoadPhase::Loaded;
            match self.selected.clone() {
                Some(item) if item.kind == self.kind && item.archived == self.archived => self.upsert(item),
                _ => {
                    self.clear_selection();
                    self.selected = self.events.first().cloned();
                }
            }
        }
        self.sync_list_selection();
        true
    }

    /// Replaces the entry with the same id, or puts `item` at the top.
    fn upsert(&mut self, item: EventItem) {
        match self.events.iter().position(|e| e.id.same_as(&item.id)) {
            Some(index) => self.events[index] = item,
            None => self.events.insert(0, item),
        }
    }

    fn sync_list_selection(&mut self) {
        let index = self
            .selected
            .as_ref()
            .and_then(|s| self.events.iter().position(|e| e.id.same_as(&s.id)));
        self.list_state.select(index);
    }

    /// Shows the event at `index` and returns its id for the shared navigation state.
    pub fn select(&mut self, index: usize) -> Option<Id> {
        let item = self.events.get(index)?.clone();
        let id = item.id.clone();
        self.clear_selection();
        self.selected = Some(item);
        self.list_state.select(Some(index));
        Some(id)
    }

    pub fn select_offset(&mut self, delta: isize) -> Option<Id> {
        if self.events.is_empty() {
            return None;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, self.events.len() as isize - 1) as usize;
        self.select(next)
    }

    pub fn selected_id(&self) -> Option<&Id> {
        self.selected.as_ref().map(|e| &e.id)
    }

    /// Resolves an event requested from another section. Nothing is fetched
    /// when it is already the selected event under the active filters.
    pub fn open(&mut self, id: Id) -> Option<ApiCommand> {
        let already_shown = self.selected.as_ref().is_some_and(|s| {
            s.id.same_as(&id) && s.kind == self.kind && s.archived == self.archived
        });
        if already_shown {
            return None;
        }
        self.pending_open = Some(id.clone());
        Some(ApiCommand::LoadEvent { id, purpose: EventFetch::DeepLink })
    }

    /// Adopts a deep-linked event. When it lives under other filters, the
    /// filters switch and the list restarts; the returned command loads it.
    pub fn apply_open(&mut self, id: &Id, result: ApiResult<EventItem>) -> Option<ApiCommand> {
        if !self.pending_open.as_ref().is_some_and(|p| p.same_as(id)) {
            return None;
        }
        self.pending_open = None;

        let item = match (result.ok, result.data.clone()) {
            (true, Some(item)) => item,
            _ => {
                self.notice = Some(result.error_text("Failed to load event"));
                return None;
            }
        };

        self.clear_selection();
        self.selected = Some(item.clone());
        if item.kind != self.kind || item.archived != self.archived {
            tracing::debug!(%id, kind = item.kind.as_str(), archived = item.archived, "deep link switches filters");
            self.kind = item.kind;
            self.archived = item.archived;
            return Some(self.restart());
        }
        self.upsert(item);
        self.sync_list_selection();
        None
    }

    /// Merges the authoritative copy fetched after a mutation.
    pub fn apply_refresh(&mut self, id: &Id, result: ApiResult<EventItem>) {
        let item = match (result.ok, result.data.clone()) {
            (true, Some(item)) => item,
            _ => {
                self.notice = Some(result.error_text("Failed to refresh event"));
                return;
            }
        };
        if let Some(existing) = self.events.iter_mut().find(|e| e.id.same_as(id)) {
            *existing = item.clone();
        }
        if self.selected.as_ref().is_some_and(|s| s.id.same_as(id)) {
            self.selected = Some(item);
        }
    }

    pub fn apply_channels(&mut self, result: ApiResult<Vec<GuildRef>>) {
        if result.ok {
            self.channels = result.data.unwrap_or_default();
            self.channels_error = None;
            return;
        }
        let error = result.error_text("Failed to load channels");
        tracing::warn!(%error, "text channel list unavailable");
        self.channels.clear();
        self.notice = Some(error.clone());
        self.channels_error = Some(error);
    }

    pub fn join_prompt(&self) -> Option<Modal> {
        let event = self.selected.as_ref()?;
        Some(Modal::confirm(
            "Join Event",
            format!("Join \"{}\"?\nYou will be added to the event channel.", event.title),
            ModalAction::JoinEvent(event.id.clone()),
        ))
    }

    pub fn archive_prompt(&self, can_manage: bool) -> Option<Modal> {
        let event = self.selected.as_ref()?;
        if !can_manage {
            return Some(permission_alert("Archiving"));
        }
        Some(Modal::confirm(
            "Archive Event",
            format!("Archive \"{}\"?\nPM permission required.", event.title),
            ModalAction::ArchiveEvent(event.id.clone()),
        ))
    }

    /// Current channel when it is one of the offered channels, else the first one.
    pub fn relink_default(&self) -> Option<String> {
        let current = self.selected.as_ref().and_then(|e| {
            e.channel.as_ref().map(|c| c.id.clone()).or_else(|| e.channel_id.clone())
        });
        current
            .filter(|id| self.channels.iter().any(|c| c.id.same_as(id)))
            .or_else(|| self.channels.first().map(|c| c.id.clone()))
            .map(|id| id.to_string())
    }

    pub fn relink_prompt(&self, can_manage: bool) -> Option<Modal> {
        let event = self.selected.as_ref()?;
        if !can_manage {
            return Some(permission_alert("Relinking"));
        }
        if let Some(error) = &self.channels_error {
            return Some(Modal::alert("Relink Channel", error.clone()));
        }
        if self.channels.is_empty() {
            return Some(Modal::alert("Relink Channel", "No text channels available."));
        }
        let options = self
            .channels
            .iter()
            .map(|c| SelectOption::new(format!("#{} ({})", c.name, c.id), c.id.to_string()))
            .collect();
        Some(
            Modal::select(
                "Relink Channel",
                format!("Link \"{}\" to another channel.", event.title),
                "Channel",
                options,
                self.relink_default().unwrap_or_default(),
                ModalAction::RelinkEvent(event.id.clone()),
            )
            .with_labels("Relink", "Cancel"),
        )
    }

    pub fn create_prompt(&self) -> Option<Modal> {
        if self.kind != EventKind::Custom {
            return None;
        }
        Some(
            Modal::input(
                "New Custom Event",
                "Enter custom event title",
                "Title",
                "Event title",
                "",
                ModalAction::CreateCustomEvent,
            )
            .with_labels("Create", "Cancel"),
        )
    }

    /// Outcome dialog for a mutation, plus the follow-up fetch on success.
    pub fn apply_mutation(
        &mut self,
        action: EventAction,
        id: Option<Id>,
        result: ApiResult<GeneralResponse>,
    ) -> (Modal, Option<ApiCommand>) {
        if !result.ok {
            return (Modal::alert("Failed", result.error_text(action.failure_fallback())), None);
        }
        let follow_up = match (action, id) {
            (EventAction::CreateCustom, _) => {
                self.kind = EventKind::Custom;
                self.clear_selection();
                Some(self.reload())
            }
            (_, Some(id)) => Some(ApiCommand::LoadEvent { id, purpose: EventFetch::Refresh }),
            (_, None) => None,
        };
        (Modal::alert("Success", action.success_message()), follow_up)
    }

    pub fn focus_participants(&mut self) {
        let has_participants = self.selected.as_ref().is_some_and(|e| !e.users.is_empty());
        if has_participants {
            self.focus = EventsFocus::Participants;
            self.participants_state.select(Some(0));
        }
    }

    pub fn focus_list(&mut self) {
        self.focus = EventsFocus::List;
        self.participants_state.select(None);
    }

    pub fn participant_offset(&mut self, delta: isize) {
        let len = self.selected.as_ref().map(|e| e.users.len()).unwrap_or(0);
        if len == 0 {
            return;
        }
        let current = self.participants_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.participants_state.select(Some(next));
    }

    pub fn highlighted_participant(&self) -> Option<Id> {
        let index = self.participants_state.selected()?;
        self.selected.as_ref()?.users.get(index).map(|u| u.discord_id.clone())
    }
}

fn permission_alert(what: &str) -> Modal {
    Modal::alert(
        "Permission required",
        format!("{} requires PM or administrator permission.", what),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DiscordChannel;

    fn event(id: u64, kind: EventKind, archived: bool) -> EventItem {
        EventItem {
            id: Id::Num(id),
            archived,
            event_id: None,
            title: format!("event {}", id),
            start: Some(1_700_000_000),
            finish: Some(1_700_000_000 + id as i64),
            channel_id: None,
            channel: None,
            scheduled_event_id: None,
            now_running: None,
            kind,
            users: Vec::new(),
        }
    }

    fn page(range: std::ops::Range<u64>, kind: EventKind) -> ApiResult<Vec<EventItem>> {
        ApiResult::success(200, Some(range.map(|i| event(i, kind, false)).collect()))
    }

    fn loaded_state(kind: EventKind, range: std::ops::Range<u64>) -> EventsState {
        let mut state = EventsState::default();
        if kind != state.kind {
            state.set_kind(kind);
        } else {
            state.reload();
        }
        let generation = state.generation();
        state.apply_page(generation, false, page(range, kind));
        state
    }

    #[test]
    fn test_full_custom_page_sets_cursor_from_last_id() {
        let mut state = EventsState::default();
        let command = state.set_kind(EventKind::Custom).unwrap();
        assert_eq!(
            command,
            ApiCommand::LoadEvents {
                generation: 1,
                kind: EventKind::Custom,
                archived: false,
                cursor: None,
                append: false
            }
        );
        assert!(state.is_loading());

        state.apply_page(1, false, page(0..20, EventKind::Custom));
        assert!(state.has_more);
        assert_eq!(state.phase, LoadPhase::Loaded);
        assert_eq!(
            state.cursor,
            Some(Cursor { before_id: Id::Num(19), finish_before: None })
        );
    }

    #[test]
    fn test_short_page_ends_pagination() {
        let mut state = loaded_state(EventKind::Ctftime, 0..7);
        assert!(!state.has_more);
        assert_eq!(state.cursor.as_ref().unwrap().finish_before, Some(1_700_000_006));
        assert!(state.load_more().is_none());
    }

    #[test]
    fn test_overlapping_pages_never_duplicate_ids() {
        let mut state = loaded_state(EventKind::Custom, 0..20);
        let command = state.load_more().unwrap();
        assert!(matches!(command, ApiCommand::LoadEvents { append: true, .. }));
        assert!(state.load_more().is_none(), "only one page in flight");

        let generation = state.generation();
        state.apply_page(generation, true, page(15..35, EventKind::Custom));
        assert_eq!(state.events.len(), 35);
        let ids: HashSet<String> = state.events.iter().map(|e| e.id.to_string()).collect();
        assert_eq!(ids.len(), state.events.len());
        assert!(state.has_more);

        state.load_more().unwrap();
        state.apply_page(generation, true, page(30..33, EventKind::Custom));
        assert_eq!(state.events.len(), 35);
        assert!(!state.has_more);
    }

    #[test]
    fn test_append_unique_drops_repeats_within_page() {
        let mut loaded = vec![event(1, EventKind::Custom, false)];
        let added = append_unique(
            &mut loaded,
            vec![event(1, EventKind::Custom, false), event(2, EventKind::Custom, false), event(2, EventKind::Custom, false)],
        );
        assert_eq!(added, 1);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_filter_change_discards_stale_page() {
        let mut state = EventsState::default();
        state.reload();
        let stale = state.generation();
        state.toggle_archived();
        assert!(!state.apply_page(stale, false, page(0..20, EventKind::Ctftime)));
        assert!(state.events.is_empty());
        assert!(state.is_loading());
    }

    #[test]
    fn test_initial_load_error_clears_list() {
        let mut state = loaded_state(EventKind::Ctftime, 0..3);
        let command = state.reload();
        let generation = match command {
            ApiCommand::LoadEvents { generation, .. } => generation,
            _ => unreachable!(),
        };
        state.apply_page(generation, false, ApiResult::failure(500, "HTTP 500", None));
        assert_eq!(state.phase, LoadPhase::Errored);
        assert!(state.events.is_empty());
        assert!(state.selected.is_none());
        assert_eq!(state.notice.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_deep_link_adopts_filters_of_resolved_event() {
        let mut state = loaded_state(EventKind::Ctftime, 0..5);
        let command = state.open(Id::Num(99)).unwrap();
        assert_eq!(command, ApiCommand::LoadEvent { id: Id::Num(99), purpose: EventFetch::DeepLink });

        let restart = state
            .apply_open(&Id::Num(99), ApiResult::success(200, Some(event(99, EventKind::Custom, true))))
            .unwrap();
        assert_eq!(state.kind, EventKind::Custom);
        assert!(state.archived);
        assert!(matches!(restart, ApiCommand::LoadEvents { kind: EventKind::Custom, archived: true, .. }));

        let generation = state.generation();
        state.apply_page(generation, false, ApiResult::success(200, Some(vec![event(5, EventKind::Custom, true)])));
        assert_eq!(state.selected_id(), Some(&Id::Num(99)));
        assert!(state.events.iter().any(|e| e.id == Id::Num(99)));
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_deep_link_within_filters_keeps_pagination() {
        let mut state = loaded_state(EventKind::Ctftime, 0..20);
        let cursor = state.cursor.clone();
        state.open(Id::Num(150)).unwrap();
        let follow_up =
            state.apply_open(&Id::Num(150), ApiResult::success(200, Some(event(150, EventKind::Ctftime, false))));
        assert!(follow_up.is_none());
        assert_eq!(state.cursor, cursor);
        assert!(state.has_more);
        assert_eq!(state.events.len(), 21);
        assert_eq!(state.selected_id(), Some(&Id::Num(150)));
    }

    #[test]
    fn test_open_skips_fetch_for_selected_event() {
        let mut state = loaded_state(EventKind::Ctftime, 0..3);
        let id = state.select(2).unwrap();
        assert!(state.open(id).is_none());
    }

    #[test]
    fn test_successful_join_refetches_event() {
        let mut state = loaded_state(EventKind::Ctftime, 0..3);
        let (modal, follow_up) = state.apply_mutation(
            EventAction::Join,
            Some(Id::Num(1)),
            ApiResult::success(200, Some(GeneralResponse::default())),
        );
        assert_eq!(modal.message, "Join request sent");
        assert_eq!(follow_up, Some(ApiCommand::LoadEvent { id: Id::Num(1), purpose: EventFetch::Refresh }));

        let mut refreshed = event(1, EventKind::Ctftime, false);
        refreshed.title = "renamed".into();
        state.select(1);
        state.apply_refresh(&Id::Num(1), ApiResult::success(200, Some(refreshed)));
        assert_eq!(state.events[1].title, "renamed");
        assert_eq!(state.selected.as_ref().unwrap().title, "renamed");
    }

    #[test]
    fn test_failed_join_shows_error_text() {
        let mut state = loaded_state(EventKind::Ctftime, 0..3);
        let (modal, follow_up) = state.apply_mutation(
            EventAction::Join,
            Some(Id::Num(1)),
            ApiResult::failure(409, "Already joined", None),
        );
        assert_eq!(modal.title, "Failed");
        assert_eq!(modal.message, "Already joined");
        assert!(follow_up.is_none());
    }

    #[test]
    fn test_archive_requires_capability() {
        let state = loaded_state(EventKind::Ctftime, 0..3);
        let modal = state.archive_prompt(false).unwrap();
        assert_eq!(modal.action, ModalAction::Dismiss);
        let modal = state.archive_prompt(true).unwrap();
        assert_eq!(modal.action, ModalAction::ArchiveEvent(Id::Num(0)));
    }

    #[test]
    fn test_relink_defaults_to_current_channel_or_first() {
        let mut state = loaded_state(EventKind::Ctftime, 0..3);
        state.channels = vec![
            GuildRef { id: Id::Num(10), name: "general".into() },
            GuildRef { id: Id::Num(11), name: "ctf".into() },
        ];
        assert_eq!(state.relink_default().as_deref(), Some("10"));

        if let Some(selected) = state.selected.as_mut() {
            selected.channel = Some(DiscordChannel { id: Id::Num(11), jump_url: None, name: "ctf".into() });
        }
        assert_eq!(state.relink_default().as_deref(), Some("11"));

        if let Some(selected) = state.selected.as_mut() {
            selected.channel = Some(DiscordChannel { id: Id::Num(77), jump_url: None, name: "gone".into() });
        }
        assert_eq!(state.relink_default().as_deref(), Some("10"));
    }

    #[test]
    fn test_channel_load_error_surfaces_in_relink() {
        let mut state = loaded_state(EventKind::Ctftime, 0..3);
        state.apply_channels(ApiResult::failure(500, "Bot not in guild", None));
        assert_eq!(state.notice.as_deref(), Some("Bot not in guild"));

        let modal = state.relink_prompt(true).unwrap();
        assert_eq!(modal.action, ModalAction::Dismiss);
        assert_eq!(modal.message, "Bot not in guild");

        state.apply_channels(ApiResult::success(200, Some(vec![GuildRef { id: Id::Num(10), name: "general".into() }])));
        assert!(state.channels_error.is_none());
        let modal = state.relink_prompt(true).unwrap();
        assert_ne!(modal.action, ModalAction::Dismiss);
    }

    #[test]
    fn test_jump_url_must_match_prefix() {
        let mut item = event(1, EventKind::Ctftime, false);
        item.channel = Some(DiscordChannel {
            id: Id::Num(5),
            jump_url: Some("https://discord.com/channels/1/5".into()),
            name: "ctf".into(),
        });
        assert_eq!(safe_jump_url(&item), Some("https://discord.com/channels/1/5"));

        item.channel.as_mut().unwrap().jump_url = Some("javascript:alert(1)".into());
        assert_eq!(safe_jump_url(&item), None);
    }

    #[test]
    fn test_create_prompt_only_for_custom_kind() {
        let state = loaded_state(EventKind::Ctftime, 0..1);
        assert!(state.create_prompt().is_none());
        let state = loaded_state(EventKind::Custom, 0..1);
        assert!(state.create_prompt().is_some());
    }
}
