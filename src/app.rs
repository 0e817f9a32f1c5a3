use tokio::sync::mpsc;

use crate::api::{endpoints, Id};
use crate::config::AppConfig;
use crate::services::{ApiCommand, ApiResponse, EventFetch};
use crate::state::{
    ConfigState, EventsState, MeState, Modal, ModalAction, ModalState, Navigation, Section, SessionState, UiState,
    UsersState,
};

/// Root application object. Owns every section's state plus the shared
/// navigation context, and forwards API work to the worker.
pub struct App {
    pub config: AppConfig,
    pub ui: UiState,
    pub session: SessionState,
    pub nav: Navigation,
    pub modal: ModalState,
    pub events: EventsState,
    pub me: MeState,
    pub users: UsersState,
    pub guild_config: ConfigState,
    pub to_worker: mpsc::UnboundedSender<ApiCommand>,
    /// A pasted session cookie is being checked.
    session_submitted: bool,
}

impl App {
    pub fn new(config: AppConfig, to_worker: mpsc::UnboundedSender<ApiCommand>) -> Self {
        let guild_config = ConfigState::new(config.coerce_numeric_config);
        Self {
            config,
            ui: UiState::default(),
            session: SessionState::default(),
            nav: Navigation::default(),
            modal: ModalState::default(),
            events: EventsState::default(),
            me: MeState::default(),
            users: UsersState::default(),
            guild_config,
            to_worker,
            session_submitted: false,
        }
    }

    pub fn dispatch(&self, command: ApiCommand) {
        if self.to_worker.send(command).is_err() {
            tracing::warn!("worker channel closed, command dropped");
        }
    }

    fn dispatch_opt(&self, command: Option<ApiCommand>) {
        if let Some(command) = command {
            self.dispatch(command);
        }
    }

    /// Kicks off the session check that decides between login and dashboard.
    pub fn start(&mut self) {
        self.session.begin_check();
        self.dispatch(ApiCommand::CheckSession);
    }

    pub fn login_url(&self) -> String {
        self.config.url_for(endpoints::auth::DISCORD)
    }

    pub fn open_modal(&mut self, modal: Option<Modal>) {
        if let Some(modal) = modal {
            self.modal.open(modal);
        }
    }

    pub fn prompt_session_cookie(&mut self) {
        self.modal.open(
            Modal::input(
                "Sign in",
                format!(
                    "Sign in with Discord at\n{}\nthen paste the '{}' cookie here.",
                    self.login_url(),
                    self.config.session_cookie_name
                ),
                "Session cookie",
                "cookie value",
                "",
                ModalAction::SetSession,
            )
            .with_labels("Sign in", "Cancel"),
        );
    }

    pub fn request_quit(&mut self) {
        self.modal.open(
            Modal::confirm("Quit", "Leave the dashboard?", ModalAction::Quit).with_labels("Quit", "Stay"),
        );
    }

    pub fn switch_section(&mut self, section: Section) {
        tracing::debug!(section = section.label(), "switching section");
        self.ui.section = section;
        self.mount(section);
    }

    /// Every section fetches its own data whenever it is shown.
    fn mount(&mut self, section: Section) {
        match section {
            Section::Events => {
                let reload = self.events.reload();
                self.dispatch(reload);
                self.dispatch(ApiCommand::LoadTextChannels);
                if let Some(id) = self.nav.selected_event_id().cloned() {
                    let open = self.events.open(id);
                    self.dispatch_opt(open);
                }
            }
            Section::Me => {
                let load = self.me.begin_load();
                self.dispatch(load);
            }
            Section::Users => {
                let load = self.users.begin_load();
                self.dispatch(load);
                if let Some(id) = self.nav.selected_user_id().cloned() {
                    let open = self.users.open(id);
                    self.dispatch_opt(open);
                }
            }
            Section::Config => {
                let load = self.guild_config.begin_load();
                self.dispatch(load);
                self.dispatch(ApiCommand::LoadGuildOptions);
            }
        }
    }

    /// Deep link into the events section.
    pub fn open_event(&mut self, id: Id) {
        self.nav.set_selected_event_id(Some(id));
        self.switch_section(Section::Events);
    }

    /// Deep link into the users section.
    pub fn open_user(&mut self, id: Id) {
        self.nav.set_selected_user_id(Some(id));
        self.switch_section(Section::Users);
    }

    /// Moves the event highlight and asks for the next page near the end of the list.
    pub fn move_event_selection(&mut self, delta: isize) {
        if let Some(id) = self.events.select_offset(delta) {
            self.nav.set_selected_event_id(Some(id));
        }
        if self.events.near_end(self.config.load_more_threshold) {
            let more = self.events.load_more();
            self.dispatch_opt(more);
        }
    }

    pub fn move_user_selection(&mut self, delta: isize) {
        if let Some(id) = self.users.select_offset(delta) {
            self.nav.set_selected_user_id(Some(id));
        }
    }

    pub fn prompt_join(&mut self) {
        let modal = self.events.join_prompt();
        self.open_modal(modal);
    }

    pub fn prompt_archive(&mut self) {
        let modal = self.events.archive_prompt(self.session.can_manage_events());
        self.open_modal(modal);
    }

    pub fn prompt_relink(&mut self) {
        let modal = self.events.relink_prompt(self.session.can_manage_events());
        self.open_modal(modal);
    }

    pub fn prompt_create_event(&mut self) {
        let modal = self.events.create_prompt();
        self.open_modal(modal);
    }

    pub fn confirm_modal(&mut self) {
        if let Some((action, value)) = self.modal.confirm() {
            self.run_modal_action(action, value);
        }
    }

    /// Closes the dialog. Nothing is sent and no state changes.
    pub fn cancel_modal(&mut self) {
        self.modal.cancel();
    }

    fn run_modal_action(&mut self, action: ModalAction, value: Option<String>) {
        let value = value.unwrap_or_default();
        match action {
            ModalAction::Dismiss => {}
            ModalAction::Quit => self.ui.quit(),
            ModalAction::SetSession => {
                let cookie = value.trim();
                if cookie.is_empty() {
                    return;
                }
                self.session.begin_check();
                self.session_submitted = true;
                self.dispatch(ApiCommand::SetSession(cookie.to_string()));
            }
            ModalAction::JoinEvent(id) => self.dispatch(ApiCommand::JoinEvent(id)),
            ModalAction::ArchiveEvent(id) => self.dispatch(ApiCommand::ArchiveEvent(id)),
            ModalAction::RelinkEvent(id) => {
                if value.is_empty() {
                    return;
                }
                self.dispatch(ApiCommand::RelinkEvent { id, channel_id: Id::parse(&value) });
            }
            ModalAction::CreateCustomEvent => {
                let title = value.trim();
                if title.is_empty() {
                    return;
                }
                self.dispatch(ApiCommand::CreateCustomEvent { title: title.to_string() });
            }
            ModalAction::PickConfigValue(key) => self.guild_config.set_draft(&key, &value),
        }
    }

    pub fn save_profile(&mut self) {
        let submit = self.me.submit();
        self.dispatch_opt(submit);
    }

    pub fn save_config(&mut self) {
        let save = self.guild_config.save();
        self.dispatch_opt(save);
    }

    pub fn logout(&mut self) {
        tracing::info!("logging out");
        self.dispatch(ApiCommand::Logout);
        self.session.logout();
        self.nav.clear();
        self.events.reset();
        self.me = MeState::default();
        self.users = UsersState::default();
        self.guild_config = ConfigState::new(self.config.coerce_numeric_config);
        self.ui.section = Section::Events;
    }

    pub fn handle_api_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Session(result) => {
                let failure = result.error_text("Session rejected");
                let submitted = std::mem::take(&mut self.session_submitted);
                if self.session.apply_check(result) {
                    self.switch_section(Section::Events);
                } else if submitted {
                    self.modal.open(Modal::alert("Sign-in failed", failure));
                }
            }
            ApiResponse::LoggedOut(result) => {
                if !result.ok {
                    tracing::warn!(status = result.status, "logout request failed");
                    self.session.notice = Some(result.error_text("Logout request failed"));
                }
            }
            ApiResponse::Events { generation, append, result } => {
                self.events.apply_page(generation, append, result);
            }
            ApiResponse::Event { id, purpose: EventFetch::DeepLink, result } => {
                let restart = self.events.apply_open(&id, result);
                self.dispatch_opt(restart);
            }
            ApiResponse::Event { id, purpose: EventFetch::Refresh, result } => {
                self.events.apply_refresh(&id, result);
            }
            ApiResponse::EventMutated { action, id, result } => {
                let (modal, follow_up) = self.events.apply_mutation(action, id, result);
                self.modal.open(modal);
                self.dispatch_opt(follow_up);
            }
            ApiResponse::TextChannels(result) => self.events.apply_channels(result),
            ApiResponse::Profile(result) => {
                if let Some(user) = result.data.as_ref().filter(|_| result.ok) {
                    self.session.refresh_profile(user);
                }
                self.me.apply_profile(result);
            }
            ApiResponse::ProfileUpdated(result) => {
                let reload = self.me.apply_update(result);
                self.dispatch_opt(reload);
            }
            ApiResponse::Users(result) => {
                let follow_up = self.users.apply_users(result);
                self.dispatch_opt(follow_up);
            }
            ApiResponse::UserDetail { id, result } => self.users.apply_user(&id, result),
            ApiResponse::Config(result) => self.guild_config.apply_config(result),
            ApiResponse::GuildOptions { channels, categories, roles } => {
                self.guild_config.apply_guild_options(channels, categories, roles);
            }
            ApiResponse::ConfigUpdated { key, result } => {
                let (modal, follow_up) = self.guild_config.apply_update(&key, result);
                self.modal.open(modal);
                self.dispatch_opt(follow_up);
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
    }
}
