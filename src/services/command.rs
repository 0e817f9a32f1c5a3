use serde_json::Value;

use crate::api::{
    ConfigResponse, EventItem, EventKind, GeneralResponse, GuildRef, Id, ProfileUpdate, User, ApiResult,
};
use crate::state::events::{Cursor, EventAction};

/// Why a single event is being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFetch {
    /// Another section asked to open this event.
    DeepLink,
    /// Authoritative copy after a mutation.
    Refresh,
}

/// Requests the UI hands to the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    CheckSession,
    SetSession(String),
    Logout,
    LoadEvents {
        generation: u64,
        kind: EventKind,
        archived: bool,
        cursor: Option<Cursor>,
        append: bool,
    },
    LoadEvent { id: Id, purpose: EventFetch },
    JoinEvent(Id),
    ArchiveEvent(Id),
    RelinkEvent { id: Id, channel_id: Id },
    CreateCustomEvent { title: String },
    LoadTextChannels,
    LoadProfile,
    UpdateProfile(ProfileUpdate),
    LoadUsers,
    LoadUser(Id),
    LoadConfig,
    LoadGuildOptions,
    UpdateConfig { key: String, value: Value },
}

/// Results the worker hands back to the UI, one per command.
#[derive(Debug, Clone)]
pub enum ApiResponse {
    Session(ApiResult<User>),
    LoggedOut(ApiResult<Value>),
    Events {
        generation: u64,
        append: bool,
        result: ApiResult<Vec<EventItem>>,
    },
    Event {
        id: Id,
        purpose: EventFetch,
        result: ApiResult<EventItem>,
    },
    EventMutated {
        action: EventAction,
        id: Option<Id>,
        result: ApiResult<GeneralResponse>,
    },
    TextChannels(ApiResult<Vec<GuildRef>>),
    Profile(ApiResult<User>),
    ProfileUpdated(ApiResult<GeneralResponse>),
    Users(ApiResult<Vec<User>>),
    UserDetail { id: Id, result: ApiResult<User> },
    Config(ApiResult<ConfigResponse>),
    GuildOptions {
        channels: ApiResult<Vec<GuildRef>>,
        categories: ApiResult<Vec<GuildRef>>,
        roles: ApiResult<Vec<GuildRef>>,
    },
    ConfigUpdated {
        key: String,
        result: ApiResult<GeneralResponse>,
    },
}
