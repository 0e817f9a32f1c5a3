pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{ApiClient, ApiResult, RequestOptions};
pub use types::{
    ConfigItem, ConfigResponse, ConfigUpdate, CreateCustomEvent, DiscordChannel, DiscordUser, EventItem,
    EventKind, GeneralResponse, GuildRef, Id, ProfileUpdate, RelinkRequest, Role, User,
};
