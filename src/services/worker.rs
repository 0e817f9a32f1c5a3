//! Runs [`ApiCommand`]s against the backend and reports each outcome back
//! to the UI loop. Commands run concurrently; nothing is retried or aborted.

use reqwest::Method;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::command::{ApiCommand, ApiResponse};
use crate::api::{endpoints, ApiClient, ConfigUpdate, CreateCustomEvent, RelinkRequest, RequestOptions};
use crate::state::events::{EventAction, PAGE_SIZE};

pub fn spawn_worker(
    client: ApiClient,
    mut commands: UnboundedReceiver<ApiCommand>,
    responses: UnboundedSender<ApiResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(command) = commands.recv().await {
            let client = client.clone();
            let responses = responses.clone();
            tokio::spawn(async move {
                let response = execute(&client, command).await;
                if responses.send(response).is_err() {
                    tracing::debug!("ui loop gone, dropping response");
                }
            });
        }
        tracing::debug!("command channel closed, worker exiting");
    })
}

pub async fn execute(client: &ApiClient, command: ApiCommand) -> ApiResponse {
    tracing::debug!(?command, "executing");
    match command {
        ApiCommand::CheckSession => ApiResponse::Session(client.get(endpoints::auth::ME).await),
        ApiCommand::SetSession(cookie) => {
            client.set_session_cookie(&cookie);
            ApiResponse::Session(client.get(endpoints::auth::ME).await)
        }
        ApiCommand::Logout => {
            let result = client.get(endpoints::auth::LOGOUT).await;
            client.clear_session_cookie();
            ApiResponse::LoggedOut(result)
        }
        ApiCommand::LoadEvents { generation, kind, archived, cursor, append } => {
            let path = endpoints::events::list(
                kind,
                archived,
                PAGE_SIZE,
                cursor.as_ref().map(|c| &c.before_id),
                cursor.as_ref().and_then(|c| c.finish_before),
            );
            ApiResponse::Events { generation, append, result: client.get(&path).await }
        }
        ApiCommand::LoadEvent { id, purpose } => {
            let result = client.get(&endpoints::events::detail(&id)).await;
            ApiResponse::Event { id, purpose, result }
        }
        ApiCommand::JoinEvent(id) => {
            let result = client
                .request(&endpoints::events::join(&id), RequestOptions::method(Method::PATCH))
                .await;
            ApiResponse::EventMutated { action: EventAction::Join, id: Some(id), result }
        }
        ApiCommand::ArchiveEvent(id) => {
            let result = client
                .request(&endpoints::events::archive(&id), RequestOptions::method(Method::PATCH))
                .await;
            ApiResponse::EventMutated { action: EventAction::Archive, id: Some(id), result }
        }
        ApiCommand::RelinkEvent { id, channel_id } => {
            let body = RelinkRequest { channel_id };
            let result = client
                .request(&endpoints::events::relink(&id), RequestOptions::json(Method::PATCH, &body))
                .await;
            ApiResponse::EventMutated { action: EventAction::Relink, id: Some(id), result }
        }
        ApiCommand::CreateCustomEvent { title } => {
            let body = CreateCustomEvent { title };
            let result = client
                .request(endpoints::events::CREATE_CUSTOM, RequestOptions::json(Method::POST, &body))
                .await;
            ApiResponse::EventMutated { action: EventAction::CreateCustom, id: None, result }
        }
        ApiCommand::LoadTextChannels => {
            ApiResponse::TextChannels(client.get(endpoints::guild::TEXT_CHANNELS).await)
        }
        ApiCommand::LoadProfile => ApiResponse::Profile(client.get(endpoints::auth::ME).await),
        ApiCommand::UpdateProfile(update) => {
            let result = client
                .request(endpoints::auth::ME, RequestOptions::json(Method::PATCH, &update))
                .await;
            ApiResponse::ProfileUpdated(result)
        }
        ApiCommand::LoadUsers => ApiResponse::Users(client.get(endpoints::users::LIST).await),
        ApiCommand::LoadUser(id) => {
            let result = client.get(&endpoints::users::detail(&id)).await;
            ApiResponse::UserDetail { id, result }
        }
        ApiCommand::LoadConfig => ApiResponse::Config(client.get(endpoints::config::LIST).await),
        ApiCommand::LoadGuildOptions => {
            let (channels, categories, roles) = futures::join!(
                client.get(endpoints::guild::TEXT_CHANNELS),
                client.get(endpoints::guild::CATEGORIES),
                client.get(endpoints::guild::ROLES),
            );
            ApiResponse::GuildOptions { channels, categories, roles }
        }
        ApiCommand::UpdateConfig { key, value } => {
            let body = ConfigUpdate { value };
            let result = client
                .request(&endpoints::config::update(&key), RequestOptions::json(Method::PATCH, &body))
                .await;
            ApiResponse::ConfigUpdated { key, result }
        }
    }
}
