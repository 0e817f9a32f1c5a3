//! Every path the dashboard calls, so literal URLs stay out of the sections.

pub mod auth {
    pub const DISCORD: &str = "/auth/discord";
    pub const LOGOUT: &str = "/auth/logout";
    pub const ME: &str = "/auth/me";
}

pub mod events {
    use crate::api::types::{EventKind, Id};

    pub const CREATE_CUSTOM: &str = "/event/create_custom_event";

    /// One page of events of `kind`. `finish_before` is dropped for kinds that
    /// are not ordered by time.
    pub fn list(
        kind: EventKind,
        archived: bool,
        limit: usize,
        before_id: Option<&Id>,
        finish_before: Option<i64>,
    ) -> String {
        let mut path = format!("/event/{}?archived={}&limit={}", kind.as_str(), archived, limit);
        if let Some(id) = before_id {
            path.push_str(&format!("&before_id={}", urlencoding::encode(&id.to_string())));
            if kind.is_time_ordered() {
                if let Some(finish) = finish_before {
                    path.push_str(&format!("&finish_before={}", finish));
                }
            }
        }
        path
    }

    pub fn detail(id: &Id) -> String {
        format!("/event/{}", urlencoding::encode(&id.to_string()))
    }

    pub fn join(id: &Id) -> String {
        format!("{}/join", detail(id))
    }

    pub fn archive(id: &Id) -> String {
        format!("{}/archive", detail(id))
    }

    pub fn relink(id: &Id) -> String {
        format!("{}/relink", detail(id))
    }
}

pub mod users {
    use crate::api::types::Id;

    pub const LIST: &str = "/user";

    pub fn detail(id: &Id) -> String {
        format!("/user/{}", urlencoding::encode(&id.to_string()))
    }
}

pub mod guild {
    pub const TEXT_CHANNELS: &str = "/guild/text_channels";
    pub const CATEGORIES: &str = "/guild/categories";
    pub const ROLES: &str = "/guild/roles";
}

pub mod config {
    pub const LIST: &str = "/config";

    pub fn update(key: &str) -> String {
        format!("/config/{}", urlencoding::encode(key))
    }
}
