use crate::api::{ApiResult, User};

/// Signed-in path or root, decided by the last session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// State management for the signed-in session
pub struct SessionState {
    pub checking: bool,
    pub profile: Option<User>,
    pub route: Route,
    pub notice: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            checking: true,
            profile: None,
            route: Route::Root,
            notice: None,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    /// Applies a session check. Returns true when signed in.
    pub fn apply_check(&mut self, result: ApiResult<User>) -> bool {
        self.checking = false;
        match (result.ok, result.data) {
            (true, Some(user)) => {
                tracing::info!(user = %user.display_name(), "session active");
                self.profile = Some(user);
                self.route = Route::Dashboard;
                self.notice = None;
                true
            }
            (ok, _) => {
                if !ok && result.status != 401 && result.status != 403 {
                    self.notice = result.error;
                }
                self.profile = None;
                self.route = Route::Root;
                false
            }
        }
    }

    pub fn begin_check(&mut self) {
        self.checking = true;
    }

    pub fn logout(&mut self) {
        self.profile = None;
        self.route = Route::Root;
        self.notice = None;
    }

    /// Keeps the shell's copy of the profile in step with the Me section.
    pub fn refresh_profile(&mut self, user: &User) {
        if self.profile.is_some() {
            self.profile = Some(user.clone());
        }
    }

    pub fn can_manage_events(&self) -> bool {
        self.profile.as_ref().is_some_and(User::can_manage_events)
    }

    pub fn signed_in_as(&self) -> Option<String> {
        self.profile.as_ref().map(User::display_name)
    }
}
