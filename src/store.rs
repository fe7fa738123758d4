use crate::auth::{decode_token, TokenPayload};
use crate::error::ClubResult;
use crate::models::{User, UserPatch};

/// Explicitly owned application state: the identity token plus the
/// locally held user record. There is exactly one store per process and
/// it is passed down to whoever needs it; all user mutations go through
/// `apply_user_patch`.
#[derive(Debug, Clone)]
pub struct AppStore {
    token: String,
    user: Option<User>,
}

impl AppStore {
    pub fn new(token: String) -> Self {
        Self { token, user: None }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn viewer(&self) -> ClubResult<TokenPayload> {
        decode_token(&self.token)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Shallow-merge the fields a mutation returned into the held user.
    /// Returns the merged user, or None when no user is loaded yet.
    pub fn apply_user_patch(&mut self, patch: &UserPatch) -> Option<&User> {
        if let Some(user) = self.user.as_mut() {
            user.apply_patch(patch);
        }
        self.user.as_ref()
    }
}
