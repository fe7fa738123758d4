use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

/// Partial user record returned by the profile-update endpoint.
/// Only the fields present in the response are merged into the
/// locally held user; absent fields are left untouched.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl User {
    /// Shallow merge: fields carried by the patch take precedence.
    pub fn apply_patch(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(image) = &patch.image {
            self.image = Some(image.clone());
        }
    }
}
