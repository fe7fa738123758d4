use crate::models::{User, UserPatch};
use crate::store::AppStore;

fn sample_user() -> User {
    User {
        id: "user-1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        image: None,
    }
}

#[test]
fn test_patch_overwrites_only_present_fields() {
    let mut user = sample_user();
    user.apply_patch(&UserPatch {
        name: Some("Ada Lovelace".to_string()),
        email: None,
        image: None,
    });

    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.email, "ada@example.com");
    assert!(user.image.is_none());
}

#[test]
fn test_patch_fields_take_precedence() {
    let mut user = sample_user();
    user.apply_patch(&UserPatch {
        name: Some("New Name".to_string()),
        email: Some("new@example.com".to_string()),
        image: Some("avatar.png".to_string()),
    });

    assert_eq!(user.name, "New Name");
    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.image.as_deref(), Some("avatar.png"));
}

#[test]
fn test_empty_patch_is_a_no_op() {
    let mut user = sample_user();
    user.apply_patch(&UserPatch::default());
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
}

#[test]
fn test_store_merge_through_update_function() {
    let mut store = AppStore::new("token".to_string());
    store.set_user(sample_user());

    let merged = store
        .apply_user_patch(&UserPatch {
            name: Some("Countess".to_string()),
            email: None,
            image: None,
        })
        .expect("user is loaded");

    assert_eq!(merged.name, "Countess");
    assert_eq!(merged.email, "ada@example.com");
}

#[test]
fn test_store_patch_without_user_returns_none() {
    let mut store = AppStore::new("token".to_string());
    assert!(store.apply_user_patch(&UserPatch::default()).is_none());
}
