use crate::interactive::app::{empty_list_message, join_allowed};
use crate::models::{Club, User};

fn club_led_by(leader_id: &str) -> Club {
    Club {
        id: "club-1".to_string(),
        name: "Chess Club".to_string(),
        description: Some("Weekly games".to_string()),
        image: None,
        leader: User {
            id: leader_id.to_string(),
            name: "Lea".to_string(),
            email: "lea@example.com".to_string(),
            image: None,
        },
    }
}

#[test]
fn test_join_suppressed_for_own_club() {
    let club = club_led_by("viewer-1");
    assert!(!join_allowed("viewer-1", &club));
}

#[test]
fn test_join_offered_for_other_clubs() {
    let club = club_led_by("someone-else");
    assert!(join_allowed("viewer-1", &club));
}

#[test]
fn test_empty_message_depends_on_mode() {
    assert_eq!(empty_list_message(true), "No clubs in my list.");
    assert_eq!(empty_list_message(false), "No search results.");
}
