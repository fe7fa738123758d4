use crate::query::{encode_query_value, ClubListQuery, SearchState};

#[test]
fn test_key_matches_search_and_page() {
    let query = ClubListQuery::new("chess", 1, false);
    assert_eq!(
        query.key(),
        vec!["clubList".to_string(), "chess".to_string(), "1".to_string()]
    );
}

#[test]
fn test_key_distinct_when_page_changes() {
    let page_one = ClubListQuery::new("chess", 1, false);
    let page_two = ClubListQuery::new("chess", 2, false);
    assert_ne!(page_one.key(), page_two.key());
}

#[test]
fn test_key_distinct_when_search_changes() {
    let chess = ClubListQuery::new("chess", 3, false);
    let go = ClubListQuery::new("go", 3, false);
    assert_ne!(chess.key(), go.key());
}

#[test]
fn test_my_clubs_key_uses_own_prefix() {
    let all = ClubListQuery::new("", 1, false);
    let mine = ClubListQuery::new("", 1, true);
    assert_eq!(all.key()[0], "clubList");
    assert_eq!(mine.key()[0], "myClubList");
    assert_ne!(all.key(), mine.key());
}

#[test]
fn test_url_with_search_term() {
    let query = ClubListQuery::new("chess", 1, false);
    let url = query.url("https://api.example.com");
    assert!(url.ends_with("?page=1&search=chess"), "url was {}", url);
}

#[test]
fn test_url_without_search_term_omits_parameter() {
    let query = ClubListQuery::new("", 4, false);
    let url = query.url("https://api.example.com");
    assert!(url.ends_with("?page=4"), "url was {}", url);
    assert!(!url.contains("search"));
}

#[test]
fn test_url_encodes_search_term() {
    let query = ClubListQuery::new("board games & go", 1, false);
    let url = query.url("https://api.example.com");
    assert!(url.ends_with("?page=1&search=board%20games%20%26%20go"), "url was {}", url);
}

#[test]
fn test_url_my_clubs_path() {
    let query = ClubListQuery::new("", 1, true);
    let url = query.url("https://api.example.com");
    assert!(url.contains("/club/my-list"), "url was {}", url);
}

#[test]
fn test_url_base_trailing_slash() {
    let query = ClubListQuery::new("", 1, false);
    let url = query.url("https://api.example.com/");
    assert_eq!(url, "https://api.example.com/club/list?page=1");
}

#[test]
fn test_encode_query_value_passes_unreserved() {
    assert_eq!(encode_query_value("Chess-Club_2024.x~y"), "Chess-Club_2024.x~y");
}

#[test]
fn test_encode_query_value_encodes_utf8_bytewise() {
    assert_eq!(encode_query_value("café"), "caf%C3%A9");
}

#[test]
fn test_submit_resets_page_to_one() {
    for prior_page in [1, 2, 5, 99] {
        let mut state = SearchState::new();
        state.page = prior_page;
        state.input = "chess".to_string();
        state.submit();
        assert_eq!(state.page, 1);
        assert_eq!(state.applied, "chess");
    }
}

#[test]
fn test_draft_input_does_not_change_applied_search() {
    let mut state = SearchState::new();
    state.input.push_str("che");
    assert_eq!(state.applied, "");
    assert_eq!(state.query(false).search, "");
}

#[test]
fn test_default_state_starts_at_page_one() {
    let state = SearchState::default();
    assert_eq!(state.page, 1);
    assert_eq!(state.applied, "");
}

#[test]
fn test_page_navigation_bounds() {
    let mut state = SearchState::new();
    state.prev_page();
    assert_eq!(state.page, 1);

    state.next_page(3);
    state.next_page(3);
    assert_eq!(state.page, 3);
    state.next_page(3);
    assert_eq!(state.page, 3);

    state.prev_page();
    assert_eq!(state.page, 2);
}
