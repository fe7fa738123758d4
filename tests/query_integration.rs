use clubhub_cli::models::{Club, ClubPage, PageMeta, User};
use clubhub_cli::query::{ClubListQuery, QueryCache, SearchState};

fn page_with_clubs(names: &[&str], current_page: u32, total_pages: u32) -> ClubPage {
    ClubPage {
        data: names
            .iter()
            .enumerate()
            .map(|(i, name)| Club {
                id: format!("club-{}", i),
                name: name.to_string(),
                description: None,
                image: None,
                leader: User {
                    id: format!("leader-{}", i),
                    name: "Leader".to_string(),
                    email: "leader@example.com".to_string(),
                    image: None,
                },
            })
            .collect(),
        meta: PageMeta {
            current_page,
            total_pages,
        },
    }
}

#[test]
fn identical_keys_reuse_cached_pages() {
    let mut cache = QueryCache::new();
    let query = ClubListQuery::new("chess", 1, false);

    cache.insert(query.key(), page_with_clubs(&["Chess Club"], 1, 1));

    let same_query = ClubListQuery::new("chess", 1, false);
    let hit = cache.get(&same_query.key()).expect("cache hit expected");
    assert_eq!(hit.data[0].name, "Chess Club");
    assert_eq!(cache.len(), 1);
}

#[test]
fn changed_page_or_search_misses_the_cache() {
    let mut cache = QueryCache::new();
    cache.insert(
        ClubListQuery::new("chess", 1, false).key(),
        page_with_clubs(&["Chess Club"], 1, 2),
    );

    assert!(cache.get(&ClubListQuery::new("chess", 2, false).key()).is_none());
    assert!(cache.get(&ClubListQuery::new("go", 1, false).key()).is_none());
    assert!(cache.get(&ClubListQuery::new("chess", 1, true).key()).is_none());
}

#[test]
fn search_flow_always_lands_on_page_one() {
    let mut cache = QueryCache::new();
    let mut state = SearchState::new();

    // Browse to page 3 of the unfiltered list
    state.next_page(5);
    state.next_page(5);
    assert_eq!(state.page, 3);
    cache.insert(
        state.query(false).key(),
        page_with_clubs(&["A", "B"], 3, 5),
    );

    // Typing a draft term does not touch the active query
    state.input = "chess".to_string();
    assert!(cache.get(&state.query(false).key()).is_some());

    // Submitting applies the term and resets to page 1 in one step
    state.submit();
    let applied = state.query(false);
    assert_eq!(applied.page, 1);
    assert_eq!(applied.search, "chess");
    assert!(cache.get(&applied.key()).is_none());
}

#[test]
fn invalidation_forces_refetch_for_known_keys() {
    let mut cache = QueryCache::new();
    let query = ClubListQuery::new("", 1, false);
    cache.insert(query.key(), page_with_clubs(&["Chess Club"], 1, 1));

    cache.invalidate_all();
    assert!(cache.is_empty());
    assert!(cache.get(&query.key()).is_none());
}
