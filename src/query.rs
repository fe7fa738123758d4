use std::collections::HashMap;

use crate::constants::{
    CLUB_LIST_PATH, MY_CLUB_LIST_PATH, QUERY_KEY_CLUB_LIST, QUERY_KEY_MY_CLUB_LIST,
};
use crate::models::ClubPage;

/// Parameters driving one club-list fetch.
///
/// The cache key and the request URL are both pure functions of
/// (search, page, my_clubs): identical parameters reuse cached data,
/// any change forces a refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubListQuery {
    pub search: String,
    pub page: u32,
    pub my_clubs: bool,
}

impl ClubListQuery {
    pub fn new(search: impl Into<String>, page: u32, my_clubs: bool) -> Self {
        Self {
            search: search.into(),
            page,
            my_clubs,
        }
    }

    /// Cache key: `[prefix, search, page]`.
    pub fn key(&self) -> Vec<String> {
        let prefix = if self.my_clubs {
            QUERY_KEY_MY_CLUB_LIST
        } else {
            QUERY_KEY_CLUB_LIST
        };
        vec![prefix.to_string(), self.search.clone(), self.page.to_string()]
    }

    /// Full request URL. The `search` parameter is omitted when the term
    /// is empty, so `?page=1` and `?page=1&search=` never both occur.
    pub fn url(&self, base: &str) -> String {
        let path = if self.my_clubs {
            MY_CLUB_LIST_PATH
        } else {
            CLUB_LIST_PATH
        };
        let mut url = format!("{}{}?page={}", base.trim_end_matches('/'), path, self.page);
        if !self.search.is_empty() {
            url.push_str("&search=");
            url.push_str(&encode_query_value(&self.search));
        }
        url
    }
}

/// Percent-encode a query-string value. Unreserved characters per
/// RFC 3986 pass through; everything else is encoded byte-wise.
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Local search/pagination state behind the search form.
///
/// `input` is the draft the user is typing; `applied` is the term the
/// active fetch uses. The two only converge on an explicit submit, which
/// also resets the page so every new search starts at page 1.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub input: String,
    pub applied: String,
    pub page: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            applied: String::new(),
            page: 1,
        }
    }

    pub fn submit(&mut self) {
        self.applied = self.input.clone();
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: u32) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    pub fn query(&self, my_clubs: bool) -> ClubListQuery {
        ClubListQuery::new(self.applied.clone(), self.page, my_clubs)
    }
}

/// Session-lifetime cache of club pages, keyed by `ClubListQuery::key()`.
/// No eviction: a browsing session touches a handful of pages at most.
#[derive(Debug, Default)]
pub struct QueryCache {
    pages: HashMap<Vec<String>, ClubPage>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn get(&self, key: &[String]) -> Option<&ClubPage> {
        self.pages.get(key)
    }

    pub fn insert(&mut self, key: Vec<String>, page: ClubPage) {
        self.pages.insert(key, page);
    }

    /// Drop every cached page, forcing the next lookups to refetch.
    pub fn invalidate_all(&mut self) {
        self.pages.clear();
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
