use std::time::Instant;

use crossterm::event::KeyCode;

use crate::auth::TokenPayload;
use crate::client::ClubClient;
use crate::config::{get_api_url, get_token};
use crate::constants::NOTIFICATION_SECS;
use crate::error::ClubResult;
use crate::logging::{log_debug, log_error};
use crate::models::Club;
use crate::query::{QueryCache, SearchState};
use crate::store::AppStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrowseMode {
    Normal,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub dismissed: bool,
}

pub struct ClubBrowser {
    pub my_clubs: bool,
    pub title: Option<String>,
    pub mode: BrowseMode,
    pub search: SearchState,
    pub clubs: Vec<Club>,
    pub total_pages: u32,
    pub selected_index: usize,
    pub loading: bool,
    pub should_quit: bool,
    pub notifications: Vec<Notification>,
    pub viewer: TokenPayload,
    client: ClubClient,
    cache: QueryCache,
    needs_fetch: bool,
}

impl ClubBrowser {
    pub fn new(my_clubs: bool, title: Option<String>) -> ClubResult<Self> {
        let store = AppStore::new(get_token()?);
        let viewer = store.viewer()?;
        let client = ClubClient::new(store.token(), get_api_url())?;

        Ok(Self {
            my_clubs,
            title,
            mode: BrowseMode::Normal,
            search: SearchState::new(),
            clubs: Vec::new(),
            total_pages: 1,
            selected_index: 0,
            loading: false,
            should_quit: false,
            notifications: Vec::new(),
            viewer,
            client,
            cache: QueryCache::new(),
            needs_fetch: true,
        })
    }

    pub fn needs_fetch(&self) -> bool {
        self.needs_fetch
    }

    /// Resolve the current (search, page) key: reuse the cached page when
    /// the key was seen before, fetch otherwise.
    pub async fn refresh(&mut self) {
        self.needs_fetch = false;
        let query = self.search.query(self.my_clubs);
        let key = query.key();

        if let Some(page) = self.cache.get(&key) {
            log_debug(&format!("cache hit for key {:?}", key));
            self.clubs = page.data.clone();
            self.total_pages = page.meta.total_pages;
            self.clamp_selection();
            self.loading = false;
            return;
        }
        self.loading = true;
        match self.client.list_clubs(&query).await {
            Ok(page) => {
                self.clubs = page.data.clone();
                self.total_pages = page.meta.total_pages;
                self.cache.insert(key, page);
                self.clamp_selection();
            }
            Err(e) => {
                log_error(&format!("failed to load clubs: {}", e));
                self.notify(NotificationKind::Error, format!("Failed to load clubs: {}", e));
            }
        }
        self.loading = false;
    }

    pub async fn handle_key(&mut self, key: KeyCode) {
        // Any keypress clears lingering error notifications
        self.dismiss_errors();

        match self.mode {
            BrowseMode::Normal => self.handle_normal_key(key).await,
            BrowseMode::Search => self.handle_search_key(key),
        }
    }

    async fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Char('/') if !self.my_clubs => self.mode = BrowseMode::Search,
            KeyCode::Char('n') | KeyCode::Right if !self.my_clubs => {
                let before = self.search.page;
                self.search.next_page(self.total_pages);
                if self.search.page != before {
                    self.needs_fetch = true;
                }
            }
            KeyCode::Char('p') | KeyCode::Left if !self.my_clubs => {
                let before = self.search.page;
                self.search.prev_page();
                if self.search.page != before {
                    self.needs_fetch = true;
                }
            }
            KeyCode::Char('r') => {
                self.cache.invalidate_all();
                self.needs_fetch = true;
            }
            KeyCode::Enter => self.join_selected().await,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.mode = BrowseMode::Normal,
            KeyCode::Enter => {
                // Every new search starts at page 1
                self.search.submit();
                self.needs_fetch = true;
                self.mode = BrowseMode::Normal;
            }
            KeyCode::Char(ch) => self.search.input.push(ch),
            KeyCode::Backspace => {
                self.search.input.pop();
            }
            _ => {}
        }
    }

    pub fn selected_club(&self) -> Option<&Club> {
        self.clubs.get(self.selected_index)
    }

    /// Whether the join affordance applies to this club: the viewer's own
    /// club never offers it.
    pub fn can_join(&self, club: &Club) -> bool {
        join_allowed(&self.viewer.id, club)
    }

    async fn join_selected(&mut self) {
        let Some(club) = self.selected_club().cloned() else {
            return;
        };

        if !self.can_join(&club) {
            self.notify(
                NotificationKind::Info,
                format!("You lead {}; nothing to join.", club.name),
            );
            return;
        }

        match self.client.join_club(&club.id).await {
            Ok(()) => {
                self.notify(
                    NotificationKind::Success,
                    format!("Join request submitted for {}!", club.name),
                );
            }
            Err(e) => {
                log_error(&format!("join failed for club {}: {}", club.id, e));
                self.notify(NotificationKind::Error, format!("Join failed: {}", e));
            }
        }
    }

    pub fn empty_message(&self) -> &'static str {
        empty_list_message(self.my_clubs)
    }

    fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.clubs.len() {
            self.selected_index += 1;
        }
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.clubs.len() {
            self.selected_index = self.clubs.len().saturating_sub(1);
        }
    }

    pub fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notifications.push(Notification {
            message,
            kind,
            created_at: Instant::now(),
            dismissed: false,
        });
    }

    /// Auto-dismiss transient notifications; errors stay until a keypress.
    pub fn prune_notifications(&mut self) {
        for n in &mut self.notifications {
            if matches!(n.kind, NotificationKind::Success | NotificationKind::Info)
                && n.created_at.elapsed().as_secs() >= NOTIFICATION_SECS
            {
                n.dismissed = true;
            }
        }
        self.notifications.retain(|n| !n.dismissed);
    }

    fn dismiss_errors(&mut self) {
        self.notifications
            .retain(|n| n.kind != NotificationKind::Error);
    }
}

pub fn empty_list_message(my_clubs: bool) -> &'static str {
    if my_clubs {
        "No clubs in my list."
    } else {
        "No search results."
    }
}

pub fn join_allowed(viewer_id: &str, club: &Club) -> bool {
    club.leader.id != viewer_id
}
