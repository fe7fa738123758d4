use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Club {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub leader: User,
}

/// One page of the club listing, as returned by the list endpoints.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClubPage {
    pub data: Vec<Club>,
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PageMeta {
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl ClubPage {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
