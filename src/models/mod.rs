pub mod club;
pub mod user;

// Re-export commonly used types
pub use club::{Club, ClubPage, PageMeta};
pub use user::{User, UserPatch};
