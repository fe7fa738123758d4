pub mod clubs;

pub use clubs::{print_club_page, truncate};
