pub mod club_client;

pub use club_client::ClubClient;
