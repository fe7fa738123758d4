use clap::ArgMatches;
use colored::*;

use crate::client::ClubClient;
use crate::config::{get_api_url, get_token};
use crate::error::{ClubError, ClubResult, ErrorContext};
use crate::store::AppStore;

pub async fn handle_join(matches: &ArgMatches) -> ClubResult<()> {
    let club_id = matches
        .get_one::<String>("club-id")
        .context("Club ID is required")?;

    let store = AppStore::new(get_token()?);
    let viewer = store.viewer()?;

    // The viewer's own club never offers the join action
    if let Some(leader_id) = matches.get_one::<String>("leader-id") {
        if leader_id == &viewer.id {
            return Err(ClubError::InvalidInput(
                "you lead this club; there is nothing to join".to_string(),
            ));
        }
    }

    let client = ClubClient::new(store.token(), get_api_url())?;
    client.join_club(club_id).await?;

    println!(
        "{} {}",
        "✅".green(),
        format!("Join request submitted for club {}!", club_id)
            .green()
            .bold()
    );

    Ok(())
}
