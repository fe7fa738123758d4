use clap::ArgMatches;

use crate::config::get_token;
use crate::error::ClubResult;
use crate::store::AppStore;

pub async fn handle_whoami(_matches: &ArgMatches) -> ClubResult<()> {
    let store = AppStore::new(get_token()?);
    let viewer = store.viewer()?;

    match viewer.name {
        Some(name) => println!("Logged in as: {}", name),
        None => println!("Logged in (no name claim in token)"),
    }
    println!("User ID: {}", viewer.id);
    if let Some(email) = viewer.email {
        println!("Email: {}", email);
    }

    Ok(())
}
