use clap::ArgMatches;
use colored::*;

use crate::client::ClubClient;
use crate::config::{get_api_url, get_token};
use crate::error::{ClubError, ClubResult};
use crate::models::User;
use crate::store::AppStore;

pub async fn handle_update(matches: &ArgMatches) -> ClubResult<()> {
    let name = matches.get_one::<String>("name");
    let email = matches.get_one::<String>("email");
    let image = matches.get_one::<String>("image");

    if name.is_none() && email.is_none() && image.is_none() {
        return Err(ClubError::InvalidInput(
            "No fields to update. Provide at least one of --name, --email, --image.".to_string(),
        ));
    }

    let mut store = AppStore::new(get_token()?);
    let viewer = store.viewer()?;
    store.set_user(User {
        id: viewer.id.clone(),
        name: viewer.name.unwrap_or_default(),
        email: viewer.email.unwrap_or_default(),
        image: None,
    });

    let client = ClubClient::new(store.token(), get_api_url())?;
    let patch = client
        .update_user_info(
            name.map(|s| s.as_str()),
            email.map(|s| s.as_str()),
            image.map(|s| s.as_str()),
        )
        .await?;

    println!("{} {}", "✅".green(), "Profile updated!".green().bold());
    if let Some(user) = store.apply_user_patch(&patch) {
        println!("{}: {}", "Name".bold(), user.name);
        println!("{}: {}", "Email".bold(), user.email);
        if let Some(ref image) = user.image {
            println!("{}: {}", "Image".bold(), image);
        }
    }

    Ok(())
}
