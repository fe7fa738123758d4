use clap::ArgMatches;

use crate::client::ClubClient;
use crate::config::{get_api_url, get_token};
use crate::error::ClubResult;
use crate::formatting::print_club_page;
use crate::query::ClubListQuery;
use crate::store::AppStore;

pub async fn handle_clubs(matches: &ArgMatches) -> ClubResult<()> {
    let store = AppStore::new(get_token()?);
    let viewer = store.viewer()?;
    let client = ClubClient::new(store.token(), get_api_url())?;

    let search = matches
        .get_one::<String>("search")
        .cloned()
        .unwrap_or_default();
    let page = matches
        .get_one::<String>("page")
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(1);
    let my_clubs = matches.get_flag("mine");
    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("simple");

    let query = ClubListQuery::new(search, page, my_clubs);
    let clubs = client.list_clubs(&query).await?;

    if clubs.is_empty() {
        if my_clubs {
            println!("No clubs in my list.");
        } else {
            println!("No search results.");
        }
    } else {
        print_club_page(&clubs, &viewer.id, format);
    }

    Ok(())
}
