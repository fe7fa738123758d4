use clap::ArgMatches;

use crate::auth::decode_token;
use crate::config::{load_config, save_config};
use crate::error::{ClubError, ClubResult};

pub async fn handle_auth(matches: &ArgMatches) -> ClubResult<()> {
    if let Some(token) = matches.get_one::<String>("token") {
        // Reject obviously broken tokens before persisting anything
        let payload = decode_token(token)?;

        let mut config = load_config();
        config.token = Some(token.clone());
        save_config(&config)?;

        println!("Token saved successfully!");
        match payload.name {
            Some(name) => println!("✅ Signed in as: {} ({})", name, payload.id),
            None => println!("✅ Signed in as user {}", payload.id),
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.token {
            Some(token) if token.len() > 12 => {
                println!("Token: {}...{}", &token[..8], &token[token.len() - 4..])
            }
            Some(_) => println!("Token: (configured, too short to redact)"),
            None => println!("No token configured"),
        }
    } else {
        return Err(ClubError::InvalidInput(
            "Usage: clubhub auth --token <JWT> or clubhub auth --show".to_string(),
        ));
    }
    Ok(())
}
