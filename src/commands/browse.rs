use clap::ArgMatches;

use crate::error::{ClubError, ClubResult};
use crate::interactive::run_browser;
use crate::logging::{init_logging, log_error};

pub async fn handle_browse(matches: &ArgMatches) -> ClubResult<()> {
    let my_clubs = matches.get_flag("mine");
    let title = matches.get_one::<String>("title").cloned();

    // Stdout belongs to the TUI from here on; diagnostics go to the log file
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    run_browser(my_clubs, title).await.map_err(|e| {
        log_error(&format!("Browser exited with error: {}", e));
        ClubError::TerminalError(e.to_string())
    })
}
