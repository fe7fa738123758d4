use std::process;

use clap::{Arg, Command};

use clubhub_cli::commands::{auth, browse, clubs, join, update, whoami};

#[tokio::main]
async fn main() {
    let app = Command::new("clubhub")
        .about("ClubHub CLI - browse, search and join clubs from the terminal")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Configure the identity token")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("JWT")
                        .help("Set your ClubHub identity token")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the configured token (redacted)")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("clubs")
                .about("List clubs with search and pagination")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .value_name("TERM")
                        .help("Search clubs by name"),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .short('p')
                        .value_name("NUMBER")
                        .help("Page to fetch (1-based)")
                        .default_value("1"),
                )
                .arg(
                    Arg::new("mine")
                        .long("mine")
                        .help("Show only clubs you belong to")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                        .default_value("simple"),
                ),
        )
        .subcommand(
            Command::new("join")
                .about("Request membership in a club")
                .arg(
                    Arg::new("club-id")
                        .value_name("CLUB_ID")
                        .help("Club to join")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("leader-id")
                        .long("leader-id")
                        .value_name("USER_ID")
                        .help("Leader of the club, when known; joining your own club is refused"),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Update your profile info")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .value_name("NAME")
                        .help("New display name"),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL")
                        .help("New email address"),
                )
                .arg(
                    Arg::new("image")
                        .long("image")
                        .short('i')
                        .value_name("URL")
                        .help("New profile image reference"),
                ),
        )
        .subcommand(Command::new("whoami").about("Show the identity decoded from your token"))
        .subcommand(
            Command::new("browse")
                .about("Browse clubs interactively")
                .arg(
                    Arg::new("mine")
                        .long("mine")
                        .help("Browse only clubs you belong to")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .value_name("TITLE")
                        .help("Custom list title"),
                ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => auth::handle_auth(sub_matches).await,
        Some(("clubs", sub_matches)) => clubs::handle_clubs(sub_matches).await,
        Some(("join", sub_matches)) => join::handle_join(sub_matches).await,
        Some(("update", sub_matches)) => update::handle_update(sub_matches).await,
        Some(("whoami", sub_matches)) => whoami::handle_whoami(sub_matches).await,
        Some(("browse", sub_matches)) => browse::handle_browse(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'clubhub --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
