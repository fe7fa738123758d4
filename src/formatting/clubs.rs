use colored::*;

use crate::models::{Club, ClubPage};

/// Print one page of clubs in the requested format: simple, table or json.
/// `viewer_id` marks the clubs the viewer leads.
pub fn print_club_page(page: &ClubPage, viewer_id: &str, format: &str) {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&page).unwrap());
        }
        "table" => {
            println!(
                "{:<26} {:<24} {:<50} {:<20}",
                "ID".bold(),
                "Name".bold(),
                "Description".bold(),
                "Leader".bold()
            );
            println!("{}", "-".repeat(122));
            for club in &page.data {
                println!(
                    "{:<26} {:<24} {:<50} {:<20}",
                    truncate(&club.id, 24),
                    truncate(&club.name, 22).bold(),
                    truncate(club.description.as_deref().unwrap_or("-"), 48),
                    leader_label(club, viewer_id)
                );
            }
            print_page_footer(page);
        }
        _ => {
            for club in &page.data {
                print!("{} {}", "▸".bright_blue(), club.name.bold());
                if club.leader.id == viewer_id {
                    print!(" {}", "[leader]".yellow());
                }
                if let Some(ref desc) = club.description {
                    if !desc.trim().is_empty() {
                        print!("\n  {}", truncate(desc, 80).bright_black());
                    }
                }
                println!();
            }
            print_page_footer(page);
        }
    }
}

fn leader_label(club: &Club, viewer_id: &str) -> String {
    if club.leader.id == viewer_id {
        format!("{} (you)", truncate(&club.leader.name, 12))
    } else {
        truncate(&club.leader.name, 18)
    }
}

fn print_page_footer(page: &ClubPage) {
    println!(
        "\n{}",
        format!(
            "Page {} of {}",
            page.meta.current_page, page.meta.total_pages
        )
        .bright_black()
    );
}

/// Truncate to `max_len` characters, never splitting a multibyte
/// character: club names and descriptions are routinely non-ASCII.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
