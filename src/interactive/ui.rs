use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::app::{BrowseMode, ClubBrowser};
use super::notifications;
use crate::formatting::truncate;
use crate::models::Club;

pub fn draw(frame: &mut Frame, app: &ClubBrowser) {
    let area = frame.size();

    // Search bar and pagination footer exist only in all-clubs mode
    let mut constraints: Vec<Constraint> = Vec::new();
    if !app.my_clubs {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(3));
    if !app.my_clubs {
        constraints.push(Constraint::Length(1));
    }
    if !app.notifications.is_empty() {
        constraints.push(Constraint::Length(3));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut index = 0;
    if !app.my_clubs {
        draw_search_bar(frame, chunks[index], app);
        index += 1;
    }

    draw_club_list(frame, chunks[index], app);
    index += 1;

    if !app.my_clubs {
        draw_pagination(frame, chunks[index], app);
        index += 1;
    }

    if !app.notifications.is_empty() {
        notifications::draw(frame, chunks[index], app);
    }
}

fn draw_search_bar(frame: &mut Frame, area: Rect, app: &ClubBrowser) {
    let (style, hint) = match app.mode {
        BrowseMode::Search => (Style::default().fg(Color::Yellow), " (enter to search)"),
        BrowseMode::Normal => (Style::default().fg(Color::DarkGray), " (/ to search)"),
    };

    let text = Line::from(vec![
        Span::styled("Search: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(app.search.input.clone()),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default().borders(Borders::ALL).border_style(style);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_club_list(frame: &mut Frame, area: Rect, app: &ClubBrowser) {
    let title = app.title.as_deref().unwrap_or(if app.my_clubs {
        "My Clubs"
    } else {
        "Clubs"
    });
    let block = Block::default().borders(Borders::ALL).title(title);

    // While loading there is no partial render, only the placeholder
    if app.loading {
        let placeholder = Paragraph::new("Loading clubs...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    if app.clubs.is_empty() {
        let empty = Paragraph::new(app.empty_message())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .clubs
        .iter()
        .enumerate()
        .map(|(i, club)| club_row(app, club, i == app.selected_index, width))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn club_row<'a>(app: &ClubBrowser, club: &'a Club, selected: bool, width: usize) -> ListItem<'a> {
    let marker = if selected { "▸ " } else { "  " };
    let name_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(club.name.clone(), name_style),
    ];

    if let Some(ref desc) = club.description {
        if !desc.trim().is_empty() {
            let avail = width.saturating_sub(club.name.len() + 16).max(10);
            spans.push(Span::styled(
                format!("  {}", truncate(desc, avail)),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    // Join affordance is suppressed for the viewer's own club
    if app.can_join(club) {
        spans.push(Span::styled(
            "  [enter: join]",
            Style::default().fg(Color::Green),
        ));
    } else {
        spans.push(Span::styled(
            "  [leader]",
            Style::default().fg(Color::Yellow),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn draw_pagination(frame: &mut Frame, area: Rect, app: &ClubBrowser) {
    let line = Line::from(vec![
        Span::styled(
            format!(" Page {} of {} ", app.search.page, app.total_pages.max(1)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "n/→ next  p/← prev  r refresh  q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
