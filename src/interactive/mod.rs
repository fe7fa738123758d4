pub mod app;
pub mod event;
pub mod notifications;
pub mod ui;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::ClubBrowser;
use event::{Event, EventHandler};

/// Run the interactive club browser until the user quits.
pub async fn run_browser(
    my_clubs: bool,
    title: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ClubBrowser::new(my_clubs, title)?;
    let events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &events).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ClubBrowser,
    events: &EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Fetch happens only when the (search, page) key changed; the
        // placeholder frame goes out before the request is awaited
        if app.needs_fetch() {
            app.loading = true;
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.refresh().await;
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        match events.recv()? {
            Event::Key(key) => app.handle_key(key.code).await,
            Event::Tick => app.prune_notifications(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
