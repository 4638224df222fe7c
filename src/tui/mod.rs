mod app;
mod theme;
mod view;

pub use app::{Action, AppState, Status, TableViewport};
pub use theme::Theme;

use crate::config::Config;
use crate::llm::LlmClient;
use crate::lookup::lookup;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Run the interactive lookup screen until the user quits
pub async fn run(config: &Config, client: &dyn LlmClient) -> Result<()> {
    let theme = Theme::from_name(&config.ui.theme);
    let mut state = AppState::new(config.ui.table_height);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut state, &theme, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    theme: &Theme,
    client: &dyn LlmClient,
) -> Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, state, theme))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match state.handle_key(key) {
            Action::Quit => return Ok(()),
            Action::Submit(query) => {
                state.begin_lookup(&query);
                terminal.draw(|f| view::draw(f, state, theme))?;

                // Blocks the screen until the model answers
                let outcome = lookup(client, &query).await;
                state.finish_lookup(outcome);
            }
            Action::None => {}
        }
    }
}
