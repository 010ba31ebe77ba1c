// Module declarations
pub mod error;
pub mod keys;
pub mod state;
pub mod table;
pub mod transform;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use error::{TuiError, TuiResult};
pub use keys::{key_to_action, Action};
pub use state::{App, Phase, ViewMode};
pub use transform::{CellPos, TerminalFrame};
pub use view::render_frame;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    style::available_color_count,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::background::{refresh_loop, refresh_once, SnapshotSlot};
use crate::config::Config;
use crate::data_provider::{GameStatus, MlbDataProvider};
use crate::layout_constants::{MIN_COLOR_COUNT, MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS};
use widgets::{PreviewScreen, RenderableWidget};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Fail unless the terminal can show the pitch colours
pub fn check_color_support(config: &Config) -> TuiResult<()> {
    if !config.check_color_support {
        return Ok(());
    }
    let colors = available_color_count();
    if colors < MIN_COLOR_COUNT {
        return Err(TuiError::UnsupportedTerminal {
            colors,
            required: MIN_COLOR_COUNT,
        });
    }
    Ok(())
}

pub fn ensure_min_size(rows: u16, cols: u16) -> TuiResult<()> {
    if rows < MIN_TERMINAL_ROWS || cols < MIN_TERMINAL_COLS {
        return Err(TuiError::TerminalTooSmall {
            rows,
            cols,
            min_rows: MIN_TERMINAL_ROWS,
            min_cols: MIN_TERMINAL_COLS,
        });
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Run `body` on a fresh full-screen terminal, restoring it whatever the outcome
async fn with_terminal<F, Fut>(body: F) -> TuiResult<()>
where
    F: FnOnce(Term) -> Fut,
    Fut: std::future::Future<Output = (Term, TuiResult<()>)>,
{
    let terminal = setup_terminal()?;
    let (mut terminal, result) = body(terminal).await;
    restore_terminal(&mut terminal)?;
    result
}

/// Live view of an in-progress game until the user quits
pub async fn run_live(
    client: Arc<dyn MlbDataProvider>,
    game_pk: i64,
    config: &Config,
) -> TuiResult<()> {
    check_color_support(config)?;
    with_terminal(|mut terminal| async move {
        let result = live_loop(&mut terminal, client, game_pk, config).await;
        (terminal, result)
    })
    .await
}

async fn live_loop(
    terminal: &mut Term,
    client: Arc<dyn MlbDataProvider>,
    game_pk: i64,
    config: &Config,
) -> TuiResult<()> {
    let size = terminal.size()?;
    ensure_min_size(size.height, size.width)?;

    let mut app = App::new();
    app.select_game(GameStatus::InProgress);
    let display = config.display();
    let refresh_interval = Duration::from_secs(config.refresh_interval.max(1) as u64);
    let render_interval = Duration::from_millis(config.render_interval_ms.max(10));

    let (slot_tx, slot_rx) = watch::channel::<SnapshotSlot>(None);
    refresh_once(client.as_ref(), game_pk, &slot_tx).await;

    let (stop_tx, stop_rx) = watch::channel(false);
    let handle = tokio::spawn(refresh_loop(client, game_pk, slot_tx, refresh_interval, stop_rx));
    info!("LIVE: watching game {}, refresh every {:?}", game_pk, refresh_interval);

    let result = loop {
        let update = slot_rx.borrow().clone();
        let mode = app.mode();
        if let Err(e) = terminal.draw(|f| {
            let area = f.area();
            render_frame(f.buffer_mut(), area, update.as_deref(), mode, &display);
        }) {
            break Err(TuiError::from(e));
        }

        match event::poll(render_interval) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => app.handle_key(key),
                Ok(_) => {}
                Err(e) => break Err(e.into()),
            },
            Ok(false) => {}
            Err(e) => break Err(e.into()),
        }

        if app.should_quit() {
            debug!("ACTION: Quitting live view");
            break Ok(());
        }
    };

    let _ = stop_tx.send(true);
    if let Err(e) = handle.await {
        warn!("LIVE: refresh task ended abnormally: {}", e);
    }
    result
}

/// Screen for a game that has not started; returns after any key press
pub async fn run_preview(screen: PreviewScreen, config: &Config) -> TuiResult<()> {
    let display = config.display();
    with_terminal(|mut terminal| async move {
        let result = preview_loop(&mut terminal, &screen, &display);
        (terminal, result)
    })
    .await
}

fn preview_loop(
    terminal: &mut Term,
    screen: &PreviewScreen,
    display: &crate::config::DisplayConfig,
) -> TuiResult<()> {
    let mut app = App::new();
    app.select_game(GameStatus::Preview);

    while !app.should_quit() {
        terminal.draw(|f| {
            let area = f.area();
            screen.render(area, f.buffer_mut(), display);
        })?;
        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_size_check() {
        assert!(ensure_min_size(MIN_TERMINAL_ROWS, MIN_TERMINAL_COLS).is_ok());
        assert!(matches!(
            ensure_min_size(10, 100),
            Err(TuiError::TerminalTooSmall { rows: 10, cols: 100, .. })
        ));
        assert!(ensure_min_size(24, 59).is_err());
    }

    #[test]
    fn test_color_check_can_be_disabled() {
        let config = crate::config::parse("check_color_support = false");
        assert!(check_color_support(&config).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = TuiError::UnsupportedTerminal {
            colors: 8,
            required: MIN_COLOR_COUNT,
        };
        assert_eq!(err.to_string(), "Terminal supports 8 colors, need 256");

        let err = ensure_min_size(12, 40).unwrap_err();
        assert_eq!(err.to_string(), "Terminal too small: 40x12, need at least 60x20");
    }
}
