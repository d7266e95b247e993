//! Terminal application loop.

use crate::component::{Action, Event};
use crate::error::TerminalSnafu;
use crate::router::{NavigationRoot, RouterObject};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use snafu::ResultExt;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Context passed to component render and event methods.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub area: Rect,
}

impl Context {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }
}

/// EventContext for event handling, currently identical to Context but renamed for clarity.
pub type EventContext = Context;

/// Main application handle.
pub struct Application {
    tick_rate: Duration,
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
        }
    }

    /// How long each event poll waits before checking for router changes again.
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Run the application until a screen asks to quit.
    pub fn run<R: RouterObject>(self, root: NavigationRoot<R>) -> anyhow::Result<()> {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {}", e))?;
        rt.block_on(async move { self.run_loop(root).await })
    }

    async fn run_loop<R: RouterObject>(&self, mut root: NavigationRoot<R>) -> anyhow::Result<()> {
        install_panic_hook();
        enable_raw_mode().context(TerminalSnafu)?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, event::EnableFocusChange)
            .context(TerminalSnafu)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context(TerminalSnafu)?;

        tracing::info!(screen = %root.breadcrumb(), "application started");
        root.sync();

        let result = self.run_app_loop(&mut terminal, &mut root).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            event::DisableFocusChange
        )?;
        terminal.show_cursor()?;
        tracing::info!("application stopped");

        result
    }

    async fn run_app_loop<R: RouterObject>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        root: &mut NavigationRoot<R>,
    ) -> anyhow::Result<()> {
        let mut changes = root.router().subscribe();
        let mut dirty = true;

        loop {
            if dirty {
                terminal.draw(|frame| root.render(frame))?;
                dirty = false;
            }

            tokio::select! {
                changed = changes.changed() => {
                    if changed.is_err() {
                        // Router dropped: nothing left to drive.
                        root.shutdown();
                        return Ok(());
                    }
                    root.sync();
                    dirty = true;
                }
                event_ready = async { event::poll(self.tick_rate) } => {
                    if let Ok(true) = event_ready {
                        let crossterm_event = event::read()?;
                        let internal_event = match crossterm_event {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
                            _ => None,
                        };

                        if let Some(event) = internal_event {
                            let size = terminal.size()?;
                            let mut cx = Context::new(Rect::new(0, 0, size.width, size.height));
                            let action = root.handle_event(event, &mut cx);

                            if action == Some(Action::Quit) {
                                root.shutdown();
                                return Ok(());
                            }
                            root.sync();
                            dirty = true;
                        }
                    }
                }
            }
        }
    }
}

/// Restore the terminal before the default panic output, so contract
/// violations in debug builds stay readable.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}
