use crate::application::{Context, EventContext};

/// Event type for component interactions.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// Action that a component can return after handling an event.
///
/// Route requests do not travel through actions: screens call their router
/// delegate directly. Actions only carry what the host itself must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// System back gesture: dismiss the top-most pushed screen.
    Back,
    Quit,
}

/// The core Component trait for screens.
pub trait Component: Send + Sync + 'static {
    /// Short label shown in the navigation breadcrumb.
    fn title(&self) -> String;

    /// Key hints shown in the footer while this screen is on top.
    fn hints(&self) -> &'static str {
        ""
    }

    /// Called when the host mounts this component.
    fn on_enter(&mut self) {}

    /// Called when the host tears this component down.
    fn on_exit(&mut self) {}

    /// Called when the application is about to shut down.
    fn on_shutdown(&mut self) {}

    /// Render the component into `cx.area`.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        let _ = event;
        let _ = cx;
        None
    }
}
