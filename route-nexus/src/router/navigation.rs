//! Navigation container: the frame around the routed screen tree.

use super::modifier::RoutingModifier;
use super::traits::{Routed, RouterObject};
use crate::application::{Context, EventContext};
use crate::component::{Action, Component, Event};
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Owns the root screen and draws the breadcrumb and key hints around it.
pub struct NavigationRoot<R: RouterObject> {
    router: R,
    root: RoutingModifier<R>,
}

impl<R: RouterObject> NavigationRoot<R> {
    pub fn new(router: R, root: Routed<R>) -> Self {
        let modifier = RoutingModifier::new(router.clone(), root);
        Self { router, root: modifier }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn modifier(&self) -> &RoutingModifier<R> {
        &self.root
    }

    pub fn sync(&mut self) -> bool {
        self.root.sync()
    }

    pub fn breadcrumb(&self) -> String {
        self.root.path().join(" › ")
    }

    /// Handle an event: `q` quits, anything else goes to the focused screen.
    pub fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        if let Event::Key(key) = &event {
            if key.code == KeyCode::Char('q') {
                return Some(Action::Quit);
            }
        }
        match self.root.handle_event(event, cx) {
            // Back at the root has nowhere to go.
            Some(Action::Back) => None,
            other => other,
        }
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let header = Paragraph::new(self.breadcrumb())
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(" Navigation ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        frame.render_widget(header, chunks[0]);

        let mut cx = Context::new(chunks[1]);
        self.root.render(frame, &mut cx);

        let hints = self.root.top().hints();
        let footer = Paragraph::new(format!(" {hints} │ q Quit "))
            .style(Style::default().bg(Color::Cyan).fg(Color::Black));
        frame.render_widget(footer, chunks[2]);
    }

    pub fn shutdown(&mut self) {
        self.root.shutdown();
    }
}
