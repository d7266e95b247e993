use crate::model::ViewDRoute;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use route_nexus::{Action, Component, Context, Event, EventContext};

pub trait ViewDRouter: Send + Sync + 'static {
    fn view_needs_route(&self, route: ViewDRoute);
}

/// Shows the index picked on B and offers a way back to the top.
pub struct ViewD<R: ViewDRouter> {
    router: R,
    int: usize,
}

impl<R: ViewDRouter> ViewD<R> {
    pub fn new(router: R, int: usize) -> Self {
        Self { router, int }
    }

    pub fn int(&self) -> usize {
        self.int
    }
}

impl<R: ViewDRouter> Component for ViewD<R> {
    fn title(&self) -> String {
        format!("D({})", self.int())
    }

    fn hints(&self) -> &'static str {
        "r Return to root │ Esc Back"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let block = Block::default()
            .title(" View D ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(cx.area);
        frame.render_widget(block, cx.area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let value = Paragraph::new(self.int().to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(value, chunks[0]);

        let button = Paragraph::new("[r] Return to root").alignment(Alignment::Center);
        frame.render_widget(button, chunks[1]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('r') => {
                    self.router.view_needs_route(ViewDRoute::Root);
                    None
                }
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            _ => None,
        }
    }
}
