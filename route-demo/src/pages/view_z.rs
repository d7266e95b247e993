use crate::model::ViewZRoute;
use crossterm::event::KeyCode;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use route_nexus::{Action, Component, Context, Event, EventContext};

pub trait ViewZRouter: Send + Sync + 'static {
    fn view_needs_route(&self, route: ViewZRoute);
}

/// Full-screen modal; only its own "done" dismisses it.
pub struct ViewZ<R: ViewZRouter> {
    router: R,
}

impl<R: ViewZRouter> ViewZ<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }
}

impl<R: ViewZRouter> Component for ViewZ<R> {
    fn title(&self) -> String {
        "Z".to_string()
    }

    fn hints(&self) -> &'static str {
        "Enter/d Done"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let body = Paragraph::new("[Enter] Done")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" View Z ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Magenta)),
            );
        frame.render_widget(body, cx.area);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Char('d') => {
                    self.router.view_needs_route(ViewZRoute::Done);
                    None
                }
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            _ => None,
        }
    }
}
