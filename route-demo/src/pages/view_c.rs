use crate::model::ViewCRoute;
use crossterm::event::KeyCode;
use ratatui::layout::Alignment;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use route_nexus::{Action, Component, Context, Event, EventContext};

pub trait ViewCRouter: Send + Sync + 'static {
    fn view_needs_route(&self, route: ViewCRoute);
}

pub struct ViewC<R: ViewCRouter> {
    router: R,
}

impl<R: ViewCRouter> ViewC<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }
}

impl<R: ViewCRouter> Component for ViewC<R> {
    fn title(&self) -> String {
        "C".to_string()
    }

    fn hints(&self) -> &'static str {
        "Enter Go back │ Esc Back"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let body = Paragraph::new("[Enter] Tap me to go back")
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(" View C ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            );
        frame.render_widget(body, cx.area);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Enter | KeyCode::Backspace => {
                    self.router.view_needs_route(ViewCRoute::Back);
                    None
                }
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            _ => None,
        }
    }
}
