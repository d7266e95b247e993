use crate::model::ViewARoute;
use crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use route_nexus::{Action, Component, Context, Event, EventContext};

pub trait ViewARouter: Send + Sync + 'static {
    fn view_needs_route(&self, route: ViewARoute);
}

/// Top screen: branches to B or C by push, or presents Z.
pub struct ViewA<R: ViewARouter> {
    router: R,
}

impl<R: ViewARouter> ViewA<R> {
    const OPTIONS: [(char, &'static str, ViewARoute); 3] = [
        ('b', "Tap me to View B", ViewARoute::B),
        ('c', "Tap me to View C", ViewARoute::C),
        ('z', "Tap me to View Z", ViewARoute::Z),
    ];

    pub fn new(router: R) -> Self {
        Self { router }
    }
}

impl<R: ViewARouter> Component for ViewA<R> {
    fn title(&self) -> String {
        "A".to_string()
    }

    fn hints(&self) -> &'static str {
        "b/c Push │ z Present"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let lines: Vec<Line> = Self::OPTIONS
            .iter()
            .map(|(key, label, _)| {
                Line::from(vec![
                    Span::styled(format!(" [{key}] "), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                    Span::raw(*label),
                ])
            })
            .collect();

        let body = Paragraph::new(lines).block(
            Block::default()
                .title(" View A ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(body, cx.area);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char(c) => {
                    if let Some((_, _, route)) = Self::OPTIONS.iter().find(|(k, _, _)| *k == c) {
                        self.router.view_needs_route(*route);
                    }
                    None
                }
                KeyCode::Esc => Some(Action::Back),
                _ => None,
            },
            _ => None,
        }
    }
}
