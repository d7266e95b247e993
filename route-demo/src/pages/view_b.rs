use crate::model::ViewBRoute;
use crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use route_nexus::{Action, Component, Context, Event, EventContext};
use std::ops::Range;

pub trait ViewBRouter: Send + Sync + 'static {
    fn view_needs_route(&self, route: ViewBRoute);
}

/// Offers ten indices; picking one pushes D with that index.
pub struct ViewB<R: ViewBRouter> {
    router: R,
}

impl<R: ViewBRouter> ViewB<R> {
    pub const INDICES: Range<usize> = 0..10;

    pub fn new(router: R) -> Self {
        Self { router }
    }
}

impl<R: ViewBRouter> Component for ViewB<R> {
    fn title(&self) -> String {
        "B".to_string()
    }

    fn hints(&self) -> &'static str {
        "0-9 Open D │ Esc Back"
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let lines: Vec<Line> = Self::INDICES
            .map(|index| {
                Line::from(vec![
                    Span::styled(format!(" [{index}] "), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                    Span::raw(format!("Tap me to View D with Index {index}")),
                ])
            })
            .collect();

        let body = Paragraph::new(lines).block(
            Block::default()
                .title(" View B ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(body, cx.area);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Char(c) => {
                    if let Some(index) = c.to_digit(10).map(|d| d as usize) {
                        if Self::INDICES.contains(&index) {
                            self.router.view_needs_route(ViewBRoute::D { index });
                        }
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
