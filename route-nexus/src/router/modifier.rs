//! Routing integration adapter.
//!
//! A `RoutingModifier` wraps one screen and keeps its pushed and presented
//! children in step with the router's bindings. It holds no routing state of
//! its own: the router decides, the modifier mounts and tears down.

use super::traits::{Routed, RouterObject, ScreenKey};
use crate::application::{Context, EventContext};
use crate::component::{Action, Component, Event};
use ratatui::widgets::Clear;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Navigation,
    Presentation,
}

pub struct RoutingModifier<R: RouterObject> {
    router: R,
    content: Routed<R>,
    pushed: Option<Box<RoutingModifier<R>>>,
    presented: Option<Box<RoutingModifier<R>>>,
}

impl<R: RouterObject> RoutingModifier<R> {
    pub fn new(router: R, content: Routed<R>) -> Self {
        Self {
            router,
            content,
            pushed: None,
            presented: None,
        }
    }

    pub fn screen(&self) -> &R::Screen {
        self.content.screen()
    }

    pub fn screen_id(&self) -> Option<R::ScreenId> {
        self.content.id()
    }

    pub fn pushed(&self) -> Option<&RoutingModifier<R>> {
        self.pushed.as_deref()
    }

    pub fn presented(&self) -> Option<&RoutingModifier<R>> {
        self.presented.as_deref()
    }

    /// The screen that currently receives input.
    pub fn top(&self) -> &R::Screen {
        if let Some(child) = &self.presented {
            return child.top();
        }
        match &self.pushed {
            Some(child) => child.top(),
            None => self.content.screen(),
        }
    }

    /// Titles from this screen down to the top-most mounted one.
    pub fn path(&self) -> Vec<String> {
        let mut path = vec![self.content.screen().title()];
        if let Some(child) = &self.pushed {
            path.extend(child.path());
        }
        if let Some(child) = &self.presented {
            path.extend(child.path());
        }
        path
    }

    /// Reconcile mounted children with the router's bindings, recursively.
    ///
    /// A child is mounted when its binding reads `true` and torn down (with
    /// its whole subtree) when it reads `false`. Returns whether anything was
    /// mounted or torn down.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;

        if let Some(id) = self.content.id() {
            changed |= self.reconcile(id, Slot::Navigation);
            changed |= self.reconcile(id, Slot::Presentation);
        }

        if let Some(child) = self.pushed.as_mut() {
            changed |= child.sync();
        }
        if let Some(child) = self.presented.as_mut() {
            changed |= child.sync();
        }
        changed
    }

    fn reconcile(&mut self, id: R::ScreenId, slot: Slot) -> bool {
        let (active, next) = match slot {
            Slot::Navigation => (
                self.router.navigation_binding(id).get(),
                self.router.next_navigation_view(id),
            ),
            Slot::Presentation => (
                self.router.presentation_binding(id).get(),
                self.router.next_presentation_view(id),
            ),
        };
        let current = match slot {
            Slot::Navigation => &mut self.pushed,
            Slot::Presentation => &mut self.presented,
        };

        match (active, current.is_some(), next) {
            (true, false, Some(next)) => {
                *current = Some(Self::mount(&self.router, next, id, slot));
                true
            }
            (true, false, None) => {
                tracing::warn!(screen = id.as_str(), ?slot, "binding active but router offered no view");
                false
            }
            (true, true, Some(next)) => {
                let stale = current
                    .as_ref()
                    .is_some_and(|child| !child.content.same_destination(&next));
                if !stale {
                    return false;
                }
                if let Some(child) = current.take() {
                    child.teardown(id, slot);
                }
                *current = Some(Self::mount(&self.router, next, id, slot));
                true
            }
            (true, true, None) => false,
            (false, true, _) => {
                if let Some(child) = current.take() {
                    child.teardown(id, slot);
                }
                true
            }
            (false, false, _) => false,
        }
    }

    fn mount(router: &R, next: Routed<R>, parent: R::ScreenId, slot: Slot) -> Box<Self> {
        let mut child = Box::new(Self::new(router.clone(), next));
        tracing::debug!(parent = parent.as_str(), ?slot, screen = %child.content.screen().title(), "mount");
        child.content.screen_mut().on_enter();
        child
    }

    fn teardown(mut self: Box<Self>, parent: R::ScreenId, slot: Slot) {
        if let Some(id) = self.content.id() {
            if let Some(child) = self.presented.take() {
                child.teardown(id, Slot::Presentation);
            }
            if let Some(child) = self.pushed.take() {
                child.teardown(id, Slot::Navigation);
            }
        }
        tracing::debug!(parent = parent.as_str(), ?slot, screen = %self.content.screen().title(), "teardown");
        self.content.screen_mut().on_exit();
    }

    /// Dispatch an event to the screen that currently has focus.
    ///
    /// A presented child captures input first, then a pushed child. When a
    /// pushed child answers [`Action::Back`], this screen's navigation binding
    /// is written `false`. Presented children ignore the back gesture.
    pub fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        if let Some(child) = self.presented.as_mut() {
            return match child.handle_event(event, cx) {
                Some(Action::Back) => None,
                other => other,
            };
        }
        if let Some(child) = self.pushed.as_mut() {
            return match child.handle_event(event, cx) {
                Some(Action::Back) => {
                    if let Some(id) = self.content.id() {
                        tracing::debug!(screen = id.as_str(), "back gesture");
                        self.router.navigation_binding(id).set(false);
                    }
                    None
                }
                other => other,
            };
        }
        self.content.screen_mut().handle_event(event, cx)
    }

    /// Render the top-most pushed screen, then any presented screen over it.
    pub fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        match self.pushed.as_mut() {
            Some(child) => child.render(frame, cx),
            None => self.content.screen_mut().render(frame, cx),
        }
        if let Some(child) = self.presented.as_mut() {
            frame.render_widget(Clear, cx.area);
            child.render(frame, cx);
        }
    }

    /// Run `on_shutdown` for every mounted screen, deepest first.
    pub fn shutdown(&mut self) {
        if let Some(child) = self.presented.as_mut() {
            child.shutdown();
        }
        if let Some(child) = self.pushed.as_mut() {
            child.shutdown();
        }
        self.content.screen_mut().on_shutdown();
    }
}
