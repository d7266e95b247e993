//! The router: sole owner of navigation state for screens A to Z.

use crate::model::{RouteState, ScreenId, ViewARoute, ViewBRoute, ViewCRoute, ViewDRoute, ViewZRoute};
use crate::pages::{ViewA, ViewARouter, ViewB, ViewBRouter, ViewC, ViewCRouter, ViewD, ViewDRouter, ViewZ, ViewZRouter};
use route_nexus::error::{BindingContractSnafu, InvalidTransitionSnafu};
use route_nexus::{
    contract, Action, Binding, Component, Context, Entity, Event, EventContext, NavigationRoot, Result, Routed,
    RouterObject, WeakEntity,
};
use snafu::ensure;
use tokio::sync::watch;

/// Every screen the router can construct.
pub enum Screen {
    A(ViewA<RouterHandle>),
    B(ViewB<RouterHandle>),
    C(ViewC<RouterHandle>),
    D(ViewD<RouterHandle>),
    Z(ViewZ<RouterHandle>),
}

macro_rules! dispatch {
    ($self:ident, $view:ident => $body:expr) => {
        match $self {
            Screen::A($view) => $body,
            Screen::B($view) => $body,
            Screen::C($view) => $body,
            Screen::D($view) => $body,
            Screen::Z($view) => $body,
        }
    };
}

impl Component for Screen {
    fn title(&self) -> String {
        dispatch!(self, view => view.title())
    }

    fn hints(&self) -> &'static str {
        dispatch!(self, view => view.hints())
    }

    fn on_enter(&mut self) {
        dispatch!(self, view => view.on_enter())
    }

    fn on_exit(&mut self) {
        dispatch!(self, view => view.on_exit())
    }

    fn on_shutdown(&mut self) {
        dispatch!(self, view => view.on_shutdown())
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        dispatch!(self, view => view.render(frame, cx))
    }

    fn handle_event(&mut self, event: Event, cx: &mut EventContext) -> Option<Action> {
        dispatch!(self, view => view.handle_event(event, cx))
    }
}

/// Owns the routing state. Held by the navigation root; screens get a
/// [`RouterHandle`] instead.
#[derive(Clone)]
pub struct AppRouter {
    state: Entity<RouteState>,
}

/// Non-owning handle to an [`AppRouter`], given to every screen.
///
/// Route requests made after the router is gone are dropped.
#[derive(Clone)]
pub struct RouterHandle {
    state: WeakEntity<RouteState>,
}

impl RouterHandle {
    fn upgrade(&self) -> Option<AppRouter> {
        self.state.upgrade().map(|state| AppRouter { state })
    }

    fn with_router(&self, f: impl FnOnce(AppRouter)) {
        match self.upgrade() {
            Some(router) => f(router),
            None => tracing::warn!("route requested after router was dropped"),
        }
    }
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRouter {
    pub fn new() -> Self {
        Self {
            state: Entity::new(RouteState::default()),
        }
    }

    pub fn handle(&self) -> RouterHandle {
        RouterHandle {
            state: self.state.downgrade(),
        }
    }

    /// Snapshot of the current routing state.
    pub fn state(&self) -> Result<RouteState> {
        self.state.read(|s| *s)
    }

    /// Register a callback run after every routing change.
    pub fn observe<F>(&self, f: F) -> Result<()>
    where
        F: Fn(&RouteState) + Send + Sync + 'static,
    {
        self.state.observe(f)
    }

    /// The navigation root, with A as its first screen.
    pub fn make_view(&self) -> NavigationRoot<Self> {
        NavigationRoot::new(self.clone(), self.make_view_a())
    }

    fn make_view_a(&self) -> Routed<Self> {
        Routed::injected(Screen::A(ViewA::new(self.handle())), ScreenId::A)
    }

    fn make_view_b(&self) -> Routed<Self> {
        Routed::injected(Screen::B(ViewB::new(self.handle())), ScreenId::B)
    }

    fn make_view_c(&self) -> Routed<Self> {
        Routed::injected(Screen::C(ViewC::new(self.handle())), ScreenId::C)
    }

    fn make_view_d(&self, int: usize) -> Routed<Self> {
        Routed::plain(Screen::D(ViewD::new(self.handle(), int))).keyed(int.to_string())
    }

    fn make_view_z(&self) -> Routed<Self> {
        Routed::injected(Screen::Z(ViewZ::new(self.handle())), ScreenId::Z)
    }

    fn transition<F>(&self, screen: ScreenId, description: String, f: F) -> Result<()>
    where
        F: FnOnce(&mut RouteState) -> Result<()>,
    {
        let result = self.state.update(f)?;
        match &result {
            Ok(()) => tracing::debug!(screen = screen.as_str(), route = %description, "route"),
            Err(err) => tracing::debug!(screen = screen.as_str(), route = %description, error = %err, "route rejected"),
        }
        result
    }

    /// Record A's request. Replacing a B route drops B's child route with it.
    pub fn try_route_a(&self, route: ViewARoute) -> Result<()> {
        self.transition(ScreenId::A, format!("{route:?}"), |s| {
            s.view_a = Some(route);
            if route != ViewARoute::B {
                s.view_b = None;
            }
            Ok(())
        })
    }

    /// Record B's request. Only valid while B is the active child of A.
    pub fn try_route_b(&self, route: ViewBRoute) -> Result<()> {
        self.transition(ScreenId::B, format!("{route:?}"), |s| {
            ensure!(
                s.view_a == Some(ViewARoute::B),
                InvalidTransitionSnafu {
                    screen: ScreenId::B.as_str(),
                    expected: "A showing B",
                    found: format!("A route {:?}", s.view_a),
                }
            );
            s.view_b = Some(route);
            Ok(())
        })
    }

    pub fn try_route_c(&self, route: ViewCRoute) -> Result<()> {
        self.transition(ScreenId::C, format!("{route:?}"), |s| match route {
            ViewCRoute::Back => {
                ensure!(
                    s.view_a == Some(ViewARoute::C),
                    InvalidTransitionSnafu {
                        screen: ScreenId::C.as_str(),
                        expected: "A showing C",
                        found: format!("A route {:?}", s.view_a),
                    }
                );
                s.view_a = None;
                Ok(())
            }
        })
    }

    pub fn try_route_d(&self, route: ViewDRoute) -> Result<()> {
        self.transition(ScreenId::D, format!("{route:?}"), |s| match route {
            ViewDRoute::Root => {
                ensure!(
                    s.view_a == Some(ViewARoute::B) && s.view_b.is_some_and(|b| b.is_d()),
                    InvalidTransitionSnafu {
                        screen: ScreenId::D.as_str(),
                        expected: "A showing B and B showing D",
                        found: format!("A route {:?}, B route {:?}", s.view_a, s.view_b),
                    }
                );
                s.view_a = None;
                s.view_b = None;
                Ok(())
            }
        })
    }

    pub fn try_route_z(&self, route: ViewZRoute) -> Result<()> {
        self.transition(ScreenId::Z, format!("{route:?}"), |s| match route {
            ViewZRoute::Done => {
                ensure!(
                    s.view_a == Some(ViewARoute::Z),
                    InvalidTransitionSnafu {
                        screen: ScreenId::Z.as_str(),
                        expected: "A presenting Z",
                        found: format!("A route {:?}", s.view_a),
                    }
                );
                s.view_a = None;
                Ok(())
            }
        })
    }

    /// A binding over the route state that only accepts `false` writes.
    fn dismiss_binding<G, S>(&self, screen: ScreenId, get: G, dismiss: S) -> Binding<bool>
    where
        G: Fn(&RouteState) -> bool + Send + Sync + 'static,
        S: Fn(&mut RouteState) + Send + Sync + 'static,
    {
        let read = self.state.downgrade();
        let write = self.state.downgrade();
        Binding::new(
            move || read.read(&get).and_then(|r| r.ok()).unwrap_or(false),
            move |value: bool| {
                if value {
                    contract::violated(
                        BindingContractSnafu {
                            screen: screen.as_str(),
                            value,
                        }
                        .build(),
                    );
                    return;
                }
                tracing::debug!(screen = screen.as_str(), "binding dismissed");
                if let Some(Err(err)) = write.update(&dismiss) {
                    tracing::error!(error = %err, "failed to dismiss route");
                }
            },
        )
    }
}

fn a_pushes(s: &RouteState) -> bool {
    matches!(s.view_a, Some(ViewARoute::B | ViewARoute::C))
}

fn a_presents(s: &RouteState) -> bool {
    s.view_a == Some(ViewARoute::Z)
}

impl RouterObject for AppRouter {
    type ScreenId = ScreenId;
    type Screen = Screen;

    fn navigation_binding(&self, id: ScreenId) -> Binding<bool> {
        match id {
            ScreenId::A => self.dismiss_binding(id, a_pushes, |s| {
                if a_pushes(s) {
                    s.view_a = None;
                    s.view_b = None;
                }
            }),
            ScreenId::B => self.dismiss_binding(id, |s| s.view_b.is_some(), |s| s.view_b = None),
            ScreenId::C | ScreenId::D | ScreenId::Z => Binding::constant(false),
        }
    }

    fn next_navigation_view(&self, id: ScreenId) -> Option<Routed<Self>> {
        let state = self.state().ok()?;
        match id {
            ScreenId::A => match state.view_a? {
                ViewARoute::B => Some(self.make_view_b()),
                ViewARoute::C => Some(self.make_view_c()),
                ViewARoute::Z => None,
            },
            ScreenId::B => match state.view_b? {
                ViewBRoute::D { index } => Some(self.make_view_d(index)),
            },
            ScreenId::C | ScreenId::D | ScreenId::Z => None,
        }
    }

    fn presentation_binding(&self, id: ScreenId) -> Binding<bool> {
        match id {
            ScreenId::A => self.dismiss_binding(id, a_presents, |s| {
                if a_presents(s) {
                    s.view_a = None;
                }
            }),
            ScreenId::B | ScreenId::C | ScreenId::D | ScreenId::Z => Binding::constant(false),
        }
    }

    fn next_presentation_view(&self, id: ScreenId) -> Option<Routed<Self>> {
        let state = self.state().ok()?;
        match (id, state.view_a) {
            (ScreenId::A, Some(ViewARoute::Z)) => Some(self.make_view_z()),
            _ => None,
        }
    }

    fn subscribe(&self) -> watch::Receiver<()> {
        self.state.subscribe()
    }
}

impl ViewARouter for AppRouter {
    fn view_needs_route(&self, route: ViewARoute) {
        contract::enforce(self.try_route_a(route));
    }
}

impl ViewBRouter for AppRouter {
    fn view_needs_route(&self, route: ViewBRoute) {
        contract::enforce(self.try_route_b(route));
    }
}

impl ViewCRouter for AppRouter {
    fn view_needs_route(&self, route: ViewCRoute) {
        contract::enforce(self.try_route_c(route));
    }
}

impl ViewDRouter for AppRouter {
    fn view_needs_route(&self, route: ViewDRoute) {
        contract::enforce(self.try_route_d(route));
    }
}

impl ViewZRouter for AppRouter {
    fn view_needs_route(&self, route: ViewZRoute) {
        contract::enforce(self.try_route_z(route));
    }
}

impl ViewARouter for RouterHandle {
    fn view_needs_route(&self, route: ViewARoute) {
        self.with_router(|router| ViewARouter::view_needs_route(&router, route));
    }
}

impl ViewBRouter for RouterHandle {
    fn view_needs_route(&self, route: ViewBRoute) {
        self.with_router(|router| ViewBRouter::view_needs_route(&router, route));
    }
}

impl ViewCRouter for RouterHandle {
    fn view_needs_route(&self, route: ViewCRoute) {
        self.with_router(|router| ViewCRouter::view_needs_route(&router, route));
    }
}

impl ViewDRouter for RouterHandle {
    fn view_needs_route(&self, route: ViewDRoute) {
        self.with_router(|router| ViewDRouter::view_needs_route(&router, route));
    }
}

impl ViewZRouter for RouterHandle {
    fn view_needs_route(&self, route: ViewZRoute) {
        self.with_router(|router| ViewZRouter::view_needs_route(&router, route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;
    use route_nexus::{Error, ScreenKey};
    use std::sync::{Arc, Mutex};

    fn state(router: &AppRouter) -> RouteState {
        router.state().unwrap()
    }

    fn nav(router: &AppRouter, id: ScreenId) -> bool {
        router.navigation_binding(id).get()
    }

    fn presenting(router: &AppRouter, id: ScreenId) -> bool {
        router.presentation_binding(id).get()
    }

    fn next_nav_title(router: &AppRouter, id: ScreenId) -> Option<String> {
        router.next_navigation_view(id).map(|v| v.screen().title())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn cx() -> EventContext {
        Context::new(Rect::new(0, 0, 60, 20))
    }

    #[test]
    fn test_router_starts_idle() {
        let router = AppRouter::new();
        assert!(state(&router).is_idle());
        for id in ScreenId::ALL {
            assert!(!nav(&router, *id));
            assert!(!presenting(&router, *id));
            assert!(router.next_navigation_view(*id).is_none());
            assert!(router.next_presentation_view(*id).is_none());
        }
    }

    #[test]
    fn test_a_routes_are_mutually_exclusive() {
        let router = AppRouter::new();
        let sequence = [ViewARoute::B, ViewARoute::C, ViewARoute::Z, ViewARoute::C, ViewARoute::B, ViewARoute::Z];

        for route in sequence {
            ViewARouter::view_needs_route(&router, route);
            assert_eq!(state(&router).view_a, Some(route));

            let pushing = nav(&router, ScreenId::A);
            let modal = presenting(&router, ScreenId::A);
            assert_eq!(pushing, matches!(route, ViewARoute::B | ViewARoute::C));
            assert_eq!(modal, route == ViewARoute::Z);
            assert!(!(pushing && modal));
        }
    }

    #[test]
    fn test_next_views_follow_a_route() {
        let router = AppRouter::new();

        router.try_route_a(ViewARoute::B).unwrap();
        let next = router.next_navigation_view(ScreenId::A).unwrap();
        assert_eq!(next.id(), Some(ScreenId::B));
        assert!(matches!(next.screen(), Screen::B(_)));
        assert!(router.next_presentation_view(ScreenId::A).is_none());

        router.try_route_a(ViewARoute::C).unwrap();
        assert_eq!(next_nav_title(&router, ScreenId::A).as_deref(), Some("C"));

        router.try_route_a(ViewARoute::Z).unwrap();
        assert!(router.next_navigation_view(ScreenId::A).is_none());
        let modal = router.next_presentation_view(ScreenId::A).unwrap();
        assert!(matches!(modal.screen(), Screen::Z(_)));
    }

    #[test]
    fn test_b_route_requires_a_showing_b() {
        let router = AppRouter::new();
        let err = router.try_route_b(ViewBRoute::D { index: 1 }).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { screen: "B", .. }));
        assert_eq!(state(&router).view_b, None);

        router.try_route_a(ViewARoute::C).unwrap();
        assert!(router.try_route_b(ViewBRoute::D { index: 1 }).is_err());
    }

    #[test]
    fn test_leaving_b_clears_its_child_route() {
        let router = AppRouter::new();
        router.try_route_a(ViewARoute::B).unwrap();
        router.try_route_b(ViewBRoute::D { index: 5 }).unwrap();

        router.try_route_a(ViewARoute::C).unwrap();
        assert_eq!(state(&router).view_b, None);
    }

    #[test]
    fn test_d_root_clears_both_routes() {
        let router = AppRouter::new();
        for index in 0..10 {
            ViewARouter::view_needs_route(&router, ViewARoute::B);
            ViewBRouter::view_needs_route(&router, ViewBRoute::D { index });
            assert!(nav(&router, ScreenId::B));

            let d = router.next_navigation_view(ScreenId::B).unwrap();
            assert_eq!(d.id(), None);
            assert!(matches!(d.screen(), Screen::D(view) if view.int() == index));
            assert_eq!(d.key(), Some(index.to_string().as_str()));

            ViewDRouter::view_needs_route(&router, ViewDRoute::Root);
            assert!(state(&router).is_idle());
            assert!(!nav(&router, ScreenId::A));
            assert!(!nav(&router, ScreenId::B));
        }
    }

    #[test]
    fn test_unwind_from_wrong_state_is_rejected() {
        let router = AppRouter::new();
        router.try_route_a(ViewARoute::B).unwrap();

        let err = router.try_route_c(ViewCRoute::Back).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { screen: "C", .. }));
        assert!(router.try_route_z(ViewZRoute::Done).is_err());
        // B without a D child yet.
        assert!(router.try_route_d(ViewDRoute::Root).is_err());

        assert_eq!(state(&router).view_a, Some(ViewARoute::B));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid transition on screen C")]
    fn test_c_back_outside_c_traps() {
        let router = AppRouter::new();
        ViewCRouter::view_needs_route(&router, ViewCRoute::Back);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid transition on screen Z")]
    fn test_z_done_without_modal_traps() {
        let router = AppRouter::new();
        ViewARouter::view_needs_route(&router, ViewARoute::C);
        ViewZRouter::view_needs_route(&router, ViewZRoute::Done);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "only false is accepted")]
    fn test_writing_true_to_binding_traps() {
        let router = AppRouter::new();
        router.navigation_binding(ScreenId::A).set(true);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "only false is accepted")]
    fn test_writing_true_to_presentation_binding_traps() {
        let router = AppRouter::new();
        router.presentation_binding(ScreenId::A).set(true);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Invalid transition on screen D")]
    fn test_d_root_without_d_traps() {
        let router = AppRouter::new();
        ViewARouter::view_needs_route(&router, ViewARoute::C);
        ViewDRouter::view_needs_route(&router, ViewDRoute::Root);
    }

    #[test]
    fn test_binding_writes_false_clear_routes() {
        let router = AppRouter::new();
        router.try_route_a(ViewARoute::B).unwrap();
        router.try_route_b(ViewBRoute::D { index: 2 }).unwrap();

        router.navigation_binding(ScreenId::B).set(false);
        assert_eq!(state(&router).view_b, None);
        assert_eq!(state(&router).view_a, Some(ViewARoute::B));

        router.try_route_b(ViewBRoute::D { index: 2 }).unwrap();
        router.navigation_binding(ScreenId::A).set(false);
        assert!(state(&router).is_idle());

        router.try_route_a(ViewARoute::Z).unwrap();
        // A push dismissal never takes down the modal.
        router.navigation_binding(ScreenId::A).set(false);
        assert!(presenting(&router, ScreenId::A));
        router.presentation_binding(ScreenId::A).set(false);
        assert!(state(&router).is_idle());
    }

    #[test]
    fn test_leaf_screens_have_constant_bindings() {
        let router = AppRouter::new();
        for id in [ScreenId::C, ScreenId::D, ScreenId::Z] {
            assert!(router.navigation_binding(id).is_constant());
            assert!(router.presentation_binding(id).is_constant());
        }
        assert!(router.presentation_binding(ScreenId::B).is_constant());
    }

    #[test]
    fn test_unknown_string_ids_fall_back_to_inactive() {
        let router = AppRouter::new();
        router.try_route_a(ViewARoute::B).unwrap();

        assert!(router.navigation_binding_for("A").get());
        assert_eq!(router.next_navigation_view_for("A").map(|v| v.screen().title()).as_deref(), Some("B"));

        for unknown in ["", "a", "Q", "root"] {
            let binding = router.navigation_binding_for(unknown);
            assert!(binding.is_constant());
            assert!(!binding.get());
            assert!(!router.presentation_binding_for(unknown).get());
            assert!(router.next_navigation_view_for(unknown).is_none());
            assert!(router.next_presentation_view_for(unknown).is_none());
        }
    }

    #[test]
    fn test_handle_is_non_owning() {
        let router = AppRouter::new();
        let handle = router.handle();
        let binding = router.navigation_binding(ScreenId::A);
        ViewARouter::view_needs_route(&handle, ViewARoute::C);
        assert!(binding.get());

        drop(router);
        // No router left: requests are dropped and bindings read inactive.
        ViewARouter::view_needs_route(&handle, ViewARoute::B);
        assert!(!binding.get());
        binding.set(false);
    }

    #[test]
    fn test_observers_see_every_transition() {
        let router = AppRouter::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        router.observe(move |s| sink.lock().unwrap().push(*s)).unwrap();

        router.try_route_a(ViewARoute::Z).unwrap();
        router.try_route_z(ViewZRoute::Done).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].view_a, Some(ViewARoute::Z));
        assert!(seen[1].is_idle());
    }

    #[tokio::test]
    async fn test_subscribers_are_woken_by_route_requests() {
        let router = AppRouter::new();
        let mut changes = router.subscribe();
        ViewARouter::view_needs_route(&router.handle(), ViewARoute::B);
        changes.changed().await.unwrap();
        assert!(nav(&router, ScreenId::A));
    }

    #[test]
    fn test_push_scenario_through_screens() {
        let router = AppRouter::new();
        let mut root = router.make_view();
        let mut cx = cx();
        assert_eq!(root.breadcrumb(), "A");

        root.handle_event(key(KeyCode::Char('b')), &mut cx);
        assert!(root.sync());
        assert!(nav(&router, ScreenId::A));
        assert_eq!(root.modifier().path(), vec!["A", "B"]);

        root.handle_event(key(KeyCode::Char('3')), &mut cx);
        root.sync();
        assert_eq!(state(&router).view_b, Some(ViewBRoute::D { index: 3 }));
        assert_eq!(root.breadcrumb(), "A › B › D(3)");

        root.handle_event(key(KeyCode::Char('r')), &mut cx);
        assert!(state(&router).is_idle());
        assert!(!nav(&router, ScreenId::A));
        root.sync();
        assert_eq!(root.modifier().path(), vec!["A"]);
    }

    #[test]
    fn test_modal_scenario_through_screens() {
        let router = AppRouter::new();
        let mut root = router.make_view();
        let mut cx = cx();

        root.handle_event(key(KeyCode::Char('z')), &mut cx);
        root.sync();
        assert!(presenting(&router, ScreenId::A));
        assert_eq!(root.modifier().top().title(), "Z");

        // Full-screen modal: the back gesture does not dismiss it.
        root.handle_event(key(KeyCode::Esc), &mut cx);
        root.sync();
        assert!(presenting(&router, ScreenId::A));

        root.handle_event(key(KeyCode::Enter), &mut cx);
        assert!(!presenting(&router, ScreenId::A));
        root.sync();
        assert!(root.modifier().presented().is_none());
        assert_eq!(root.modifier().top().title(), "A");
    }

    #[test]
    fn test_back_gesture_unwinds_one_level() {
        let router = AppRouter::new();
        let mut root = router.make_view();
        let mut cx = cx();

        root.handle_event(key(KeyCode::Char('b')), &mut cx);
        root.sync();
        root.handle_event(key(KeyCode::Char('7')), &mut cx);
        root.sync();

        root.handle_event(key(KeyCode::Esc), &mut cx);
        root.sync();
        assert_eq!(state(&router).view_b, None);
        assert_eq!(root.breadcrumb(), "A › B");

        root.handle_event(key(KeyCode::Esc), &mut cx);
        root.sync();
        assert!(state(&router).is_idle());
        assert_eq!(root.breadcrumb(), "A");

        // Nothing left to pop.
        assert_eq!(root.handle_event(key(KeyCode::Esc), &mut cx), None);
    }

    #[test]
    fn test_c_back_button_and_quit() {
        let router = AppRouter::new();
        let mut root = router.make_view();
        let mut cx = cx();

        root.handle_event(key(KeyCode::Char('c')), &mut cx);
        root.sync();
        assert_eq!(root.breadcrumb(), "A › C");

        root.handle_event(key(KeyCode::Enter), &mut cx);
        root.sync();
        assert_eq!(root.breadcrumb(), "A");

        assert_eq!(root.handle_event(key(KeyCode::Char('q')), &mut cx), Some(Action::Quit));
    }

    #[test]
    fn test_root_renders_breadcrumb_and_top_screen() {
        let router = AppRouter::new();
        let mut root = router.make_view();
        router.try_route_a(ViewARoute::B).unwrap();
        router.try_route_b(ViewBRoute::D { index: 4 }).unwrap();
        root.sync();

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|frame| root.render(frame)).unwrap();

        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("View D"));
        assert!(text.contains("Return to root"));
        assert!(!text.contains("View B"));
        assert_eq!(ScreenId::D.as_str(), <ScreenId as ScreenKey>::as_str(&ScreenId::D));
    }
}
