//! Router contracts.
//!
//! A router owns navigation state and exposes it per screen as two-way
//! bindings plus a factory for whichever child screen is currently requested.
//! The [`RoutingModifier`](super::RoutingModifier) consumes these contracts.

use crate::binding::Binding;
use crate::component::Component;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;
use tokio::sync::watch;

/// A closed set of screen identifiers.
///
/// Usually generated with `#[route_setup::screen_ids]`.
pub trait ScreenKey:
    Copy + Eq + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
    /// Every identifier in the set.
    fn all() -> &'static [Self];

    /// The string form of this identifier.
    fn as_str(&self) -> &'static str;
}

/// A constructed screen, optionally wired to its router under a screen ID.
///
/// Screens that can request child routes are `injected` with their ID; leaf
/// screens that never branch are `plain`. A destination is identified by its
/// ID plus an optional route key, so routes carrying a payload should be
/// `keyed` with it.
pub struct Routed<R: RouterObject> {
    screen: R::Screen,
    id: Option<R::ScreenId>,
    key: Option<String>,
}

impl<R: RouterObject> Routed<R> {
    pub fn injected(screen: R::Screen, id: R::ScreenId) -> Self {
        Self { screen, id: Some(id), key: None }
    }

    pub fn plain(screen: R::Screen) -> Self {
        Self { screen, id: None, key: None }
    }

    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Whether `other` stands for the same destination as `self`.
    pub fn same_destination(&self, other: &Routed<R>) -> bool {
        self.id == other.id && self.key == other.key
    }

    pub fn screen(&self) -> &R::Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut R::Screen {
        &mut self.screen
    }

    pub fn id(&self) -> Option<R::ScreenId> {
        self.id
    }
}

/// A router that drives push navigation and modal presentation per screen.
pub trait RouterObject: Clone + Send + Sync + 'static {
    type ScreenId: ScreenKey;
    type Screen: Component;

    /// `true` while the screen's current route is one of its push routes.
    /// Writing `false` clears that route.
    fn navigation_binding(&self, id: Self::ScreenId) -> Binding<bool>;

    /// The child screen for the active push route, if any.
    fn next_navigation_view(&self, id: Self::ScreenId) -> Option<Routed<Self>>;

    /// `true` while the screen's current route is its modal route.
    /// Writing `false` clears that route.
    fn presentation_binding(&self, id: Self::ScreenId) -> Binding<bool>;

    /// The child screen for the active modal route, if any.
    fn next_presentation_view(&self, id: Self::ScreenId) -> Option<Routed<Self>>;

    /// Receiver marked changed whenever the routing state changes.
    fn subscribe(&self) -> watch::Receiver<()>;

    /// String-keyed [`navigation_binding`](Self::navigation_binding).
    /// Unknown IDs get a constant `false` binding.
    fn navigation_binding_for(&self, id: &str) -> Binding<bool> {
        match id.parse::<Self::ScreenId>() {
            Ok(id) => self.navigation_binding(id),
            Err(_) => Binding::constant(false),
        }
    }

    fn next_navigation_view_for(&self, id: &str) -> Option<Routed<Self>> {
        id.parse::<Self::ScreenId>()
            .ok()
            .and_then(|id| self.next_navigation_view(id))
    }

    fn presentation_binding_for(&self, id: &str) -> Binding<bool> {
        match id.parse::<Self::ScreenId>() {
            Ok(id) => self.presentation_binding(id),
            Err(_) => Binding::constant(false),
        }
    }

    fn next_presentation_view_for(&self, id: &str) -> Option<Routed<Self>> {
        id.parse::<Self::ScreenId>()
            .ok()
            .and_then(|id| self.next_presentation_view(id))
    }
}
