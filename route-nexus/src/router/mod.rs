//! Router module.
//!
//! Provides the `RouterObject` contract, the `RoutingModifier` that mounts
//! screens from it, and the `NavigationRoot` that frames the whole tree.

pub mod modifier;
pub mod navigation;
pub mod traits;

pub use modifier::RoutingModifier;
pub use navigation::NavigationRoot;
pub use traits::{Routed, RouterObject, ScreenKey};
