//! Component module.
//!
//! Screens implement [`Component`]; the routing layer mounts and tears them down.

pub mod traits;

pub use traits::{Action, Component, Event};
