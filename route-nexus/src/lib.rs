pub mod application;
pub mod binding;
pub mod component;
pub mod error;
pub mod logging;
pub mod router;
pub mod state;

pub use error::{contract, Error, Result};

// Re-export common types for convenience
pub use application::{Application, Context, EventContext};
pub use binding::Binding;
pub use component::{Action, Component, Event};
pub use logging::LoggingConfig;
pub use router::{NavigationRoot, Routed, RouterObject, RoutingModifier, ScreenKey};
pub use state::{Entity, EntityId, WeakEntity};
