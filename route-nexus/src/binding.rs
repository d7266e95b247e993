//! Two-way bindings between router state and the views that display it.

use std::fmt;
use std::sync::Arc;

type Getter<T> = Arc<dyn Fn() -> T + Send + Sync>;
type Setter<T> = Arc<dyn Fn(T) + Send + Sync>;

/// A readable and writable value derived from some other state.
///
/// The host reads a binding to decide whether a child view is active, and
/// writes it when the child is dismissed from outside (e.g. a back gesture).
pub struct Binding<T> {
    get: Getter<T>,
    set: Option<Setter<T>>,
}

impl<T> Binding<T> {
    pub fn new<G, S>(get: G, set: S) -> Self
    where
        G: Fn() -> T + Send + Sync + 'static,
        S: Fn(T) + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            set: Some(Arc::new(set)),
        }
    }

    /// A binding that always reads `value` and ignores writes.
    pub fn constant(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(move || value.clone()),
            set: None,
        }
    }

    pub fn get(&self) -> T {
        (self.get)()
    }

    pub fn set(&self, value: T) {
        if let Some(set) = &self.set {
            set(value);
        }
    }

    pub fn is_constant(&self) -> bool {
        self.set.is_none()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: self.set.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &self.get())
            .field("constant", &self.is_constant())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Entity;

    #[test]
    fn test_constant_ignores_writes() {
        let binding = Binding::constant(false);
        assert!(binding.is_constant());
        binding.set(true);
        assert!(!binding.get());
    }

    #[test]
    fn test_binding_reads_and_writes_through() {
        let entity = Entity::new(Some(3));
        let weak = entity.downgrade();
        let write = weak.clone();
        let binding = Binding::new(
            move || weak.read(|v| v.is_some()).and_then(|r| r.ok()).unwrap_or(false),
            move |active: bool| {
                if !active {
                    let _ = write.update(|v| *v = None);
                }
            },
        );

        assert!(binding.get());
        binding.clone().set(false);
        assert!(!binding.get());
        assert_eq!(entity.read(|v| *v).unwrap(), None);
    }
}
