//! Observable state.
//!
//! `Entity<T>` is a shared value that notifies its subscribers synchronously
//! after every update. `WeakEntity<T>` is the non-owning handle that views
//! hold so they never keep the state alive on their own.

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};
use tokio::sync::watch;

/// Global counter for generating unique entity IDs.
static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// A unique identifier for an entity across the application.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(NonZeroU64);

impl EntityId {
    /// Generate a new unique EntityId.
    ///
    /// # Panics
    /// Panics if more than 2^64-1 entities are created.
    fn next() -> Self {
        let id = NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed);
        // The counter starts at 1 and only increments.
        Self(NonZeroU64::new(id).unwrap_or_else(|| {
            panic!("EntityId overflow: created more than 2^64-1 entities")
        }))
    }
}

impl std::fmt::Debug for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared state wrapper.
pub type SharedState<T> = Arc<RwLock<T>>;

/// Callback run after every update of an entity.
pub type Observer<T> = Box<dyn Fn(&T) + Send + Sync>;

type Observers<T> = Mutex<Vec<Observer<T>>>;

/// Entity handle, inspired by GPUI.
/// Each entity has a unique ID and can be subscribed to for change notifications.
pub struct Entity<T: Send + Sync> {
    id: EntityId,
    inner: SharedState<T>,
    observers: Arc<Observers<T>>,
    tx: watch::Sender<()>,
}

/// A weak handle to an entity.
pub struct WeakEntity<T: Send + Sync> {
    id: EntityId,
    inner: Weak<RwLock<T>>,
    observers: Weak<Observers<T>>,
    tx: watch::Sender<()>,
}

impl<T: Send + Sync> Entity<T> {
    /// Create a new entity with the given initial value.
    pub fn new(value: T) -> Self {
        let (tx, _) = watch::channel(());
        Self {
            id: EntityId::next(),
            inner: Arc::new(RwLock::new(value)),
            observers: Arc::new(Mutex::new(Vec::new())),
            tx,
        }
    }

    /// Get the unique ID of this entity.
    pub fn entity_id(&self) -> EntityId {
        self.id
    }

    /// Update the inner value using a closure and notify subscribers.
    ///
    /// Watch subscribers are marked changed and observers run before this
    /// returns. Observers must not update the same entity.
    pub fn update<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.inner.write().map_err(|_| crate::Error::LockPoisoned)?;
        let res = f(&mut *guard);
        drop(guard);
        self.notify()?;
        Ok(res)
    }

    /// Read the inner value using a closure.
    pub fn read<F, R>(&self, f: F) -> crate::Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.read().map_err(|_| crate::Error::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Downgrade this entity to a weak handle.
    pub fn downgrade(&self) -> WeakEntity<T> {
        WeakEntity {
            id: self.id,
            inner: Arc::downgrade(&self.inner),
            observers: Arc::downgrade(&self.observers),
            tx: watch::Sender::clone(&self.tx),
        }
    }

    /// Subscribe to changes of this entity.
    pub fn subscribe(&self) -> watch::Receiver<()> {
        self.tx.subscribe()
    }

    /// Register a callback that runs synchronously after every update.
    pub fn observe<F>(&self, f: F) -> crate::Result<()>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut observers = self.observers.lock().map_err(|_| crate::Error::LockPoisoned)?;
        observers.push(Box::new(f));
        Ok(())
    }

    fn notify(&self) -> crate::Result<()> {
        self.tx.send_replace(());
        let observers = self.observers.lock().map_err(|_| crate::Error::LockPoisoned)?;
        if observers.is_empty() {
            return Ok(());
        }
        let guard = self.inner.read().map_err(|_| crate::Error::LockPoisoned)?;
        for observer in observers.iter() {
            observer(&*guard);
        }
        Ok(())
    }
}

impl<T: Send + Sync> WeakEntity<T> {
    /// Get the unique ID of this entity.
    pub fn entity_id(&self) -> EntityId {
        self.id
    }

    /// Upgrade this weak handle to a strong handle, if the entity is still alive.
    pub fn upgrade(&self) -> Option<Entity<T>> {
        let inner = self.inner.upgrade()?;
        let observers = self.observers.upgrade()?;
        Some(Entity {
            id: self.id,
            inner,
            observers,
            tx: watch::Sender::clone(&self.tx),
        })
    }

    /// Update the entity if it is still alive.
    pub fn update<F, R>(&self, f: F) -> Option<crate::Result<R>>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.upgrade().map(|entity| entity.update(f))
    }

    /// Read the entity if it is still alive.
    pub fn read<F, R>(&self, f: F) -> Option<crate::Result<R>>
    where
        F: FnOnce(&T) -> R,
    {
        self.upgrade().map(|entity| entity.read(f))
    }

    /// Whether the owning entity has been dropped.
    pub fn is_dropped(&self) -> bool {
        self.inner.strong_count() == 0
    }
}

impl<T: Send + Sync> Clone for Entity<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            observers: Arc::clone(&self.observers),
            tx: watch::Sender::clone(&self.tx),
        }
    }
}

impl<T: Send + Sync> Clone for WeakEntity<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Weak::clone(&self.inner),
            observers: Weak::clone(&self.observers),
            tx: watch::Sender::clone(&self.tx),
        }
    }
}

impl<T: Send + Sync> std::fmt::Debug for Entity<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity").field("id", &self.id).finish_non_exhaustive()
    }
}

impl<T: Send + Sync> std::fmt::Debug for WeakEntity<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakEntity")
            .field("id", &self.id)
            .field("dropped", &self.is_dropped())
            .finish()
    }
}
