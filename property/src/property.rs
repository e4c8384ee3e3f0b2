use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::handle::{Handle, Revoke};
use crate::listener::{IntoObserver, Observer};

/// An observable container holding a single value.
///
/// Observers are notified on every [`Property::set`] with the previous and the
/// new value. Registration and release are safe from any thread, including from
/// inside a running observer.
///
/// Cloning a `Property` shares the same value and the same observers.
pub struct Property<T>(Arc<Inner<T>>);

struct Inner<T> {
    state: Mutex<State<T>>,
}

struct State<T> {
    value: Option<Arc<T>>,
    // append only, released slots become None and are never reused
    observers: Vec<Option<Observer<T>>>,
}

impl<T> Inner<T> {
    // Critical sections never run user code, so a poisoned state is still consistent
    fn lock(&self) -> MutexGuard<'_, State<T>> { self.state.lock().unwrap_or_else(PoisonError::into_inner) }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self { Self(Arc::clone(&self.0)) }
}

impl<T: Send + Sync + 'static> Default for Property<T> {
    fn default() -> Self { Self::empty() }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (value, active) = {
            let state = self.0.lock();
            (state.value.clone(), state.observers.iter().filter(|slot| slot.is_some()).count())
        };
        f.debug_struct("Property").field("value", &value).field("active_observers", &active).finish()
    }
}

impl<T: Send + Sync + 'static> Property<T> {
    /// Creates a property that holds no value yet
    pub fn empty() -> Self { Self(Arc::new(Inner { state: Mutex::new(State { value: None, observers: Vec::new() }) })) }

    /// Creates a property holding `value`. No observer exists yet, so nothing is notified.
    pub fn new(value: T) -> Self {
        let property = Self::empty();
        property.0.lock().value = Some(Arc::new(value));
        property
    }

    /// Replaces the value and notifies every observer that was active before this call.
    pub fn set(&self, value: T) {
        let new = Arc::new(value);
        let old = {
            let mut state = self.0.lock();
            state.value.replace(Arc::clone(&new))
        };

        self.notify(old.as_deref(), &new);
    }

    /// Returns the shared current value without cloning it
    pub fn load(&self) -> Option<Arc<T>> { self.0.lock().value.clone() }

    /// Calls `f` with the current value. `f` runs outside the internal lock.
    pub fn with<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let value = self.load();
        f(value.as_deref())
    }

    /// Registers `callback`, which is called with `(old, new)` on every subsequent [`Property::set`].
    ///
    /// The callback is not invoked now. `old` is `None` when the property was empty.
    pub fn observe<F>(&self, callback: F) -> Handle
    where F: Fn(Option<&T>, &T) + Send + Sync + 'static {
        self.register(Arc::new(callback))
    }

    /// Registers a listener such as a channel sender. See [`IntoObserver`].
    pub fn observe_with<L>(&self, listener: L) -> Handle
    where L: IntoObserver<T> {
        self.register(listener.into_observer())
    }

    /// Calls `invalidate` whenever the value actually changes.
    ///
    /// Replacing an empty property always counts as a change.
    pub fn attach<F>(&self, invalidate: F) -> Handle
    where
        F: Fn() + Send + Sync + 'static,
        T: PartialEq,
    {
        self.observe(move |old, new| {
            if old != Some(new) {
                invalidate();
            }
        })
    }

    /// Number of registered observers that have not been released
    pub fn active_observers(&self) -> usize { self.0.lock().observers.iter().filter(|slot| slot.is_some()).count() }

    fn register(&self, observer: Observer<T>) -> Handle {
        let index = {
            let mut state = self.0.lock();
            state.observers.push(Some(observer));
            state.observers.len() - 1
        };
        tracing::trace!(index, "observer registered");

        let parent = Arc::downgrade(&self.0) as Weak<dyn Revoke>;
        Handle::new(parent, index)
    }

    fn notify(&self, old: Option<&T>, new: &T) {
        // Observers registered from here on belong to the next set
        let length = self.0.lock().observers.len();
        tracing::trace!(observers = length, "notifying observers");

        for index in 0..length {
            // Re-read each slot so releases made by earlier observers are honored
            let observer = self.0.lock().observers[index].clone();
            if let Some(observer) = observer {
                observer(old, new);
            }
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Returns a clone of the current value, or `None` if nothing was set yet
    pub fn get(&self) -> Option<T> { self.load().map(|value| T::clone(&value)) }
}

impl<T: Send + Sync> Revoke for Inner<T> {
    fn revoke(&self, index: usize) {
        let released = {
            let mut state = self.lock();
            state.observers.get_mut(index).and_then(Option::take)
        };
        if released.is_some() {
            tracing::trace!(index, "observer released");
        }
        // the callback's captured state is dropped here, after the lock is gone
        drop(released);
    }
}
