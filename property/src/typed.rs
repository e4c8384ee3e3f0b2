use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::{handle::Handle, property::Property};

/// An observable boolean, `false` until set
pub type Bool = Typed<bool>;
/// An observable integer, `0` until set
pub type Int = Typed<i64>;
/// An observable float, `0.0` until set
pub type Float64 = Typed<f64>;
/// An observable string, empty until set
pub type Text = Typed<String>;

/// A [`Property`] with a typed default.
///
/// [`Typed::get`] never fails: an empty property reads as `T::default()`.
/// Observers registered through [`Typed::observe`] only fire when the value actually changes.
pub struct Typed<T>(Property<T>);

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T: Clone + Default + PartialEq + Send + Sync + 'static> Default for Typed<T> {
    fn default() -> Self { Self(Property::empty()) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Typed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.debug_tuple("Typed").field(&self.0).finish() }
}

impl<T> Typed<T>
where T: Clone + Default + PartialEq + Send + Sync + 'static
{
    pub fn new(value: T) -> Self { Self(Property::new(value)) }

    /// Current value, or `T::default()` if nothing was set yet
    pub fn get(&self) -> T { self.0.get().unwrap_or_default() }

    /// Stores `value` and notifies observers
    pub fn set(&self, value: T) -> &Self {
        self.0.set(value);
        self
    }

    /// Registers `on_change(old, new)`, called only when the new value differs from the old one.
    /// An empty property is treated as holding `T::default()`.
    pub fn observe<F>(&self, on_change: F) -> Handle
    where F: Fn(&T, &T) + Send + Sync + 'static {
        self.0.observe(move |old, new| {
            let fallback;
            let old = match old {
                Some(old) => old,
                None => {
                    fallback = T::default();
                    &fallback
                }
            };
            if old != new {
                on_change(old, new);
            }
        })
    }

    /// See [`Property::attach`]
    pub fn attach<F>(&self, invalidate: F) -> Handle
    where F: Fn() + Send + Sync + 'static {
        self.0.attach(invalidate)
    }

    /// Mirrors this property into `destination`.
    ///
    /// Writes the current value immediately, then every subsequently set value.
    /// `destination` is never read back.
    pub fn bind<D>(&self, destination: D) -> Handle
    where D: BindTarget<T> {
        let destination = Arc::new(destination);
        let handle = {
            let destination = destination.clone();
            self.0.observe(move |_, new| D::store(&destination, new.clone()))
        };
        D::store(&destination, self.get());
        handle
    }

    /// The underlying untyped property
    pub fn as_property(&self) -> &Property<T> { &self.0 }
}

impl Typed<bool> {
    /// Inverts the current value
    pub fn toggle(&self) -> &Self { self.set(!self.get()) }
}

impl<T> From<Property<T>> for Typed<T> {
    fn from(property: Property<T>) -> Self { Self(property) }
}

/// A mutable location that [`Typed::bind`] writes into
pub trait BindTarget<T>: Send + Sync + 'static {
    fn store(&self, value: T);
}

impl<T: Send + 'static> BindTarget<T> for Arc<Mutex<T>> {
    fn store(&self, value: T) { *self.lock().unwrap_or_else(PoisonError::into_inner) = value; }
}

impl<T: Send + Sync + 'static> BindTarget<T> for Arc<RwLock<T>> {
    fn store(&self, value: T) { *self.write().unwrap_or_else(PoisonError::into_inner) = value; }
}

#[cfg(feature = "tokio")]
impl<T: Send + Sync + 'static> BindTarget<T> for tokio::sync::watch::Sender<T> {
    fn store(&self, value: T) { self.send_replace(value); }
}
