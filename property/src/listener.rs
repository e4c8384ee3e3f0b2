use std::sync::Arc;

/// A registered callback receiving the previous (if any) and the new value
pub type Observer<T> = Arc<dyn Fn(Option<&T>, &T) + Send + Sync + 'static>;

/// An owned record of one replacement, delivered to channel observers
#[derive(Debug, Clone, PartialEq)]
pub struct Change<T> {
    pub old: Option<T>,
    pub new: T,
}

impl<T: Clone> Change<T> {
    fn capture(old: Option<&T>, new: &T) -> Self { Self { old: old.cloned(), new: new.clone() } }
}

/// Trait for types that can be registered with [`crate::Property::observe_with`]
pub trait IntoObserver<T> {
    fn into_observer(self) -> Observer<T>;
}

impl<T> IntoObserver<T> for Observer<T> {
    fn into_observer(self) -> Observer<T> { self }
}

impl<T> IntoObserver<T> for std::sync::mpsc::Sender<Change<T>>
where T: Clone + Send + 'static
{
    fn into_observer(self) -> Observer<T> {
        Arc::new(move |old: Option<&T>, new: &T| {
            let _ = self.send(Change::capture(old, new)); // Ignore send errors
        })
    }
}

#[cfg(feature = "tokio")]
impl<T> IntoObserver<T> for tokio::sync::mpsc::UnboundedSender<Change<T>>
where T: Clone + Send + 'static
{
    fn into_observer(self) -> Observer<T> {
        Arc::new(move |old: Option<&T>, new: &T| {
            let _ = self.send(Change::capture(old, new)); // Ignore send errors
        })
    }
}
