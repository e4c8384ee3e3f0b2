use crate::{listener::Change, property::Property};

impl<T> Property<T>
where T: Clone + Send + Sync + 'static
{
    /// Waits until the property holds a value matching `predicate` and returns that value.
    ///
    /// Resolves immediately if the current value already matches. Otherwise every
    /// subsequent [`Property::set`] is checked in order.
    pub async fn wait_for<F>(&self, predicate: F) -> T
    where F: Fn(&T) -> bool {
        // Bridge sync notifications to async, registered before checking so no set is missed
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Change<T>>();
        let _guard = self.observe_with(tx).into_guard();

        if let Some(current) = self.get() {
            if predicate(&current) {
                return current;
            }
        }

        while let Some(change) = rx.recv().await {
            if predicate(&change.new) {
                return change.new;
            }
        }

        // The sender lives in our own observer slot, which _guard keeps registered
        unreachable!("observer channel closed while the property is still borrowed");
    }
}
