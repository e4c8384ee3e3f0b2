use std::sync::Weak;

/// Deactivates a single observer slot by index
pub(crate) trait Revoke: Send + Sync {
    fn revoke(&self, index: usize);
}

/// A revocation handle for one registered observer.
///
/// The handle does not own the callback and does not keep the property alive.
/// Releasing tombstones the observer's slot; the index is never handed out again.
#[must_use = "dropping a Handle keeps the observer registered forever; call release() or into_guard()"]
#[derive(Default)]
pub struct Handle {
    parent: Option<Weak<dyn Revoke>>,
    index: usize,
}

impl Handle {
    pub(crate) fn new(parent: Weak<dyn Revoke>, index: usize) -> Self { Self { parent: Some(parent), index } }

    /// Detaches the observer so it is never called again and its captured state can be freed.
    ///
    /// Idempotent. A no-op for a default handle or when the property is already gone.
    pub fn release(&self) {
        if let Some(parent) = self.parent.as_ref().and_then(Weak::upgrade) {
            parent.revoke(self.index);
        }
    }

    /// Position of the observer in its property's registry
    pub fn index(&self) -> usize { self.index }

    /// Converts this handle into a guard that releases the observer when dropped
    pub fn into_guard(self) -> ReleaseGuard { ReleaseGuard(self) }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle").field("index", &self.index).field("attached", &self.parent.is_some()).finish()
    }
}

/// Releases the wrapped [`Handle`] on drop
#[must_use = "the observer is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ReleaseGuard(Handle);

impl ReleaseGuard {
    /// Releases now instead of waiting for drop
    pub fn release(self) { drop(self) }
}

impl Drop for ReleaseGuard {
    fn drop(&mut self) { self.0.release(); }
}
