//! Global keydown listeners
//!
//! Listeners are registered on a [`Document`] and live exactly as long as
//! the returned [`KeyListenerGuard`].

use crate::document::Document;
use std::fmt;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Key name reported for the Escape key
pub const ESCAPE: &str = "Escape";

/// A key press with its modifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyChord {
    /// Key name (`"k"`, `"Escape"`, `"Enter"`, ...)
    pub key: String,
    /// Control held
    pub ctrl: bool,
    /// Command / Meta held
    pub meta: bool,
    /// Shift held
    pub shift: bool,
    /// Alt / Option held
    pub alt: bool,
}

impl KeyChord {
    /// Plain key press without modifiers
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// The Escape key
    #[must_use]
    pub fn escape() -> Self {
        Self::key(ESCAPE)
    }

    /// With Control held
    #[inline]
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// With Command / Meta held
    #[inline]
    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// With Shift held
    #[inline]
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl+K or Cmd+K, either case
    #[must_use]
    pub fn is_command_k(&self) -> bool {
        (self.ctrl || self.meta) && self.key.eq_ignore_ascii_case("k")
    }

    /// The Escape key, any modifiers
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.key == ESCAPE
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (held, name) in [
            (self.ctrl, "Ctrl+"),
            (self.meta, "Cmd+"),
            (self.alt, "Alt+"),
            (self.shift, "Shift+"),
        ] {
            if held {
                f.write_str(name)?;
            }
        }
        f.write_str(&self.key)
    }
}

/// Callback invoked for each keydown; returns `true` when it handled the key
pub type KeyCallback = Arc<dyn Fn(&KeyChord) -> bool + Send + Sync>;

/// Registered listener id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub(crate) struct Listener {
    id: ListenerId,
    callback: KeyCallback,
}

/// Live keydown registration; dropping it unregisters the listener
#[must_use = "the listener is removed as soon as the guard is dropped"]
pub struct KeyListenerGuard {
    document: Document,
    id: ListenerId,
}

impl KeyListenerGuard {
    /// Id of the registration
    #[inline]
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Document {
    /// Register a global keydown listener
    pub fn add_keydown_listener<F>(&self, callback: F) -> KeyListenerGuard
    where
        F: Fn(&KeyChord) -> bool + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_listener.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push(Listener {
            id,
            callback: Arc::new(callback),
        });
        tracing::debug!("Keydown listener {:?} registered", id);
        KeyListenerGuard {
            document: self.clone(),
            id,
        }
    }

    /// Deliver a keydown to every live listener
    ///
    /// Returns `true` if any listener handled it. Listeners may register or
    /// unregister others from inside the callback.
    pub fn dispatch_keydown(&self, chord: &KeyChord) -> bool {
        let callbacks: Vec<KeyCallback> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|l| Arc::clone(&l.callback))
            .collect();

        let mut handled = false;
        for callback in callbacks {
            handled |= callback(chord);
        }
        tracing::trace!("Keydown {} handled={}", chord, handled);
        handled
    }

    /// Number of live listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        self.document.inner.listeners.lock().retain(|l| l.id != self.id);
        tracing::debug!("Keydown listener {:?} removed", self.id);
    }
}

impl fmt::Debug for KeyListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyListenerGuard").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn command_k_variants() {
        assert!(KeyChord::key("k").with_ctrl().is_command_k());
        assert!(KeyChord::key("K").with_meta().is_command_k());
        assert!(!KeyChord::key("k").is_command_k());
        assert!(!KeyChord::key("j").with_ctrl().is_command_k());
    }

    #[test]
    fn escape_detection() {
        assert!(KeyChord::escape().is_escape());
        assert!(KeyChord::escape().with_shift().is_escape());
        assert!(!KeyChord::key("Enter").is_escape());
    }

    #[test]
    fn chord_display() {
        assert_eq!(KeyChord::key("k").with_ctrl().to_string(), "Ctrl+k");
        assert_eq!(KeyChord::escape().to_string(), "Escape");
    }

    #[test]
    fn listener_lives_with_guard() {
        let doc = Document::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let guard = doc.add_keydown_listener(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        });
        assert_eq!(doc.listener_count(), 1);
        assert!(doc.dispatch_keydown(&KeyChord::key("a")));

        drop(guard);
        assert_eq!(doc.listener_count(), 0);
        assert!(!doc.dispatch_keydown(&KeyChord::key("a")));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn all_listeners_receive_event() {
        let doc = Document::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let (a, b) = (Arc::clone(&hits), Arc::clone(&hits));
        let _g1 = doc.add_keydown_listener(move |_| {
            a.fetch_add(1, Ordering::SeqCst);
            false
        });
        let _g2 = doc.add_keydown_listener(move |_| {
            b.fetch_add(1, Ordering::SeqCst);
            true
        });

        assert!(doc.dispatch_keydown(&KeyChord::escape()));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn repeated_mounts_do_not_leak() {
        let doc = Document::new();
        for _ in 0..100 {
            let _guard = doc.add_keydown_listener(|_| false);
        }
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn ids_are_unique() {
        let doc = Document::new();
        let a = doc.add_keydown_listener(|_| false);
        let b = doc.add_keydown_listener(|_| false);
        assert_ne!(a.id(), b.id());
    }
}
