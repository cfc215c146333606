//! refnav Host Document Primitives
//!
//! Process-wide page side effects, each behind a guard that releases on
//! drop:
//!
//! - [`ScrollLockGuard`]: page scrolling is suppressed while any guard lives
//! - [`KeyListenerGuard`]: a global keydown listener is registered while the
//!   guard lives
//!
//! Plus input focus tracking and [`NavigationRequest`].
//!
//! # Example
//!
//! ```rust
//! use refnav_dom::{Document, KeyChord};
//!
//! let doc = Document::new();
//! {
//!     let _lock = doc.lock_scroll();
//!     let _keys = doc.add_keydown_listener(|chord| chord.is_command_k());
//!     assert!(doc.is_scroll_locked());
//!     assert!(doc.dispatch_keydown(&KeyChord::key("k").with_ctrl()));
//! }
//! assert!(!doc.is_scroll_locked());
//! assert_eq!(doc.listener_count(), 0);
//! ```

#![warn(missing_docs)]

mod document;
mod keyboard;
mod request;
mod scroll;

// Re-exports
pub use document::Document;
pub use keyboard::{KeyCallback, KeyChord, KeyListenerGuard, ListenerId, ESCAPE};
pub use request::NavigationRequest;
pub use scroll::ScrollLockGuard;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
