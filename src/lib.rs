//! Keyboard-driven hint overlay
//!
//! Screen regions get short labels; typing a label prefix narrows them down
//! until one is left, and the pointer is warped to its center. Display,
//! keyboard and pointer access go through the [`platform::Platform`] trait.

pub mod config;
pub mod error;
pub mod hint;
pub mod keyboard;
pub mod logging;
pub mod modes;
pub mod platform;
pub mod selection;
pub mod sift;
pub mod sources;

pub use error::{HintError, PlatformError, Result};
pub use hint::{Hint, HintSet, ScreenId, MAX_HINTS};
pub use modes::{run_mode, HintMode};
pub use platform::Platform;
pub use selection::{last_selected_label, Resolved, Selection, SelectionSession};
