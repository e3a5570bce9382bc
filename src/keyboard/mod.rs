mod binding;
pub mod keycode;

pub use binding::{KeyBinding, KeyBindings};
pub use keycode::{InputEvent, KeyCode, Modifiers};
