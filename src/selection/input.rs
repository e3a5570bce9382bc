//! Key event classification while hints are shown

use crate::config::HintKeys;
use crate::keyboard::{InputEvent, KeyBinding};

/// What a key event asks the selection loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Cancel selection
    Exit,
    /// Clear the typed prefix
    UndoAll,
    /// Remove the last typed character
    Undo,
    /// Type one label character
    Append(char),
    /// Not relevant to selection (release events, named keys, chords)
    Ignore,
}

/// Classify an event against the control bindings
///
/// `name` is the platform's name for the event; anything other than exactly
/// one character is ignored.
pub fn classify(event: &InputEvent, keys: &HintKeys, name: Option<&str>) -> KeyAction {
    if !event.pressed {
        return KeyAction::Ignore;
    }

    if keys.exit.matches(event) {
        return KeyAction::Exit;
    }
    if keys.undo_all.matches(event) {
        return KeyAction::UndoAll;
    }
    if keys.undo.matches(event) {
        return KeyAction::Undo;
    }

    let Some(name) = name else {
        return KeyAction::Ignore;
    };
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => KeyAction::Append(c),
        _ => KeyAction::Ignore,
    }
}

/// Bindings the platform should let through while the keyboard is grabbed
pub fn allowlist(keys: &HintKeys) -> Vec<KeyBinding> {
    [&keys.exit, &keys.undo_all, &keys.undo]
        .iter()
        .flat_map(|b| b.as_slice().iter().copied())
        .collect()
}
