//! Externally specified hints
//!
//! Another program describes the targets as whitespace-separated
//! `label x y` records, where `(x, y)` is the center of the target.
//! Reading stops at the end of input or at the first malformed record;
//! everything parsed before that point is kept.

use std::collections::HashSet;
use std::io::Read;

use crate::error::Result;
use crate::hint::{Hint, MAX_HINTS, MAX_LABEL_LEN};

/// One `label x y` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintSpec {
    pub label: String,
    pub x: i32,
    pub y: i32,
}

/// Parse records from raw input
///
/// A token that is not valid UTF-8 counts as a malformed record.
pub fn parse_hint_specs(input: impl AsRef<[u8]>) -> Vec<HintSpec> {
    let mut specs = Vec::new();
    let mut tokens = input
        .as_ref()
        .split(u8::is_ascii_whitespace)
        .filter(|t| !t.is_empty())
        .map(|t| std::str::from_utf8(t).ok());

    while specs.len() < MAX_HINTS {
        let Some(token) = tokens.next() else {
            break;
        };
        let Some(label) = token else {
            log::warn!("Hint spec label is not valid UTF-8, stopping");
            break;
        };
        if label.chars().count() > MAX_LABEL_LEN {
            log::warn!("Hint spec label too long, stopping: '{}'", label);
            break;
        }

        let coords = (
            tokens.next().flatten().and_then(|t| t.parse::<i32>().ok()),
            tokens.next().flatten().and_then(|t| t.parse::<i32>().ok()),
        );
        let (Some(x), Some(y)) = coords else {
            log::warn!("Malformed hint spec record for '{}', stopping", label);
            break;
        };

        specs.push(HintSpec { label: label.to_string(), x, y });
    }

    specs
}

/// Read all records from a stream
pub fn read_hint_specs<R: Read>(mut reader: R) -> Result<Vec<HintSpec>> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    Ok(parse_hint_specs(&input))
}

/// Turn records into `w x h` hints centered on their coordinates
///
/// A record repeating an earlier label is dropped so labels stay unique.
pub fn hintspec_hints(specs: &[HintSpec], w: i32, h: i32) -> Vec<Hint> {
    let mut seen = HashSet::new();
    let mut hints = Vec::with_capacity(specs.len());

    for spec in specs {
        if !seen.insert(spec.label.as_str()) {
            log::warn!("Duplicate hint spec label '{}' ignored", spec.label);
            continue;
        }
        hints.push(Hint::centered_at(spec.x, spec.y, w, h, spec.label.clone()));
    }
    hints
}
