//! Fixed-position leading path slots.
//!
//! Slots occupy the first segments of the path in declared order. An empty
//! slot followed by an occupied one is written as its placeholder, so the
//! decoder can always assign segments to slots by position. Empty trailing
//! slots are omitted.

use tracing::trace;

use crate::config::{Configuration, PositionalSlot};
use crate::core::prefix::recognise;
use crate::core::token::PathToken;
use crate::types::FilterMap;

/// Take the slot entries out of `path_args` and turn them into tokens in
/// slot order, inserting placeholders where needed.
pub fn encode_slots(config: &Configuration, path_args: &mut FilterMap) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    let mut need_placeholder = false;

    for (slot_index, slot) in config.slots().enumerate().rev() {
        match path_args.remove(&slot.key) {
            Some(value) => {
                need_placeholder = true;
                tokens.push(PathToken::Positional {
                    slot_index,
                    values: value.into_vec(),
                });
            }
            None if need_placeholder => tokens.push(PathToken::Placeholder { slot_index }),
            None => {}
        }
    }

    tokens.reverse();
    tokens
}

/// Consume the leading positional segments.
///
/// Segments are read left to right until the first one that is recognised
/// as a prefixed token, or until every slot has been filled. Returns the
/// tokens and the number of segments consumed.
pub fn decode_slots(config: &Configuration, segments: &[&str]) -> (Vec<PathToken>, usize) {
    let used = segments
        .iter()
        .take(config.slot_count())
        .take_while(|segment| recognise(config, segment).is_none())
        .count();

    let tokens = config
        .slots()
        .zip(&segments[..used])
        .enumerate()
        .map(|(slot_index, (slot, segment))| decode_slot(slot, slot_index, segment))
        .collect();

    (tokens, used)
}

fn decode_slot(slot: &PositionalSlot, slot_index: usize, segment: &str) -> PathToken {
    if segment == slot.placeholder {
        trace!(slot = %slot.key, "placeholder segment");
        return PathToken::Placeholder { slot_index };
    }

    let prefix = slot.value_prefix();
    let values = segment
        .split(slot.multi_value_separator.as_str())
        .map(|part| match prefix.as_deref() {
            Some(prefix) => part.strip_prefix(prefix).unwrap_or(part),
            None => part,
        })
        .map(str::to_string)
        .collect();

    PathToken::Positional { slot_index, values }
}
