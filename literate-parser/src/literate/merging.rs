//! Segment cleanup
//!
//!     Merges segments without code into a neighbour and removes vacuous ones, so that no
//!     documentation pane is rendered without accompanying code.
//!
//!     Single left-to-right pass seeded with the first segment as `last`:
//!
//!     - a segment with neither comment nor code is dropped
//!     - if `last` or the next segment has no code, the next one is folded into `last`
//!     - otherwise `last` is emitted and the next one becomes `last`
//!
//!     A comment followed by no code up to the next comment is thereby carried forward into the
//!     next segment that has code. Every emitted segment but the first has code.
//!
//!     Long runs of code-free comments collapse into a single segment. That is the intended
//!     behaviour, not a performance concern.

use super::ast::Segment;
use tracing::debug;

/// Merges code-free segments into their neighbours and drops vacuous ones.
pub fn merge_segments<N>(segments: Vec<Segment<N>>) -> Vec<Segment<N>> {
    let input_len = segments.len();
    let mut merged = Vec::new();
    let mut rest = segments.into_iter();

    let Some(mut last) = rest.next() else {
        return merged;
    };

    for next in rest {
        if next.is_vacuous() {
            continue;
        }
        if !last.has_code() || !next.has_code() {
            last.absorb(next);
        } else {
            merged.push(std::mem::replace(&mut last, next));
        }
    }

    // Only reachable when the whole stream was empty.
    if !last.is_vacuous() {
        merged.push(last);
    }

    debug!(before = input_len, after = merged.len(), "merged segments");
    merged
}
