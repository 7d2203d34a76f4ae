//! Prefix, suffix, factor and subword closures (§4.5).
//!
//! All four start from a copy of the input and only ever add states or
//! transitions to it — none of them prune.

use tracing::debug;

use crate::automaton::Automaton;
use crate::reachability::accessible_states;

/// `L(prefix(a))` is every prefix of every word of `L(a)`: once a state that
/// can still reach some final is reached, halting there must accept.
#[must_use]
pub fn prefix(automaton: &Automaton) -> Automaton {
    let mut out = automaton.copy();
    for &state in automaton.states() {
        if can_reach_final(automaton, state) {
            out.add_final(state);
        }
    }
    debug!(states = out.states().len(), "prefix closure constructed");
    out
}

/// `L(suffix(a))` is every suffix of every word of `L(a)`: a run may start
/// from any state that can still reach a final one.
#[must_use]
pub fn suffix(automaton: &Automaton) -> Automaton {
    let mut out = automaton.copy();
    for &state in automaton.states() {
        if can_reach_final(automaton, state) {
            out.add_initial(state);
        }
    }
    debug!(states = out.states().len(), "suffix closure constructed");
    out
}

/// `L(factor(a))` is every contiguous middle segment of every word of
/// `L(a)`: a prefix of a suffix, so a run may both start and stop at any
/// state that can still reach a final one.
#[must_use]
pub fn factor(automaton: &Automaton) -> Automaton {
    let mut out = automaton.copy();
    for &state in automaton.states() {
        if can_reach_final(automaton, state) {
            out.add_initial(state);
            out.add_final(state);
        }
    }
    debug!(states = out.states().len(), "factor closure constructed");
    out
}

/// `L(subword(a))` is every subsequence of every word of `L(a)`: a factor
/// with letters allowed to be skipped anywhere, not only at the ends.
///
/// A literal epsilon jump from each state to every state it can otherwise
/// reach, as worded in §4.5, is only usable by a recognizer that expands
/// epsilon — and `accepts`/`delta_star` deliberately never do (§4.3). So the
/// skip is instead baked in eagerly: from `origin`, every real transition
/// reachable from any state `origin` can reach (including `origin` itself)
/// is copied directly onto `origin`. Skipping the letters in between a
/// subsequence's matched letters then falls out of a single ordinary
/// `accepts` walk, with no epsilon involved. See DESIGN.md.
#[must_use]
pub fn subword(automaton: &Automaton) -> Automaton {
    let mut out = automaton.copy();
    for &origin in automaton.states() {
        let reachable = accessible_states(automaton, origin);
        for &via in &reachable {
            if automaton.is_final(via) {
                out.add_initial(origin);
                out.add_final(origin);
            }
            for &letter in automaton.alphabet() {
                for &destination in automaton.neighbors(via, letter) {
                    out.add_transition(origin, letter, destination);
                }
            }
        }
    }
    debug!(states = out.states().len(), "subword closure constructed");
    out
}

fn can_reach_final(automaton: &Automaton, state: crate::containers::StateId) -> bool {
    accessible_states(automaton, state)
        .iter()
        .any(|reached| automaton.is_final(*reached))
}
