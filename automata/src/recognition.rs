//! Word recognition: δ, δ*, and the accept test (§4.3).
//!
//! Epsilon is never expanded automatically here — a deliberate choice kept
//! consistent with the rest of the library. A construction that needs a
//! word recognized across one of its own epsilon edges has to bake that
//! closure into real transitions itself; see `closures::subword` and
//! `superword::super_word` for the two places that matters (§9).

use crate::automaton::Automaton;
use crate::containers::{Letter, OrderedSet, StateId};

/// Δ(origin, letter) as a fresh, caller-owned set.
#[must_use]
pub fn delta_one(automaton: &Automaton, origin: StateId, letter: Letter) -> OrderedSet<StateId> {
    automaton.neighbors(origin, letter).clone()
}

/// `⋃_{p∈states} Δ(p, letter)`, as a fresh set.
#[must_use]
pub fn delta(
    automaton: &Automaton,
    states: &OrderedSet<StateId>,
    letter: Letter,
) -> OrderedSet<StateId> {
    let mut reached = OrderedSet::new();
    for &state in states {
        reached.extend_from(&delta_one(automaton, state, letter));
    }
    reached
}

/// The set reached from `states` after consuming every letter of `word`, in
/// order. Returns a copy of `states` if `word` is empty.
#[must_use]
pub fn delta_star(
    automaton: &Automaton,
    states: &OrderedSet<StateId>,
    word: &[u8],
) -> OrderedSet<StateId> {
    let mut current = states.clone();
    for &letter in word {
        current = delta(automaton, &current, letter);
    }
    current
}

/// Whether `word` is recognized by `automaton`: some state reached from the
/// initial states after consuming `word` is accepting.
#[must_use]
pub fn accepts(automaton: &Automaton, word: &[u8]) -> bool {
    let reached = delta_star(automaton, automaton.initials(), word);
    reached.iter().any(|state| automaton.is_final(*state))
}
