//! Mirror (word reversal) construction (§4.6).

use tracing::debug;

use crate::automaton::Automaton;

/// The automaton recognising the reversed words of `L(automaton)`: initials
/// and finals swap, and every transition `(p, c, q)` becomes `(q, c, p)`.
#[must_use]
pub fn mirror(automaton: &Automaton) -> Automaton {
    let mut out = Automaton::new();
    for &letter in automaton.alphabet() {
        out.add_letter(letter);
    }
    for &state in automaton.states() {
        out.add_state(state);
    }
    automaton.for_each_transition(|origin, letter, destination| {
        out.add_transition(destination, letter, origin);
    });
    for &state in automaton.initials() {
        out.add_final(state);
    }
    for &state in automaton.finals() {
        out.add_initial(state);
    }
    debug!(states = out.states().len(), "mirror constructed");
    out
}
