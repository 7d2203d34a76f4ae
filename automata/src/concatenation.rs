//! Sequential composition: the automaton of `L(a1)·L(a2)` (§4.6).

use tracing::debug;

use crate::automaton::Automaton;

/// The automaton recognising every word `w1·w2` with `w1 ∈ L(a1)` and
/// `w2 ∈ L(a2)`.
///
/// `a2`'s states are translated by a disjointness-preserving offset before
/// being grafted onto `a1`'s finals: every outgoing transition of a
/// translated `a2` initial is copied onto each `a1` final, in effect
/// splicing `a2`'s start behavior directly into `a1`'s accepting states.
#[must_use]
pub fn concatenation(a1: &Automaton, a2: &Automaton) -> Automaton {
    let offset = a1.max_state() + 1 - a2.min_state();
    let a2 = a2.translate(offset);

    let mut out = a1.copy();
    for &letter in a2.alphabet() {
        out.add_letter(letter);
    }
    for &state in a2.states() {
        out.add_state(state);
    }
    a2.for_each_transition(|origin, letter, destination| {
        out.add_transition(origin, letter, destination);
    });

    let a2_accepts_empty = a2.initials().iter().any(|state| a2.is_final(*state));

    for &final_of_a1 in a1.finals() {
        for &initial_of_a2 in a2.initials() {
            a2.for_each_transition(|origin, letter, destination| {
                if origin == initial_of_a2 {
                    out.add_transition(final_of_a1, letter, destination);
                }
            });
        }
    }

    // Rebuild the final set: translated a2 finals, plus a1's own finals iff
    // a2 accepts the empty word. `out` already inherited a1's finals from
    // `copy()`, so start clean and re-add only what belongs.
    let mut finals = a2.finals().clone();
    if a2_accepts_empty {
        finals.extend_from(a1.finals());
    }
    let rebuilt = rebuild_finals(&out, &finals);

    debug!(
        states = rebuilt.states().len(),
        a2_accepts_empty, "concatenation constructed"
    );
    rebuilt
}

fn rebuild_finals(
    automaton: &Automaton,
    finals: &crate::containers::OrderedSet<crate::containers::StateId>,
) -> Automaton {
    let mut out = Automaton::new();
    for &letter in automaton.alphabet() {
        out.add_letter(letter);
    }
    for &state in automaton.states() {
        out.add_state(state);
    }
    automaton.for_each_transition(|origin, letter, destination| {
        out.add_transition(origin, letter, destination);
    });
    for &state in automaton.initials() {
        out.add_initial(state);
    }
    for &state in finals {
        out.add_final(state);
    }
    out
}
