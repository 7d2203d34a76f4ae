//! Shuffle (interleaving) construction (§4.8): the product automaton
//! accepting every interleaving of a word from `L(a1)` with a word from
//! `L(a2)`.

use std::collections::HashMap;

use tracing::debug;

use crate::automaton::Automaton;
use crate::containers::StateId;

/// Builds the product automaton. States are `Q(a1) × Q(a2)`, flattened to
/// fresh ids by a row-major bijection recorded in `index1`/`index2`; no
/// epsilon transitions are introduced.
#[must_use]
pub fn shuffle(a1: &Automaton, a2: &Automaton) -> Automaton {
    let states1: Vec<StateId> = a1.states().iter().copied().collect();
    let states2: Vec<StateId> = a2.states().iter().copied().collect();

    let index1: HashMap<StateId, StateId> = states1
        .iter()
        .enumerate()
        .map(|(i, &s)| (s, i as StateId))
        .collect();
    let index2: HashMap<StateId, StateId> = states2
        .iter()
        .enumerate()
        .map(|(i, &s)| (s, i as StateId))
        .collect();
    let width = states2.len() as StateId;

    let id_of = |p1: StateId, p2: StateId| index1[&p1] * width + index2[&p2];

    let mut out = Automaton::new();
    for &letter in a1.alphabet() {
        out.add_letter(letter);
    }
    for &letter in a2.alphabet() {
        out.add_letter(letter);
    }

    for &p1 in &states1 {
        for &p2 in &states2 {
            out.add_state(id_of(p1, p2));
        }
    }
    for &i1 in a1.initials() {
        for &i2 in a2.initials() {
            out.add_initial(id_of(i1, i2));
        }
    }
    for &f1 in a1.finals() {
        for &f2 in a2.finals() {
            out.add_final(id_of(f1, f2));
        }
    }

    a1.for_each_transition(|p1, letter, q1| {
        for &r in &states2 {
            out.add_transition(id_of(p1, r), letter, id_of(q1, r));
        }
    });
    a2.for_each_transition(|p2, letter, q2| {
        for &r in &states1 {
            out.add_transition(id_of(r, p2), letter, id_of(r, q2));
        }
    });

    debug!(
        states = out.states().len(),
        left_states = states1.len(),
        right_states = states2.len(),
        "shuffle automaton constructed"
    );
    out
}
