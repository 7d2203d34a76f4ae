//! Accessible and co-accessible restriction (§4.4).

use tracing::trace;

use crate::automaton::Automaton;
use crate::containers::{OrderedSet, StateId};
use crate::mirror::mirror;
use crate::recognition::delta;

/// The set of states reachable from `start` by any sequence of transitions,
/// over every letter of `automaton`'s alphabet (including `#` when present —
/// an artefact of the design that closures below rely on, §4.4/§9).
#[must_use]
pub fn accessible_states(automaton: &Automaton, start: StateId) -> OrderedSet<StateId> {
    let mut reached = OrderedSet::new();
    reached.insert(start);
    let mut frontier = OrderedSet::new();
    frontier.insert(start);

    let mut rounds = 0u32;
    while !frontier.is_empty() {
        let mut next = OrderedSet::new();
        for &letter in automaton.alphabet() {
            next.extend_from(&delta(automaton, &frontier, letter));
        }
        frontier = next.difference(&reached);
        reached.extend_from(&frontier);
        rounds += 1;
    }
    trace!(start, rounds, reached = reached.len(), "accessible_states fixpoint");
    reached
}

/// `automaton` restricted to states reachable from some initial state.
#[must_use]
pub fn accessible_automaton(automaton: &Automaton) -> Automaton {
    let mut reachable = OrderedSet::new();
    for &initial in automaton.initials() {
        reachable.extend_from(&accessible_states(automaton, initial));
    }
    restrict_to(automaton, &reachable)
}

/// `automaton` restricted to states able to reach some final state. Computed
/// by mirroring, restricting to states accessible from the (mirrored)
/// initials — which were the original finals — then mirroring back.
#[must_use]
pub fn co_accessible_automaton(automaton: &Automaton) -> Automaton {
    mirror(&accessible_automaton(&mirror(automaton)))
}

/// Drops every state not in `keep`, along with the transitions and
/// initial/final entries that reference it.
fn restrict_to(automaton: &Automaton, keep: &OrderedSet<StateId>) -> Automaton {
    let mut out = Automaton::new();
    for &letter in automaton.alphabet() {
        out.add_letter(letter);
    }
    for &state in keep {
        out.add_state(state);
    }
    automaton.for_each_transition(|origin, letter, destination| {
        if keep.contains(&origin) && keep.contains(&destination) {
            out.add_transition(origin, letter, destination);
        }
    });
    for &state in automaton.initials() {
        if keep.contains(&state) {
            out.add_initial(state);
        }
    }
    for &state in automaton.finals() {
        if keep.contains(&state) {
            out.add_final(state);
        }
    }
    out
}
