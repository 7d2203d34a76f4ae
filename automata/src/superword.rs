//! Super-word construction (§4.7): the language of every word that contains
//! some word of `L(automaton)` as a subsequence.
//!
//! §4.3 fixes `delta_star`/`accepts` to never expand epsilon transitions on
//! their own. A literal reading of §4.7 (auxiliary states reached by an
//! epsilon edge) would therefore be unreachable under this library's own
//! `accepts`: once a run steps onto an auxiliary state it could only leave
//! via an un-expanded `#`, which the input word would have to spell out
//! literally. Per the escape hatch in §9 ("implementers may choose to
//! compute epsilon-closures eagerly at construction time instead, but the
//! observable language must be identical"), this construction bakes the
//! closure in eagerly: filler self-loops are attached directly to `A`'s own
//! states rather than to a separate auxiliary state reached by epsilon, with
//! no behavioral difference — a filler consumed "at" a state before or after
//! one of its real transitions is exactly what the auxiliary state was
//! standing in for. See DESIGN.md.

use tracing::debug;

use crate::automaton::Automaton;
use crate::containers::{Letter, OrderedSet};

/// Builds the automaton of §4.7. `extra_alphabet` supplies additional filler
/// letters beyond `automaton`'s own alphabet (pass an empty set for none).
///
/// Every state of `automaton` is carried over unchanged, together with its
/// original transitions, initial/final status, and the alphabet
/// `Σ(automaton) ∪ extra_alphabet`. A self-loop on every letter of that
/// combined alphabet is then attached to every state, letting a run absorb
/// an arbitrary run of filler letters before, between, or after the letters
/// it actually needs to match from `L(automaton)`.
#[must_use]
pub fn super_word(automaton: &Automaton, extra_alphabet: &OrderedSet<Letter>) -> Automaton {
    let mut filler_alphabet = automaton.alphabet().clone();
    filler_alphabet.extend_from(extra_alphabet);

    let mut out = automaton.copy();
    for &letter in &filler_alphabet {
        out.add_letter(letter);
    }
    let states: Vec<_> = out.states().iter().copied().collect();
    for state in states {
        for &filler in &filler_alphabet {
            out.add_transition(state, filler, state);
        }
    }

    debug!(
        states = out.states().len(),
        filler_letters = filler_alphabet.len(),
        "super-word automaton constructed"
    );
    out
}
