//! The automaton entity and its builder/query operations (§4.2).

use std::fmt;

use tracing::trace;

use crate::containers::{Letter, OrderedMap, OrderedSet, StateId, EPSILON};

/// A nondeterministic finite automaton over an 8-bit alphabet, with possibly
/// several initial states and an explicit epsilon symbol (`EPSILON`).
///
/// Every public mutator maintains the invariants of §3: endpoints and
/// letters of a transition are always present in `states`/`alphabet`,
/// destination sets are never empty or duplicated, and two automata never
/// share state identity after `copy`.
#[derive(Clone, Default)]
pub struct Automaton {
    states: OrderedSet<StateId>,
    alphabet: OrderedSet<Letter>,
    transitions: OrderedMap<(StateId, Letter), OrderedSet<StateId>>,
    initials: OrderedSet<StateId>,
    finals: OrderedSet<StateId>,
}

impl Automaton {
    /// Creates an empty automaton: no states, no letters, no transitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `state` to Q. Idempotent.
    pub fn add_state(&mut self, state: StateId) {
        self.states.insert(state);
    }

    /// Adds `letter` to Σ. `EPSILON` is a legal letter. Idempotent.
    pub fn add_letter(&mut self, letter: Letter) {
        self.alphabet.insert(letter);
    }

    /// Adds the transition `(origin, letter, destination)`, implicitly
    /// adding both endpoint states and the letter. Idempotent.
    pub fn add_transition(&mut self, origin: StateId, letter: Letter, destination: StateId) {
        self.add_state(origin);
        self.add_state(destination);
        self.add_letter(letter);
        match self.transitions.get_mut(&(origin, letter)) {
            Some(targets) => {
                targets.insert(destination);
            }
            None => {
                let mut targets = OrderedSet::new();
                targets.insert(destination);
                self.transitions.insert((origin, letter), targets);
            }
        }
        trace!(origin, letter, destination, "added transition");
    }

    /// Adds an epsilon transition `origin -> destination`.
    pub fn add_epsilon(&mut self, origin: StateId, destination: StateId) {
        self.add_transition(origin, EPSILON, destination);
    }

    /// Adds `state` to I, implicitly adding it to Q.
    pub fn add_initial(&mut self, state: StateId) {
        self.add_state(state);
        self.initials.insert(state);
    }

    /// Adds `state` to F, implicitly adding it to Q.
    pub fn add_final(&mut self, state: StateId) {
        self.add_state(state);
        self.finals.insert(state);
    }

    #[must_use]
    pub fn states(&self) -> &OrderedSet<StateId> {
        &self.states
    }

    #[must_use]
    pub fn alphabet(&self) -> &OrderedSet<Letter> {
        &self.alphabet
    }

    #[must_use]
    pub fn initials(&self) -> &OrderedSet<StateId> {
        &self.initials
    }

    #[must_use]
    pub fn finals(&self) -> &OrderedSet<StateId> {
        &self.finals
    }

    #[must_use]
    pub fn is_state(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    #[must_use]
    pub fn is_initial(&self, state: StateId) -> bool {
        self.initials.contains(&state)
    }

    #[must_use]
    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    #[must_use]
    pub fn is_letter(&self, letter: Letter) -> bool {
        self.alphabet.contains(&letter)
    }

    #[must_use]
    pub fn is_transition(&self, origin: StateId, letter: Letter, destination: StateId) -> bool {
        self.transitions
            .get(&(origin, letter))
            .is_some_and(|targets| targets.contains(&destination))
    }

    /// The destination set Δ(origin, letter), or the empty set if the key is
    /// absent. A borrowed view into `self`.
    #[must_use]
    pub fn neighbors(&self, origin: StateId, letter: Letter) -> &OrderedSet<StateId> {
        self.transitions
            .get(&(origin, letter))
            .unwrap_or_else(empty_state_set)
    }

    /// Visits every transition exactly once, in ascending `(origin, letter,
    /// destination)` order.
    pub fn for_each_transition<F: FnMut(StateId, Letter, StateId)>(&self, mut action: F) {
        for (&(origin, letter), targets) in self.transitions.iter() {
            for &destination in targets {
                action(origin, letter, destination);
            }
        }
    }

    /// A deep, independent clone (invariant 6).
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// The greatest state id, or the sentinel `StateId::MIN` if Q is empty.
    #[must_use]
    pub fn max_state(&self) -> StateId {
        self.states.last().copied().unwrap_or(StateId::MIN)
    }

    /// The smallest state id, or the sentinel `StateId::MAX` if Q is empty.
    #[must_use]
    pub fn min_state(&self) -> StateId {
        self.states.first().copied().unwrap_or(StateId::MAX)
    }

    /// A fresh automaton with every state shifted by `offset`; the alphabet
    /// and the relative transition/initial/final structure are preserved.
    #[must_use]
    pub fn translate(&self, offset: StateId) -> Self {
        let mut out = Self::new();
        for &letter in &self.alphabet {
            out.add_letter(letter);
        }
        for &state in &self.states {
            out.add_state(state + offset);
        }
        self.for_each_transition(|origin, letter, destination| {
            out.add_transition(origin + offset, letter, destination + offset);
        });
        for &state in &self.initials {
            out.add_initial(state + offset);
        }
        for &state in &self.finals {
            out.add_final(state + offset);
        }
        out
    }

    /// The chain automaton recognising exactly the single word `word`:
    /// states `1..=len+1`, initial `{1}`, final `{len+1}`, and transitions
    /// `(i, word[i-1], i+1)`. See §9 design note (ii) for why this is not a
    /// literal transliteration of the original `mot_to_automate`.
    #[must_use]
    pub fn word_to_automaton(word: &[u8]) -> Self {
        let mut out = Self::new();
        let last = word.len() as StateId + 1;
        out.add_initial(1);
        out.add_final(last);
        for (index, &letter) in word.iter().enumerate() {
            let origin = index as StateId + 1;
            out.add_transition(origin, letter, origin + 1);
        }
        out
    }

    /// A multi-line, human-readable description with labelled fields
    /// (states, initials, finals, alphabet, transitions), meant for
    /// eyeballing rather than parsing (§6).
    #[must_use]
    pub fn dump(&self) -> String {
        use std::fmt::Write as _;

        let states: Vec<String> = self.states.iter().map(|s| s.to_string()).collect();
        let initials: Vec<String> = self.initials.iter().map(|s| s.to_string()).collect();
        let finals: Vec<String> = self.finals.iter().map(|s| s.to_string()).collect();
        let alphabet: Vec<String> = self.alphabet.iter().map(|&c| letter_label(c)).collect();

        let mut out = String::new();
        let _ = writeln!(out, "states:     {{{}}}", states.join(", "));
        let _ = writeln!(out, "initials:   {{{}}}", initials.join(", "));
        let _ = writeln!(out, "finals:     {{{}}}", finals.join(", "));
        let _ = writeln!(out, "alphabet:   {{{}}}", alphabet.join(", "));
        let _ = writeln!(out, "transitions:");
        self.for_each_transition(|origin, letter, destination| {
            let _ = writeln!(
                out,
                "  {origin} --{}--> {destination}",
                letter_label(letter)
            );
        });
        out
    }
}

/// Renders a letter for the debug dump: `ε` for the reserved epsilon byte,
/// the ASCII character for printable bytes, otherwise `\xNN`.
fn letter_label(letter: Letter) -> String {
    if letter == EPSILON {
        "ε".to_string()
    } else if letter.is_ascii_graphic() {
        (letter as char).to_string()
    } else {
        format!("\\x{letter:02x}")
    }
}

/// Prints the debug dump of `automaton` to standard output (§6).
pub fn print_automaton(automaton: &Automaton) {
    print!("{}", automaton.dump());
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

fn empty_state_set() -> &'static OrderedSet<StateId> {
    use std::sync::OnceLock;
    static EMPTY: OnceLock<OrderedSet<StateId>> = OnceLock::new();
    EMPTY.get_or_init(OrderedSet::new)
}
