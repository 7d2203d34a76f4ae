use byte_automata::automaton::Automaton;
use byte_automata::recognition::{accepts, delta, delta_one, delta_star};

fn scenario_s2() -> Automaton {
    let mut a = Automaton::new();
    a.add_initial(3);
    a.add_final(6);
    a.add_transition(3, b'a', 5);
    a.add_transition(5, b'a', 5);
    a.add_transition(5, b'b', 3);
    a.add_transition(5, b'c', 6);
    a
}

fn scenario_s3() -> Automaton {
    let mut a = Automaton::new();
    a.add_initial(1);
    a.add_final(2);
    a.add_transition(1, b'a', 1);
    a.add_transition(1, b'b', 2);
    a
}

#[test]
fn scenario_s2_acceptance_table() {
    let a = scenario_s2();
    assert!(!accepts(&a, b""));
    assert!(!accepts(&a, b"a"));
    assert!(!accepts(&a, b"ab"));
    assert!(!accepts(&a, b"aab"));
    assert!(accepts(&a, b"aac"));
    assert!(accepts(&a, b"aabaac"));
    assert!(accepts(&a, b"ac"));
    assert!(!accepts(&a, b"acc"));
}

#[test]
fn scenario_s3_acceptance_table() {
    let a = scenario_s3();
    assert!(accepts(&a, b"b"));
    assert!(accepts(&a, b"ab"));
    assert!(accepts(&a, b"aab"));
    assert!(!accepts(&a, b"aba"));
    assert!(!accepts(&a, b""));
}

#[test]
fn delta_one_is_a_fresh_owned_copy() {
    let a = scenario_s2();
    let mut targets = delta_one(&a, 3, b'a');
    targets.insert(999);
    assert!(!a.is_transition(3, b'a', 999));
}

#[test]
fn delta_unions_over_a_set_of_origins() {
    let a = scenario_s2();
    let mut origins = byte_automata::containers::OrderedSet::new();
    origins.insert(3);
    origins.insert(5);
    let reached = delta(&a, &origins, b'a');
    assert!(reached.contains(&5));
}

#[test]
fn delta_star_of_empty_word_returns_a_copy_of_the_input_set() {
    let a = scenario_s2();
    let reached = delta_star(&a, a.initials(), b"");
    assert_eq!(reached, a.initials().clone());
}

#[test]
fn epsilon_is_not_expanded_by_delta_star() {
    // A transition on '#' must be consumed like any other letter, not
    // silently traversed when reading an unrelated word.
    let mut a = Automaton::new();
    a.add_initial(1);
    a.add_final(2);
    a.add_epsilon(1, 2);
    assert!(!accepts(&a, b"a"));
    assert!(accepts(&a, &[b'#']));
}
