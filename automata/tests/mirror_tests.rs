use byte_automata::automaton::Automaton;
use byte_automata::mirror::mirror;
use byte_automata::recognition::accepts;

fn scenario_s3() -> Automaton {
    let mut a = Automaton::new();
    a.add_initial(1);
    a.add_final(2);
    a.add_transition(1, b'a', 1);
    a.add_transition(1, b'b', 2);
    a
}

#[test]
fn mirror_swaps_initials_and_finals() {
    let a = scenario_s3();
    let b = mirror(&a);
    assert_eq!(b.initials(), a.finals());
    assert_eq!(b.finals(), a.initials());
}

#[test]
fn mirror_reverses_every_transition() {
    let a = scenario_s3();
    let b = mirror(&a);
    assert!(b.is_transition(2, b'b', 1));
    assert!(b.is_transition(1, b'a', 1));
}

#[test]
fn mirror_reverses_accepted_words() {
    let a = scenario_s3();
    let b = mirror(&a);
    // a accepts "aab"; its reverse "baa" must be accepted by the mirror.
    assert!(accepts(&a, b"aab"));
    assert!(accepts(&b, b"baa"));
    assert!(!accepts(&b, b"aab"));
}

#[test]
fn mirror_involution() {
    let a = scenario_s3();
    let back = mirror(&mirror(&a));
    assert_eq!(back.states(), a.states());
    for word in [&b""[..], b"a", b"b", b"ab", b"aab", b"aba"] {
        assert_eq!(accepts(&back, word), accepts(&a, word));
    }
}
