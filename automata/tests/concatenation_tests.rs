use byte_automata::automaton::Automaton;
use byte_automata::concatenation::concatenation;
use byte_automata::recognition::accepts;

fn exactly(word: &[u8]) -> Automaton {
    Automaton::word_to_automaton(word)
}

#[test]
fn concatenation_of_two_exact_words() {
    let a = exactly(b"ab");
    let b = exactly(b"c");
    let c = concatenation(&a, &b);

    assert!(accepts(&c, b"abc"));
    assert!(!accepts(&c, b"ab"));
    assert!(!accepts(&c, b"c"));
    assert!(!accepts(&c, b"abcc"));
}

#[test]
fn concatenation_with_a_right_side_accepting_empty_keeps_left_finals() {
    let a = exactly(b"ab");
    let mut epsilon_lang = Automaton::new();
    epsilon_lang.add_initial(0);
    epsilon_lang.add_final(0);

    let c = concatenation(&a, &epsilon_lang);
    assert!(accepts(&c, b"ab"));
}

#[test]
fn concatenation_without_empty_right_side_drops_left_finals() {
    let a = exactly(b"ab");
    let b = exactly(b"c");
    let c = concatenation(&a, &b);
    assert!(!accepts(&c, b"ab"));
}

#[test]
fn concatenation_associativity_up_to_language_equality() {
    let a = exactly(b"a");
    let b = exactly(b"b");
    let c = exactly(b"c");

    let left = concatenation(&concatenation(&a, &b), &c);
    let right = concatenation(&a, &concatenation(&b, &c));

    let candidates: &[&[u8]] = &[b"", b"a", b"ab", b"abc", b"abcc", b"ac", b"cba"];
    for word in candidates {
        assert_eq!(accepts(&left, word), accepts(&right, word), "word {word:?}");
    }
}
