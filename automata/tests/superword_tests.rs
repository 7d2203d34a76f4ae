use byte_automata::automaton::Automaton;
use byte_automata::containers::OrderedSet;
use byte_automata::recognition::accepts;
use byte_automata::superword::super_word;

#[test]
fn superword_of_a_single_letter_accepts_it_wrapped_in_fillers() {
    let a = Automaton::word_to_automaton(b"a");
    let mut extra = OrderedSet::new();
    extra.insert(b'x');
    extra.insert(b'y');

    let s = super_word(&a, &extra);

    assert!(accepts(&s, b"a"));
    assert!(accepts(&s, b"xay"));
    assert!(accepts(&s, b"xxayy"));
    assert!(!accepts(&s, b"xyxy"));
}

#[test]
fn superword_requires_the_subsequence_in_order() {
    let a = Automaton::word_to_automaton(b"ab");
    let s = super_word(&a, &OrderedSet::new());

    assert!(accepts(&s, b"ab"));
    assert!(accepts(&s, b"aab"));
    assert!(accepts(&s, b"abb"));
    assert!(accepts(&s, b"aabb"));
    assert!(!accepts(&s, b"ba"));
    assert!(!accepts(&s, b"bb"));
}

#[test]
fn superword_of_empty_word_accepts_every_word_over_the_extra_alphabet() {
    let a = Automaton::word_to_automaton(b"");
    let mut extra = OrderedSet::new();
    extra.insert(b'z');

    let s = super_word(&a, &extra);
    assert!(accepts(&s, b""));
    assert!(accepts(&s, b"zzz"));
}
