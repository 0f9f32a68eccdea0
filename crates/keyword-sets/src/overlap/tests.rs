use super::*;

fn feed(dfa: &mut OverlapDFA, input: &str) -> Vec<bool> {
    input.chars().map(|c| dfa.consume(c)).collect()
}

#[test]
fn every_word_matches() {
    for word in ["if", "in", "int", "for", "fun"] {
        assert_eq!(match_overlap(word.chars()), Some(word.len()), "word {}", word);
    }
}

#[test]
fn prefixes_and_divergences() {
    for word in ["i", "f", "fo", "inx", "ix", "fur", ""] {
        assert_eq!(match_overlap(word.chars()), None, "word {:?}", word);
    }
    assert_eq!(match_overlap("ints".chars()), Some(3));
}

#[test]
fn if_then_mismatch() {
    let mut dfa = OverlapDFA { state: 0 };
    assert_eq!(feed(&mut dfa, "if"), vec![true, true]);
    assert_eq!(dfa.state, 1);
    assert_eq!(feed(&mut dfa, "xyz"), vec![false, false, false]);
    assert_eq!(dfa.state, 1);

    let mut dfa = OverlapDFA { state: 0 };
    assert_eq!(feed(&mut dfa, "ix"), vec![true, true]);
    assert_eq!(dfa.state, 2);
    assert!(!dfa.consume('f'));
}

#[test]
fn int_reaches_final_through_accepting_state() {
    let mut dfa = OverlapDFA { state: 0 };
    assert_eq!(feed(&mut dfa, "in"), vec![true, true]);
    assert!(dfa.accepting());
    assert_ne!(dfa.state, 1);

    assert!(dfa.consume('t'));
    assert_eq!(dfa.state, 1);
    assert!(dfa.accepting());
    assert!(!dfa.consume('s'));
}

#[test]
fn interior_states_are_not_accepting_by_default() {
    let mut dfa = OverlapDFA { state: 0 };
    assert!(!dfa.accepting());
    assert!(dfa.consume('f'));
    assert!(dfa.consume('u'));
    assert!(!dfa.accepting());
}
