use super::*;

const KEYWORDS: [&str; 16] = [
    "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "super",
    "this", "true", "var", "while",
];

fn feed(dfa: &mut LoxDFA, input: &str) -> Vec<bool> {
    input.chars().map(|c| dfa.consume(c)).collect()
}

#[test]
fn all_keywords() {
    for kw in KEYWORDS {
        assert_eq!(match_lox(kw.chars()), Some(kw.len()), "keyword {}", kw);
    }
}

#[test]
fn starts_with_keyword() {
    assert_eq!(match_lox("function".chars()), Some(3));
    assert_eq!(match_lox("forever".chars()), Some(3));
}

#[test]
fn non_keywords() {
    for word in ["adsfasf", "loOk", "Function", "True", "123", "", "cl", "whil"] {
        assert_eq!(match_lox(word.chars()), None, "word {:?}", word);
    }
}

#[test]
fn consume_reaches_final_on_last_symbol() {
    for kw in KEYWORDS {
        let mut dfa = LoxDFA { state: 0 };
        let n = kw.chars().count();
        for (i, c) in kw.chars().enumerate() {
            assert!(dfa.consume(c), "{} rejected {:?}", kw, c);
            assert_eq!(dfa.state == 1, i + 1 == n, "{} after {:?}", kw, c);
        }
        assert!(!dfa.consume('x'));
        assert!(!dfa.consume('a'));
        assert_eq!(dfa.state, 1);
    }
}

#[test]
fn divergence_fails_for_good() {
    let mut dfa = LoxDFA { state: 0 };
    // "tr" is shared with "true", 'y' diverges
    assert_eq!(feed(&mut dfa, "tryue"), vec![true, true, true, false, false]);
    assert_eq!(dfa.state, 2);
}

#[test]
fn state_functions_default_to_fail() {
    assert_eq!(_state_0('a'), 3);
    assert_eq!(_state_0('z'), 2);
    assert_eq!(_state_0('A'), 2);
}
