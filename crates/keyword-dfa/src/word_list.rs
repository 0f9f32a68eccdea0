use thiserror::Error;

/// Reserved words of Lox, the set the generated matcher was first written for.
pub const LOX_KEYWORDS: [&str; 16] = [
    "and", "class", "else", "false", "for", "fun", "if", "nil", "or", "print", "return", "super",
    "this", "true", "var", "while",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordListError {
    #[error("line {line}: {word:?} is not a single keyword")]
    InvalidWord { line: usize, word: String },
}

#[derive(Debug)]
pub struct KeywordSetDef {
    pub name: String,
    pub words: Vec<String>,
}

impl KeywordSetDef {
    pub fn lox() -> KeywordSetDef {
        KeywordSetDef::new("keyword".to_string(), LOX_KEYWORDS.iter().map(|w| w.to_string()).collect())
    }

    pub fn new(name: String, words: Vec<String>) -> KeywordSetDef {
        KeywordSetDef { name, words }
    }
}

// one keyword per line; blank lines and `#` comments are skipped
pub fn parse_word_list(def_string: &str) -> Result<Vec<String>, WordListError> {
    let mut words = Vec::new();
    for (i, line) in def_string.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        if word.chars().any(char::is_whitespace) {
            return Err(WordListError::InvalidWord {
                line: i + 1,
                word: word.to_string(),
            });
        }
        words.push(word.to_string());
    }

    Ok(words)
}

pub fn parse_keyword_set_def(def_name: String, def_string: &str) -> Result<KeywordSetDef, WordListError> {
    let words = parse_word_list(def_string)?;
    Ok(KeywordSetDef::new(def_name, words))
}
