use std::{collections::HashMap, fmt};

use log::{debug, trace};
use thiserror::Error;

// state ids are rendered as u8 literals in generated matchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u8);

impl StateId {
    pub const START: StateId = StateId(0);
    pub const FINAL: StateId = StateId(1);
    pub const FAIL: StateId = StateId(2);

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// `FINAL` and `FAIL` have no outgoing transitions and no transition function.
    pub fn is_terminal(self) -> bool {
        self == StateId::FINAL || self == StateId::FAIL
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub id: StateId,
    pub accepting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: StateId,
    pub symbol: char,
    pub to: StateId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("automaton would exceed {limit} states")]
    TooManyStates { limit: usize },
}

/// Prefix trie over a keyword set, deterministic by construction.
///
/// States live in allocation order and transitions in insertion order; both
/// orders are reproduced verbatim by the emitter. Acceptance is tracked per
/// state: `FINAL` is the accepting sink that a word's last transition points
/// at, and an interior state is flagged accepting when one word ends there
/// while another continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
    transitions: Vec<Transition>,
    // (from, symbol) -> position in `transitions`
    lookup: HashMap<(StateId, char), usize>,
}

impl Automaton {
    pub const MAX_STATES: usize = u8::MAX as usize + 1;

    pub fn new() -> Automaton {
        let states = vec![
            State { id: StateId::START, accepting: false },
            State { id: StateId::FINAL, accepting: true },
            State { id: StateId::FAIL, accepting: false },
        ];

        Automaton {
            states,
            transitions: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Result<Automaton, AutomatonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Automaton::new();
        for word in words {
            automaton.insert(word.as_ref())?;
        }
        Ok(automaton)
    }

    /// Folds `word` into the trie, reusing the longest already-inserted prefix.
    ///
    /// Fails without touching the automaton if `word` is empty or if the new
    /// states would not fit in a `u8`.
    pub fn insert(&mut self, word: &str) -> Result<(), AutomatonError> {
        let symbols: Vec<char> = word.chars().collect();
        if symbols.is_empty() {
            return Err(AutomatonError::InvalidInput("cannot insert an empty word"));
        }

        if self.states.len() + self.states_needed(&symbols) > Self::MAX_STATES {
            return Err(AutomatonError::TooManyStates { limit: Self::MAX_STATES });
        }

        debug!("inserting {:?}", word);

        let mut state = StateId::START;
        for (i, &symbol) in symbols.iter().enumerate() {
            let last = i + 1 == symbols.len();

            state = match self.lookup.get(&(state, symbol)).copied() {
                Some(pos) => {
                    let to = self.transitions[pos].to;
                    if to == StateId::FINAL && !last {
                        // an earlier word ends here; give it a state of its own
                        // so this word can continue without touching FINAL
                        let split = self.add_state(true);
                        self.transitions[pos].to = split;
                        debug!("{:?} extends an inserted word, state {} now accepts", word, split);
                        split
                    } else {
                        if last && to != StateId::FINAL {
                            self.states[to.index()].accepting = true;
                            debug!("{:?} is a prefix of an inserted word, state {} now accepts", word, to);
                        }
                        to
                    }
                }
                None => {
                    let to = if last { StateId::FINAL } else { self.add_state(false) };
                    self.add_transition(state, symbol, to);
                    to
                }
            };
        }

        Ok(())
    }

    // dry run of `insert` that only counts allocations
    fn states_needed(&self, symbols: &[char]) -> usize {
        let mut needed = 0;
        let mut state = Some(StateId::START);
        for (i, symbol) in symbols.iter().enumerate() {
            let last = i + 1 == symbols.len();
            state = match state.and_then(|s| self.next_state(s, *symbol)) {
                Some(StateId::FINAL) if !last => {
                    needed += 1;
                    None
                }
                Some(to) => Some(to),
                None => {
                    if !last {
                        needed += 1;
                    }
                    None
                }
            };
        }
        needed
    }

    fn add_state(&mut self, accepting: bool) -> StateId {
        // capacity is checked up front in `insert`
        let id = StateId(self.states.len() as u8);
        self.states.push(State { id, accepting });
        id
    }

    fn add_transition(&mut self, from: StateId, symbol: char, to: StateId) {
        trace!("{} --{:?}--> {}", from, symbol, to);
        self.lookup.insert((from, symbol), self.transitions.len());
        self.transitions.push(Transition { from, symbol, to });
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transitions_from(&self, state: StateId) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    pub fn next_state(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.lookup
            .get(&(state, symbol))
            .map(|&pos| self.transitions[pos].to)
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.states
            .get(state.index())
            .is_some_and(|s| s.accepting)
    }

    /// Number of states allocated by insertion, i.e. excluding start, `FINAL` and `FAIL`.
    pub fn interior_count(&self) -> usize {
        self.states.len() - 3
    }

    /// Interior states where some word ends while another continues.
    pub fn accepting_interior(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states
            .iter()
            .filter(|s| s.accepting && !s.id.is_terminal())
            .map(|s| s.id)
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Automaton::new()
    }
}
