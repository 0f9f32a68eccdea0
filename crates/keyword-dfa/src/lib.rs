pub mod automaton;
pub mod emit;
pub mod graph;
pub mod module;
pub mod printer;
pub mod word_list;


pub use automaton::{Automaton, AutomatonError, StateId};
pub use printer::{CodePrinter, Printer};

/// Builds the automaton for `words` and returns the emitted matcher fragment.
pub fn generate<I, S>(words: I) -> Result<String, AutomatonError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let automaton = Automaton::from_words(words)?;
    let mut printer = CodePrinter::new();
    emit::emit(&automaton, &mut printer);
    Ok(printer.into_string())
}
