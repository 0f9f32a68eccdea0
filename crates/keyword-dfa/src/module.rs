use codegen::{Block, Scope};
use convert_case::{Case, Casing};

use crate::automaton::{Automaton, StateId};
use crate::emit::{emit_dispatch, emit_state_fns};
use crate::printer::{CodePrinter, Printer};

/// Names of the items in a rendered matcher module, derived from a keyword set name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherNames {
    pub struct_name: String,
    pub match_fn: String,
}

impl MatcherNames {
    pub fn from_set_name(name: &str) -> MatcherNames {
        MatcherNames {
            struct_name: format!("{}DFA", name.to_case(Case::Pascal)),
            match_fn: format!("match_{}", name.to_case(Case::Snake)),
        }
    }
}

/// Renders a self-contained module: a `match_<name>` entry point, the matcher
/// struct with its driver loop, and the emitted state machine.
pub fn render_module(automaton: &Automaton, name: &str) -> String {
    let names = MatcherNames::from_set_name(name);
    let accepts_early = automaton.accepting_interior().next().is_some();

    let mut scope = Scope::new();

    let entry = scope.new_fn(&names.match_fn);
    entry
        .vis("pub")
        .generic("I: Iterator<Item = char>")
        .arg("chars", "I")
        .ret("Option<usize>")
        .line(format!("let mut dfa = {} {{ state: {} }};", names.struct_name, StateId::START))
        .line("dfa.check(chars)");

    scope
        .new_struct(&names.struct_name)
        .field("state", "u8");

    // returns the consumed length as soon as FINAL is hit, so callers compare
    // it against the identifier length themselves
    let mut step = Block::new("match self.state");
    step.line(format!("{} => return Some(consumed),", StateId::FINAL));
    step.line(format!("{} => return None,", StateId::FAIL));
    step.line("_ => {}");

    let mut consume = Block::new("if self.consume(c)");
    consume.line("consumed += 1;");

    let mut walk = Block::new("for c in iter");
    walk.push_block(consume);
    walk.push_block(step);

    let check = scope.new_impl(&names.struct_name).new_fn("check");
    check
        .generic("I: Iterator<Item = char>")
        .arg_mut_self()
        .arg("iter", "I")
        .ret("Option<usize>")
        .line("let mut consumed = 0;")
        .push_block(walk);
    if accepts_early {
        check.line("if self.accepting() { Some(consumed) } else { None }");
    } else {
        check.line("None");
    }

    let mut printer = CodePrinter::new();
    printer.line(&format!("// generated by keyword-dfa for keyword set `{}`", name));
    printer.line("");
    for line in scope.to_string().lines() {
        printer.line(line);
    }
    printer.line("");
    printer.line(&format!("impl {} {{", names.struct_name));
    printer.block();
    emit_dispatch(automaton, &mut printer);
    printer.block_end();
    printer.line("}");
    printer.line("");
    emit_state_fns(automaton, &mut printer);

    printer.into_string()
}
