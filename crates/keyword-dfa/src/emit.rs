use crate::automaton::{Automaton, StateId};
use crate::printer::Printer;

/// Writes the whole matcher: `consume`, `accepting` when needed, then one
/// transition function per interior state.
pub fn emit<P: Printer + ?Sized>(automaton: &Automaton, printer: &mut P) {
    emit_dispatch(automaton, printer);
    emit_state_fns(automaton, printer);
}

/// The methods that read `self.state`; these belong inside the matcher's `impl`.
pub fn emit_dispatch<P: Printer + ?Sized>(automaton: &Automaton, printer: &mut P) {
    emit_consume(automaton, printer);
    emit_accepting(automaton, printer);
}

/// Free-standing `_state_<id>` functions, in allocation order.
pub fn emit_state_fns<P: Printer + ?Sized>(automaton: &Automaton, printer: &mut P) {
    for state in automaton.states() {
        if !state.id.is_terminal() {
            emit_state_fn(automaton, state.id, printer);
        }
    }
}

fn emit_consume<P: Printer + ?Sized>(automaton: &Automaton, printer: &mut P) {
    printer.line("fn consume(&mut self, t: char) -> bool {");
    printer.block();
    printer.line("let next_state = match self.state {");
    printer.block();
    for state in automaton.states() {
        if state.id.is_terminal() {
            printer.line(&format!("{} => {{ return false }},", state.id));
        } else {
            printer.line(&format!("{} => {}(t),", state.id, state_fn_name(state.id)));
        }
    }
    printer.line("_ => unreachable!(),");
    printer.block_end();
    printer.line("};");
    printer.line("self.state = next_state;");
    printer.line("true");
    printer.block_end();
    printer.line("}");
}

// only present when a word is a strict prefix of another, otherwise
// reaching FINAL is the sole way to accept
fn emit_accepting<P: Printer + ?Sized>(automaton: &Automaton, printer: &mut P) {
    let interior: Vec<StateId> = automaton.accepting_interior().collect();
    if interior.is_empty() {
        return;
    }

    let pattern = std::iter::once(StateId::FINAL)
        .chain(interior)
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" | ");

    printer.line("fn accepting(&self) -> bool {");
    printer.block();
    printer.line(&format!("matches!(self.state, {})", pattern));
    printer.block_end();
    printer.line("}");
}

fn emit_state_fn<P: Printer + ?Sized>(automaton: &Automaton, state: StateId, printer: &mut P) {
    printer.line("#[inline(always)]");
    printer.line(&format!("fn {}(t: char) -> u8 {{", state_fn_name(state)));
    printer.block();
    printer.line("match t {");
    printer.block();
    for transition in automaton.transitions_from(state) {
        printer.line(&format!(
            "'{}' => {},",
            transition.symbol.escape_default(),
            transition.to
        ));
    }
    printer.line(&format!("_ => {},", StateId::FAIL));
    printer.block_end();
    printer.line("}");
    printer.block_end();
    printer.line("}");
}

pub fn state_fn_name(state: StateId) -> String {
    format!("_state_{}", state)
}
