use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::automaton::{Automaton, StateId};

// node labels: id, FINAL, FAIL; accepting interior states get a trailing `*`
pub fn to_graph(automaton: &Automaton) -> DiGraph<String, char> {
    let mut graph = DiGraph::with_capacity(automaton.states().len(), automaton.transitions().len());

    // states are allocated densely, so node index == state id
    let nodes: Vec<NodeIndex> = automaton
        .states()
        .iter()
        .map(|state| {
            let label = match state.id {
                StateId::FINAL => "FINAL".to_string(),
                StateId::FAIL => "FAIL".to_string(),
                id if state.accepting => format!("{}*", id),
                id => id.to_string(),
            };
            graph.add_node(label)
        })
        .collect();

    for t in automaton.transitions() {
        graph.add_edge(nodes[t.from.index()], nodes[t.to.index()], t.symbol);
    }

    graph
}

pub fn to_dot(automaton: &Automaton) -> String {
    let graph = to_graph(automaton);
    format!("{}", Dot::new(&graph))
}
