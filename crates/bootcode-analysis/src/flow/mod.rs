//! Control-flow analysis over boot-code programs.
//!
//! The step graph is a directed graph over instruction indices where
//! each instruction `i` has the single edge `(i, i + step_offset)`:
//! the jump argument for `jmp`, one for everything else. Index `len`
//! is the terminal node with no outgoing edges. Nodes are `i64` so a
//! jump target outside the program is an ordinary node rather than a
//! special case.
//!
//! The graph is built transiently for the repair search
//! ([`find_repair_candidate`]) and discarded afterwards.

use std::collections::HashSet;

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;

use bootcode_core::Program;

pub mod repair;

pub use repair::{find_repair_candidate, repair_and_run, RepairCandidate, RepairError};

/// A node in the step graph: an instruction index, the terminal index,
/// or an out-of-range jump target.
pub type StepNode = i64;

/// Builds the forward step graph of `program`.
pub fn step_graph(program: &Program) -> DiGraphMap<StepNode, ()> {
    build(program, false)
}

/// Builds the step graph of `program` with every edge reversed, for
/// backward reachability from the terminal index.
pub fn reversed_step_graph(program: &Program) -> DiGraphMap<StepNode, ()> {
    build(program, true)
}

fn build(program: &Program, reversed: bool) -> DiGraphMap<StepNode, ()> {
    let mut graph = DiGraphMap::new();

    // All instruction indices plus the terminal node, even when no edge
    // touches them.
    for index in 0..=program.len() {
        graph.add_node(index as StepNode);
    }

    for (index, instruction) in program.instructions().iter().enumerate() {
        let src = index as StepNode;
        let dst = src + instruction.step_offset();
        if reversed {
            graph.add_edge(dst, src, ());
        } else {
            graph.add_edge(src, dst, ());
        }
    }

    graph
}

/// Computes the set of nodes reachable from `start` via directed
/// traversal.
///
/// Each node is visited at most once, so the traversal terminates even
/// on graphs with cycles, and the result is never larger than the
/// graph's node count. Returns the empty set if `start` is not a node.
pub fn reachable(graph: &DiGraphMap<StepNode, ()>, start: StepNode) -> HashSet<StepNode> {
    let mut seen = HashSet::new();
    if !graph.contains_node(start) {
        return seen;
    }

    let mut dfs = Dfs::new(graph, start);
    while let Some(node) = dfs.next(graph) {
        seen.insert(node);
    }
    seen
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bootcode_core::{Instruction, Op};

    use super::*;

    const LOOPING: &str = "nop +0\n\
                           acc +1\n\
                           jmp +4\n\
                           acc +3\n\
                           jmp -3\n\
                           acc -99\n\
                           acc +1\n\
                           jmp -4\n\
                           acc +6\n";

    fn any_instruction() -> impl Strategy<Value = Instruction> {
        (
            prop_oneof![Just(Op::Acc), Just(Op::Jmp), Just(Op::Nop)],
            -8i64..8,
        )
            .prop_map(|(op, argument)| Instruction::new(op, argument))
    }

    #[test]
    fn each_instruction_gets_exactly_one_edge() {
        let program = Program::parse("acc +3\njmp -1\nnop +5\n").unwrap();
        let graph = step_graph(&program);

        assert!(graph.contains_edge(0, 1));
        assert!(graph.contains_edge(1, 0));
        assert!(graph.contains_edge(2, 3));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn terminal_node_exists_and_has_no_outgoing_edges() {
        let program = Program::parse("acc +1\n").unwrap();
        let graph = step_graph(&program);
        assert!(graph.contains_node(1));
        assert_eq!(graph.neighbors(1).count(), 0);
    }

    #[test]
    fn reversed_graph_flips_every_edge() {
        let program = Program::parse("jmp +2\nacc +1\nnop +0\n").unwrap();
        let graph = reversed_step_graph(&program);
        assert!(graph.contains_edge(2, 0));
        assert!(graph.contains_edge(2, 1));
        assert!(graph.contains_edge(3, 2));
    }

    #[test]
    fn out_of_range_targets_become_ordinary_nodes() {
        let program = Program::parse("jmp -3\n").unwrap();
        let graph = step_graph(&program);
        assert!(graph.contains_edge(0, -3));
    }

    #[test]
    fn reachability_terminates_on_a_self_loop() {
        let program = Program::parse("jmp +0\n").unwrap();
        let graph = step_graph(&program);
        let seen = reachable(&graph, 0);
        assert_eq!(seen, HashSet::from([0]));
    }

    #[test]
    fn reachability_terminates_on_a_cycle() {
        let program = Program::parse("jmp +1\njmp -1\n").unwrap();
        let graph = step_graph(&program);
        let seen = reachable(&graph, 0);
        assert_eq!(seen, HashSet::from([0, 1]));
    }

    #[test]
    fn forward_reachability_of_the_looping_sample() {
        let program = Program::parse(LOOPING).unwrap();
        let seen = reachable(&step_graph(&program), 0);
        // The loop body; instructions 5 and 8 and the terminal are cut off.
        assert_eq!(seen, HashSet::from([0, 1, 2, 3, 4, 6, 7]));
    }

    #[test]
    fn backward_reachability_from_the_terminal_of_the_looping_sample() {
        let program = Program::parse(LOOPING).unwrap();
        let seen = reachable(&reversed_step_graph(&program), 9);
        // Only the final acc steps onto the terminal; nothing steps onto it.
        assert_eq!(seen, HashSet::from([9, 8]));
    }

    #[test]
    fn unreachable_start_yields_the_empty_set() {
        let program = Program::parse("acc +1\n").unwrap();
        let graph = step_graph(&program);
        assert!(reachable(&graph, 17).is_empty());
    }

    proptest! {
        #[test]
        fn reachable_set_is_bounded_by_the_node_count(
            instructions in proptest::collection::vec(any_instruction(), 0..24)
        ) {
            let program = Program::new(instructions);
            let graph = step_graph(&program);
            let seen = reachable(&graph, 0);
            prop_assert!(seen.len() <= graph.node_count());
        }

        #[test]
        fn every_reachable_node_is_a_graph_node(
            instructions in proptest::collection::vec(any_instruction(), 1..24)
        ) {
            let program = Program::new(instructions);
            let graph = step_graph(&program);
            for node in reachable(&graph, 0) {
                prop_assert!(graph.contains_node(node));
            }
        }
    }
}
