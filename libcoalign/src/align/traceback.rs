use crate::align::structs::{MoveGraph, Node};

struct Frame {
    node: Node,
    next_move: usize,
}

/// Depth-first enumeration of every traceback path through a move
/// graph, from (query_length, target_length) down to (0, 0). The graph
/// is acyclic, so every path is simple and the walk needs no visited
/// set.
///
/// Paths come out lazily, one per `next` call, in a fixed order: each
/// node's moves are explored Up, then Left, then Diagonal. Callers
/// bound the enumeration with `Iterator::take`; nothing past the
/// requested paths is ever explored.
pub struct OptimalPaths<'a> {
    graph: &'a MoveGraph,
    stack: Vec<Frame>,
}

impl<'a> OptimalPaths<'a> {
    pub fn new(graph: &'a MoveGraph) -> Self {
        OptimalPaths {
            graph,
            stack: vec![Frame {
                node: (graph.query_length, graph.target_length),
                next_move: 0,
            }],
        }
    }
}

impl Iterator for OptimalPaths<'_> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Vec<Node>> {
        while let Some(frame) = self.stack.last_mut() {
            if frame.node == (0, 0) {
                let path: Vec<Node> = self.stack.iter().map(|frame| frame.node).collect();
                self.stack.pop();
                return Some(path);
            }

            let node = frame.node;
            let move_idx = frame.next_move;
            frame.next_move += 1;

            match self.graph.moves(node).iter().nth(move_idx) {
                Some(mv) => self.stack.push(Frame {
                    node: mv.predecessor(node),
                    next_move: 0,
                }),
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}
