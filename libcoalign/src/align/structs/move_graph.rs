/// A grid coordinate (query index, target index) in the score matrix.
pub type Node = (usize, usize);

/// A single traceback step out of a matrix cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Consume one query symbol against a gap: (i, j) -> (i - 1, j)
    Up,
    /// Consume one target symbol against a gap: (i, j) -> (i, j - 1)
    Left,
    /// Consume one symbol of each: (i, j) -> (i - 1, j - 1)
    Diagonal,
}

impl Move {
    /// All moves, in the order they are recorded and enumerated.
    pub const ALL: [Move; 3] = [Move::Up, Move::Left, Move::Diagonal];

    const fn bit(self) -> u8 {
        match self {
            Move::Up => 0b001,
            Move::Left => 0b010,
            Move::Diagonal => 0b100,
        }
    }

    /// The cell this move points back to.
    pub fn predecessor(self, (query_idx, target_idx): Node) -> Node {
        match self {
            Move::Up => (query_idx - 1, target_idx),
            Move::Left => (query_idx, target_idx - 1),
            Move::Diagonal => (query_idx - 1, target_idx - 1),
        }
    }
}

/// The set of moves recorded at one cell. Iteration always yields
/// Up, then Left, then Diagonal, which is what makes enumeration
/// reproducible.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MoveSet(u8);

impl MoveSet {
    pub fn insert(&mut self, mv: Move) {
        self.0 |= mv.bit();
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.0 & mv.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |mv| self.contains(*mv))
    }
}

/// The backpointer graph of a filled score matrix: for every cell, the
/// moves that achieve its score. Unlike a single-path traceback, ties
/// keep every achieving move, so walking the graph from
/// (query_length, target_length) back to (0, 0) visits every co-optimal
/// alignment exactly once.
///
/// The graph is acyclic by construction: every move strictly decreases
/// the sum of its cell's indices.
#[derive(Debug)]
pub struct MoveGraph {
    pub query_length: usize,
    pub target_length: usize,
    /// One MoveSet per cell, flat, in the same row-major layout as the
    /// score matrix.
    moves: Vec<MoveSet>,
}

impl MoveGraph {
    /// Allocate the graph with its boundary chains in place: cells
    /// (i, 0) carry Up, cells (0, j) carry Left, (0, 0) carries
    /// nothing.
    pub fn new(query_length: usize, target_length: usize) -> Self {
        let mut graph = MoveGraph {
            query_length,
            target_length,
            moves: vec![MoveSet::default(); (query_length + 1) * (target_length + 1)],
        };

        for query_idx in 1..=query_length {
            graph.insert((query_idx, 0), Move::Up);
        }

        for target_idx in 1..=target_length {
            graph.insert((0, target_idx), Move::Left);
        }

        graph
    }

    #[inline]
    fn node_idx(&self, (query_idx, target_idx): Node) -> usize {
        debug_assert!(query_idx <= self.query_length);
        debug_assert!(target_idx <= self.target_length);
        query_idx * (self.target_length + 1) + target_idx
    }

    pub(crate) fn insert(&mut self, node: Node, mv: Move) {
        debug_assert!(node.0 > 0 || mv == Move::Left);
        debug_assert!(node.1 > 0 || mv == Move::Up);
        let idx = self.node_idx(node);
        self.moves[idx].insert(mv);
    }

    /// The moves recorded at a node.
    pub fn moves(&self, node: Node) -> MoveSet {
        self.moves[self.node_idx(node)]
    }

    /// The (predecessor, move) pairs of a node, in recorded order.
    pub fn predecessors(&self, node: Node) -> impl Iterator<Item = (Node, Move)> {
        self.moves(node)
            .iter()
            .map(move |mv| (mv.predecessor(node), mv))
    }

    /// The move connecting two adjacent nodes, if one was recorded.
    pub fn move_between(&self, from: Node, to: Node) -> Option<Move> {
        self.predecessors(from)
            .find(|&(node, _)| node == to)
            .map(|(_, mv)| mv)
    }

    pub fn num_edges(&self) -> usize {
        self.moves.iter().map(|set| set.len()).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_move_set_order() -> Result<()> {
        let mut set = MoveSet::default();
        assert!(set.is_empty());

        // insertion order must not matter
        set.insert(Move::Diagonal);
        set.insert(Move::Up);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Move::Up));
        assert!(!set.contains(Move::Left));

        let moves: Vec<Move> = set.iter().collect();
        assert_eq!(moves, vec![Move::Up, Move::Diagonal]);

        set.insert(Move::Left);
        let moves: Vec<Move> = set.iter().collect();
        assert_eq!(moves, vec![Move::Up, Move::Left, Move::Diagonal]);

        Ok(())
    }

    #[test]
    fn test_new_boundary_moves() -> Result<()> {
        let graph = MoveGraph::new(4, 5);

        assert!(graph.moves((0, 0)).is_empty());

        for query_idx in 1..=4 {
            let moves: Vec<Move> = graph.moves((query_idx, 0)).iter().collect();
            assert_eq!(moves, vec![Move::Up]);
        }

        for target_idx in 1..=5 {
            let moves: Vec<Move> = graph.moves((0, target_idx)).iter().collect();
            assert_eq!(moves, vec![Move::Left]);
        }

        for query_idx in 1..=4 {
            for target_idx in 1..=5 {
                assert!(graph.moves((query_idx, target_idx)).is_empty());
            }
        }

        assert_eq!(graph.num_edges(), 9);

        Ok(())
    }

    #[test]
    fn test_predecessors() -> Result<()> {
        let mut graph = MoveGraph::new(2, 2);
        graph.insert((1, 1), Move::Diagonal);
        graph.insert((1, 1), Move::Up);

        let predecessors: Vec<(Node, Move)> = graph.predecessors((1, 1)).collect();
        assert_eq!(
            predecessors,
            vec![((0, 1), Move::Up), ((0, 0), Move::Diagonal)]
        );

        Ok(())
    }

    #[test]
    fn test_move_between() -> Result<()> {
        let mut graph = MoveGraph::new(2, 2);
        graph.insert((1, 1), Move::Diagonal);

        assert_eq!(graph.move_between((1, 1), (0, 0)), Some(Move::Diagonal));
        assert_eq!(graph.move_between((1, 1), (0, 1)), None);
        assert_eq!(graph.move_between((2, 0), (1, 0)), Some(Move::Up));
        assert_eq!(graph.move_between((0, 2), (0, 1)), Some(Move::Left));

        Ok(())
    }
}
