mod alignment;
pub use alignment::{Alignment, DisconnectedPathError};

mod move_graph;
pub use move_graph::{Move, MoveGraph, MoveSet, Node};

mod params;
pub use params::AlignParams;

mod score_matrix;
pub use score_matrix::ScoreMatrix;
