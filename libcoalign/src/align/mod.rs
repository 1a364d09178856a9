pub mod structs;

mod needleman_wunsch;
pub use needleman_wunsch::{needleman_wunsch, InvalidSequenceLengthError};

mod traceback;
pub use traceback::OptimalPaths;

mod aligner;
pub use aligner::GlobalAligner;
