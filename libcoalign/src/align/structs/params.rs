/// Scoring and bounding parameters for a run. All five come from the
/// config collaborator already validated; the engine trusts them apart
/// from the sequence length guard.
///
/// Scores are i64 throughout: overflow would take |parameter| times
/// (query length + target length) past 2^63, far outside any input
/// this engine accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignParams {
    /// Score added when the two symbols agree
    pub match_score: i64,
    /// Score added when the two symbols differ
    pub mismatch_score: i64,
    /// Score added for aligning a symbol against a gap
    pub gap_score: i64,
    /// Upper bound on the number of co-optimal alignments emitted
    pub max_paths: usize,
    /// Upper bound on the length of either input sequence
    pub max_seq_length: usize,
}

impl Default for AlignParams {
    fn default() -> Self {
        AlignParams {
            match_score: 5,
            mismatch_score: -5,
            gap_score: -2,
            max_paths: 100,
            max_seq_length: 100,
        }
    }
}
