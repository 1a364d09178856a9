use anyhow::Result;
use std::io::Write;

/// The (query_length + 1) x (target_length + 1) global alignment score
/// matrix. Cell (i, j) holds the best score for aligning the first i
/// query symbols against the first j target symbols.
#[derive(Clone, Debug)]
pub struct ScoreMatrix {
    pub query_length: usize,
    pub target_length: usize,
    /// The score cells as a flat vector.
    ///
    /// It's stored in the following pattern:
    ///     [
    ///         s_(0, 0), s_(0, 1), ... s_(0, T),
    ///         s_(1, 0), s_(1, 1), ... s_(1, T),
    ///         ...
    ///         s_(Q, 0), s_(Q, 1), ... s_(Q, T)
    ///     ]
    ///
    /// where:
    ///     Q:        <query_length>
    ///     T:        <target_length>
    ///     s_(i, j): the score at cell (i, j)
    ///
    data: Vec<i64>,
}

impl ScoreMatrix {
    /// Allocate the matrix and fill the gap-only boundary: cell (i, 0)
    /// starts at i * gap_score and cell (0, j) at j * gap_score.
    pub fn new(query_length: usize, target_length: usize, gap_score: i64) -> Self {
        let mut matrix = ScoreMatrix {
            query_length,
            target_length,
            data: vec![0; (query_length + 1) * (target_length + 1)],
        };

        for query_idx in 1..=query_length {
            matrix.set(query_idx, 0, query_idx as i64 * gap_score);
        }

        for target_idx in 1..=target_length {
            matrix.set(0, target_idx, target_idx as i64 * gap_score);
        }

        matrix
    }

    #[inline]
    pub fn get(&self, query_idx: usize, target_idx: usize) -> i64 {
        debug_assert!(query_idx <= self.query_length);
        debug_assert!(target_idx <= self.target_length);
        self.data[query_idx * (self.target_length + 1) + target_idx]
    }

    #[inline]
    pub(crate) fn set(&mut self, query_idx: usize, target_idx: usize, value: i64) {
        debug_assert!(query_idx <= self.query_length);
        debug_assert!(target_idx <= self.target_length);
        self.data[query_idx * (self.target_length + 1) + target_idx] = value;
    }

    /// The score at cell (query_length, target_length): the optimal
    /// global alignment score.
    pub fn final_score(&self) -> i64 {
        self.get(self.query_length, self.target_length)
    }

    pub fn dump(&self, out: &mut impl Write) -> Result<()> {
        let column_width = self
            .data
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1)
            + 1;

        for query_idx in 0..=self.query_length {
            for target_idx in 0..=self.target_length {
                write!(
                    out,
                    "{:>width$}",
                    self.get(query_idx, target_idx),
                    width = column_width
                )?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
