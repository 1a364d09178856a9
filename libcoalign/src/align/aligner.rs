use crate::align::structs::{AlignParams, Alignment, MoveGraph};
use crate::align::{needleman_wunsch, OptimalPaths};
use crate::structs::Sequence;

use anyhow::Result;

/// Ties the pipeline together: length guard, matrix and graph fill,
/// bounded path enumeration, and alignment reconstruction.
pub struct GlobalAligner {
    pub params: AlignParams,
}

impl GlobalAligner {
    pub fn new(params: AlignParams) -> Self {
        GlobalAligner { params }
    }

    /// Build the score matrix and move graph for the pair, then hand
    /// back the optimal score and the graph. The matrix is released
    /// here; the graph alone carries everything enumeration and
    /// reconstruction need.
    pub fn run(&self, query: &Sequence, target: &Sequence) -> Result<(i64, MoveGraph)> {
        let (matrix, graph) = needleman_wunsch(query, target, &self.params)?;
        Ok((matrix.final_score(), graph))
    }

    /// Stream the co-optimal alignments of a finished run, at most
    /// max_paths of them, in enumeration order.
    pub fn alignments<'a>(
        &self,
        query: &'a Sequence,
        target: &'a Sequence,
        graph: &'a MoveGraph,
    ) -> impl Iterator<Item = Result<Alignment>> + 'a {
        OptimalPaths::new(graph)
            .take(self.params.max_paths)
            .map(move |path| Alignment::from_path(query, target, graph, &path))
    }

    /// The in-memory form of the pipeline: run, then collect every
    /// emitted alignment.
    pub fn run_and_collect(
        &self,
        query: &Sequence,
        target: &Sequence,
    ) -> Result<(i64, Vec<Alignment>)> {
        let (score, graph) = self.run(query, target)?;

        let alignments = self
            .alignments(query, target, &graph)
            .collect::<Result<Vec<Alignment>>>()?;

        Ok((score, alignments))
    }
}
