use crate::align::structs::{AlignParams, Move, MoveGraph, ScoreMatrix};
use crate::structs::Sequence;

use anyhow::Result;
use thiserror::Error;

#[derive(Error, Debug)]
#[error(
    "invalid sequence length: query is {query_length}, target is {target_length}, max allowed is {max_length}"
)]
pub struct InvalidSequenceLengthError {
    pub query_length: usize,
    pub target_length: usize,
    pub max_length: usize,
}

/// Fill the global alignment score matrix for the two sequences and
/// record every score-achieving move in the move graph. Ties keep all
/// of their moves, so the graph describes every co-optimal traceback
/// rather than one arbitrary winner.
pub fn needleman_wunsch(
    query: &Sequence,
    target: &Sequence,
    params: &AlignParams,
) -> Result<(ScoreMatrix, MoveGraph)> {
    // reject before allocating the quadratic matrix
    if query.length > params.max_seq_length || target.length > params.max_seq_length {
        return Err(InvalidSequenceLengthError {
            query_length: query.length,
            target_length: target.length,
            max_length: params.max_seq_length,
        }
        .into());
    }

    let mut matrix = ScoreMatrix::new(query.length, target.length, params.gap_score);
    let mut graph = MoveGraph::new(query.length, target.length);

    for query_idx in 1..=query.length {
        let query_symbol = query.bytes[query_idx];

        for target_idx in 1..=target.length {
            let target_symbol = target.bytes[target_idx];

            let match_score = if query_symbol == target_symbol {
                params.match_score
            } else {
                params.mismatch_score
            };

            let up_score = matrix.get(query_idx - 1, target_idx) + params.gap_score;
            let left_score = matrix.get(query_idx, target_idx - 1) + params.gap_score;
            let diag_score = matrix.get(query_idx - 1, target_idx - 1) + match_score;

            let best_score = diag_score.max(up_score.max(left_score));
            matrix.set(query_idx, target_idx, best_score);

            if up_score == best_score {
                graph.insert((query_idx, target_idx), Move::Up);
            }
            if left_score == best_score {
                graph.insert((query_idx, target_idx), Move::Left);
            }
            if diag_score == best_score {
                graph.insert((query_idx, target_idx), Move::Diagonal);
            }
        }
    }

    Ok((matrix, graph))
}
