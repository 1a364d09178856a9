use crate::align::structs::{Move, MoveGraph, Node};
use crate::alphabet::UTF8_DASH;
use crate::structs::Sequence;

use anyhow::Result;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("no move connects {from:?} to {to:?}")]
pub struct DisconnectedPathError {
    pub from: Node,
    pub to: Node,
}

/// One co-optimal global alignment: two equal-length gapped strings.
/// Stripping '-' from query_string reproduces the query symbols;
/// stripping '-' from target_string reproduces the target symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub query_string: String,
    pub target_string: String,
}

impl Alignment {
    /// Rebuild the alignment that a traceback path describes. The path
    /// runs from (query_length, target_length) down to (0, 0), so the
    /// gapped strings accumulate reversed and are flipped once at the
    /// end.
    ///
    /// A path whose consecutive nodes share no recorded move did not
    /// come from this graph; that fails with DisconnectedPathError
    /// instead of producing a garbage alignment.
    pub fn from_path(
        query: &Sequence,
        target: &Sequence,
        graph: &MoveGraph,
        path: &[Node],
    ) -> Result<Self> {
        let mut query_bytes: Vec<u8> = Vec::with_capacity(path.len());
        let mut target_bytes: Vec<u8> = Vec::with_capacity(path.len());

        for step in path.windows(2) {
            let (from, to) = (step[0], step[1]);

            let mv = match graph.move_between(from, to) {
                Some(mv) => mv,
                None => return Err(DisconnectedPathError { from, to }.into()),
            };

            match mv {
                Move::Up => {
                    query_bytes.push(query.bytes[from.0]);
                    target_bytes.push(UTF8_DASH);
                }
                Move::Left => {
                    query_bytes.push(UTF8_DASH);
                    target_bytes.push(target.bytes[from.1]);
                }
                Move::Diagonal => {
                    query_bytes.push(query.bytes[from.0]);
                    target_bytes.push(target.bytes[from.1]);
                }
            }
        }

        query_bytes.reverse();
        target_bytes.reverse();

        Ok(Alignment {
            query_string: String::from_utf8(query_bytes)?,
            target_string: String::from_utf8(target_bytes)?,
        })
    }

    pub fn len(&self) -> usize {
        self.query_string.len()
    }

    pub fn is_empty(&self) -> bool {
        self.query_string.is_empty()
    }
}

impl Display for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.query_string, self.target_string)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::align::structs::AlignParams;
    use crate::align::{needleman_wunsch, OptimalPaths};

    #[test]
    fn test_from_path_known_alignments() -> Result<()> {
        let query = Sequence::from_utf8(b"MARS");
        let target = Sequence::from_utf8(b"SMART");

        let (_, graph) = needleman_wunsch(&query, &target, &AlignParams::default())?;

        let paths: Vec<Vec<Node>> = OptimalPaths::new(&graph).collect();
        assert_eq!(paths.len(), 2);

        let first = Alignment::from_path(&query, &target, &graph, &paths[0])?;
        assert_eq!(first.query_string, "-MAR-S");
        assert_eq!(first.target_string, "SMART-");

        let second = Alignment::from_path(&query, &target, &graph, &paths[1])?;
        assert_eq!(second.query_string, "-MARS-");
        assert_eq!(second.target_string, "SMAR-T");

        Ok(())
    }

    #[test]
    fn test_from_path_well_formed() -> Result<()> {
        let query = Sequence::from_utf8(b"MARS");
        let target = Sequence::from_utf8(b"SMART");

        let (_, graph) = needleman_wunsch(&query, &target, &AlignParams::default())?;

        for path in OptimalPaths::new(&graph) {
            let alignment = Alignment::from_path(&query, &target, &graph, &path)?;

            assert_eq!(alignment.len(), alignment.target_string.len());

            let stripped_query: Vec<u8> = alignment
                .query_string
                .bytes()
                .filter(|&b| b != UTF8_DASH)
                .collect();
            let stripped_target: Vec<u8> = alignment
                .target_string
                .bytes()
                .filter(|&b| b != UTF8_DASH)
                .collect();

            assert_eq!(stripped_query, &query.bytes[1..]);
            assert_eq!(stripped_target, &target.bytes[1..]);

            let double_gaps = alignment
                .query_string
                .bytes()
                .zip(alignment.target_string.bytes())
                .filter(|&(q, t)| q == UTF8_DASH && t == UTF8_DASH)
                .count();
            assert_eq!(double_gaps, 0);
        }

        Ok(())
    }

    #[test]
    fn test_from_path_disconnected() -> Result<()> {
        let query = Sequence::from_utf8(b"MARS");
        let target = Sequence::from_utf8(b"SMART");

        let (_, graph) = needleman_wunsch(&query, &target, &AlignParams::default())?;

        // (4, 5) and (2, 3) are not adjacent, so no move can connect them
        let foreign_path: Vec<Node> = vec![(4, 5), (2, 3), (0, 0)];

        let error = Alignment::from_path(&query, &target, &graph, &foreign_path)
            .unwrap_err()
            .downcast::<DisconnectedPathError>()?;

        assert_eq!(error.from, (4, 5));
        assert_eq!(error.to, (2, 3));

        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let alignment = Alignment {
            query_string: "-MAR-S".to_string(),
            target_string: "SMART-".to_string(),
        };

        assert_eq!(format!("{alignment}"), "-MAR-S\nSMART-");

        Ok(())
    }
}
