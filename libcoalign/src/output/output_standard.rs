use crate::align::structs::Alignment;

use anyhow::Result;
use std::io::Write;

/// Serialize an alignment report: the score line, then every emitted
/// alignment as a blank line followed by its two gapped strings.
///
/// Alignments arrive as a stream of results so callers can wire the
/// enumeration straight into the writer without collecting; the count
/// of alignments written is handed back.
pub fn write_standard_output(
    score: i64,
    alignments: impl IntoIterator<Item = Result<Alignment>>,
    out: &mut impl Write,
) -> Result<usize> {
    writeln!(out, "SCORE = {score}")?;

    let mut written = 0;
    for alignment in alignments {
        let alignment = alignment?;
        writeln!(out)?;
        writeln!(out, "{}", alignment.query_string)?;
        writeln!(out, "{}", alignment.target_string)?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::align::structs::AlignParams;
    use crate::align::GlobalAligner;
    use crate::structs::Sequence;

    fn report(params: AlignParams, query: &[u8], target: &[u8]) -> Result<(String, usize)> {
        let query = Sequence::from_utf8(query);
        let target = Sequence::from_utf8(target);

        let aligner = GlobalAligner::new(params);
        let (score, graph) = aligner.run(&query, &target)?;

        let mut buffer: Vec<u8> = vec![];
        let written = write_standard_output(
            score,
            aligner.alignments(&query, &target, &graph),
            &mut buffer,
        )?;

        Ok((String::from_utf8(buffer)?, written))
    }

    #[test]
    fn test_report_all_paths() -> Result<()> {
        let (text, written) = report(AlignParams::default(), b"MARS", b"SMART")?;

        assert_eq!(text, "SCORE = 9\n\n-MAR-S\nSMART-\n\n-MARS-\nSMAR-T\n");
        assert_eq!(written, 2);

        Ok(())
    }

    #[test]
    fn test_report_capped() -> Result<()> {
        let params = AlignParams {
            max_paths: 1,
            ..Default::default()
        };
        let (text, written) = report(params, b"MARS", b"SMART")?;

        assert_eq!(text, "SCORE = 9\n\n-MAR-S\nSMART-\n");
        assert_eq!(written, 1);

        Ok(())
    }

    #[test]
    fn test_report_mild_gap_penalty() -> Result<()> {
        let (text, written) = report(AlignParams::default(), b"SAM", b"SUM")?;

        assert_eq!(text, "SCORE = 6\n\nS-AM\nSU-M\n\nSA-M\nS-UM\n");
        assert_eq!(written, 2);

        Ok(())
    }

    #[test]
    fn test_report_steep_gap_penalty() -> Result<()> {
        let params = AlignParams {
            gap_score: -10,
            ..Default::default()
        };
        let (text, written) = report(params, b"SAM", b"SUM")?;

        assert_eq!(text, "SCORE = 5\n\nSAM\nSUM\n");
        assert_eq!(written, 1);

        Ok(())
    }

    #[test]
    fn test_report_empty_pair() -> Result<()> {
        let (text, written) = report(AlignParams::default(), b"", b"")?;

        assert_eq!(text, "SCORE = 0\n\n\n\n");
        assert_eq!(written, 1);

        Ok(())
    }

    #[test]
    fn test_report_is_deterministic() -> Result<()> {
        let (first, _) = report(AlignParams::default(), b"MARS", b"SMART")?;
        let (second, _) = report(AlignParams::default(), b"MARS", b"SMART")?;

        assert_eq!(first, second);

        Ok(())
    }
}
