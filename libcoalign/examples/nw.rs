use libcoalign::align::structs::AlignParams;
use libcoalign::align::GlobalAligner;
use libcoalign::output::output_standard::write_standard_output;
use libcoalign::structs::Sequence;

pub fn main() -> anyhow::Result<()> {
    let query = Sequence::from_utf8(b"MARS");
    let target = Sequence::from_utf8(b"SMART");

    let aligner = GlobalAligner::new(AlignParams::default());
    let (score, graph) = aligner.run(&query, &target)?;

    let mut stdout = std::io::stdout().lock();
    let written = write_standard_output(
        score,
        aligner.alignments(&query, &target, &graph),
        &mut stdout,
    )?;

    eprintln!("{written} co-optimal alignments");
    Ok(())
}
