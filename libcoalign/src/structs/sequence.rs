use seq_io::fasta::{Reader, Record};
use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io::Read as IoRead;
use std::path::Path;

use crate::alphabet::UTF8_SPACE;
use anyhow::{Context, Result};

/// A symbol sequence. The engine never interprets symbols; it only
/// compares them for equality, so any UTF8 bytes are fair game.
pub struct Sequence {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the sequence comes from a fasta, this
    /// is the information following the sequence name in the header
    pub details: Option<String>,
    /// The length of the sequence
    pub length: usize,
    /// The symbol bytes. Position 1 of the sequence lives at index 1,
    /// matching matrix row and column indices; index 0 is a padding
    /// byte of 255 that never takes part in comparison
    pub bytes: Vec<u8>,
}

impl Sequence {
    pub fn from_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<Self>> {
        let file = File::open(&path).with_context(|| {
            format!(
                "failed to open fasta file: {}",
                path.as_ref().to_string_lossy()
            )
        })?;

        Self::from_fasta_reader(file)
    }

    pub fn from_fasta_reader<R: IoRead>(source: R) -> Result<Vec<Self>> {
        let mut seqs: Vec<Self> = vec![];

        let mut reader = Reader::new(source);

        while let Some(record) = reader.next() {
            let record = record.with_context(|| "failed to read fasta record")?;
            let head = record.head();

            let error_context: fn() -> &'static str =
                || "failed to create String from fasta header bytes";

            let (name, details) = match head.iter().position(|&b| b == UTF8_SPACE) {
                Some(idx) => (
                    String::from_utf8(head[..idx].to_vec()).with_context(error_context)?,
                    Some(String::from_utf8(head[idx + 1..].to_vec()).with_context(error_context)?),
                ),
                None => (
                    String::from_utf8(head.to_vec()).with_context(error_context)?,
                    None,
                ),
            };

            // We want position 1 of the sequence to be at index 1, so we'll buffer with 255
            let mut bytes: Vec<u8> = vec![255];
            for line in record.seq_lines() {
                bytes.extend_from_slice(line);
            }

            seqs.push(Sequence {
                name,
                details,
                length: bytes.len() - 1,
                bytes,
            });
        }
        Ok(seqs)
    }

    pub fn from_utf8(symbols: &[u8]) -> Self {
        let mut bytes: Vec<u8> = vec![255; symbols.len() + 1];
        bytes[1..].copy_from_slice(symbols);

        Sequence {
            name: "".to_string(),
            details: None,
            length: symbols.len(),
            bytes,
        }
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        if let Some(ref details) = self.details {
            write!(f, " {details}")?
        };

        writeln!(f)?;

        let mut iter = self.bytes[1..].chunks(80).peekable();

        while let Some(byte_chunk) = iter.next() {
            match std::str::from_utf8(byte_chunk) {
                Ok(seq_line) => {
                    write!(f, "{}", seq_line)?;
                    if iter.peek().is_some() {
                        // if we're not on the last
                        // line, add a linebreak
                        writeln!(f)?;
                    }
                }
                Err(_) => return Err(std::fmt::Error),
            }
        }
        Ok(())
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes[1..]))?;
        Ok(())
    }
}
