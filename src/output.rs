use std::fs::File;
use std::io::{BufRead, BufReader, LineWriter, Lines, Write};
use std::path::{Path, PathBuf};

use crate::error::BitsError;
use crate::fingerprint::Fingerprint;

/// Writes `<name> <bitstring>` lines.
pub struct BitstringWriter<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> BitstringWriter<W> {
    pub fn new(out: W) -> Self {
        BitstringWriter { out, written: 0 }
    }

    pub fn write(&mut self, name: &str, fingerprint: &Fingerprint) -> Result<(), BitsError> {
        writeln!(self.out, "{} {}", name, fingerprint.to_bitstring())
            .map_err(|source| BitsError::Write { source })?;
        self.written += 1;

        Ok(())
    }

    /// Copies a record read back from a bitstring file unchanged.
    pub fn write_record(&mut self, record: &BitstringRecord) -> Result<(), BitsError> {
        writeln!(self.out, "{} {}", record.name, record.bits)
            .map_err(|source| BitsError::Write { source })?;
        self.written += 1;

        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn finish(mut self) -> Result<usize, BitsError> {
        self.out
            .flush()
            .map_err(|source| BitsError::Write { source })?;

        Ok(self.written)
    }
}

impl BitstringWriter<LineWriter<File>> {
    /// Each line reaches the file as soon as it is written.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, BitsError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| BitsError::Open {
            path: path.to_owned(),
            source,
        })?;

        Ok(BitstringWriter::new(LineWriter::new(file)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitstringRecord {
    pub name: String,
    pub bits: String,
}

impl BitstringRecord {
    /// Splits on the last space, so names may themselves contain spaces.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, BitsError> {
        let (name, bits) = line.rsplit_once(' ').ok_or_else(|| BitsError::Record {
            line: line_no,
            reason: "missing separator".to_string(),
        })?;

        if bits.is_empty() {
            return Err(BitsError::Record {
                line: line_no,
                reason: "empty bitstring".to_string(),
            });
        }
        if let Some(c) = bits.chars().find(|c| *c != '0' && *c != '1') {
            return Err(BitsError::Record {
                line: line_no,
                reason: format!("unexpected character {:?} in bitstring", c),
            });
        }

        Ok(BitstringRecord {
            name: name.to_string(),
            bits: bits.to_string(),
        })
    }

    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    pub fn count_ones(&self) -> usize {
        self.bits.bytes().filter(|b| *b == b'1').count()
    }

    pub fn to_fingerprint(&self) -> Fingerprint {
        Fingerprint(self.bits.bytes().map(|b| b == b'1').collect())
    }
}

/// Streams the records of a bitstring file. Blank lines are skipped and every
/// record must have as many bits as the first one.
pub struct BitstringReader<R: BufRead> {
    lines: Lines<R>,
    path: PathBuf,
    line_no: usize,
    num_bits: Option<usize>,
}

impl<R: BufRead> BitstringReader<R> {
    pub fn new(reader: R, path: impl AsRef<Path>) -> Self {
        BitstringReader {
            lines: reader.lines(),
            path: path.as_ref().to_owned(),
            line_no: 0,
            num_bits: None,
        }
    }

    /// Width of the records read so far, known once the first one is read.
    pub fn num_bits(&self) -> Option<usize> {
        self.num_bits
    }

    fn next_record(&mut self, line: &str) -> Result<BitstringRecord, BitsError> {
        let record = BitstringRecord::parse(line, self.line_no)?;

        match self.num_bits {
            Some(expected) if expected != record.num_bits() => Err(BitsError::Record {
                line: self.line_no,
                reason: format!(
                    "bitstring has {} bits, expected {}",
                    record.num_bits(),
                    expected
                ),
            }),
            Some(_) => Ok(record),
            None => {
                self.num_bits = Some(record.num_bits());
                Ok(record)
            }
        }
    }
}

impl BitstringReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BitsError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BitsError::Open {
            path: path.to_owned(),
            source,
        })?;

        Ok(BitstringReader::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> Iterator for BitstringReader<R> {
    type Item = Result<BitstringRecord, BitsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;

            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(BitsError::Read {
                        path: self.path.clone(),
                        source,
                    }))
                }
            };
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                continue;
            }

            return Some(self.next_record(line));
        }
    }
}

/// Reads every record of a bitstring file into memory.
pub fn read_bitstrings(
    reader: impl BufRead,
    path: impl AsRef<Path>,
) -> Result<Vec<BitstringRecord>, BitsError> {
    BitstringReader::new(reader, path).collect()
}
