use std::io::{BufRead, Lines};
use std::path::{Path, PathBuf};

use super::{read_error, MolRecord, MolSource};
use crate::error::BitsError;

const RECORD_END: &str = "$$$$";
const MOL_BLOCK_END: &str = "M  END";

/// SD file records, split on `$$$$`. The first line of each record is its name.
pub struct SdfRecords<R> {
    lines: Lines<R>,
    path: PathBuf,
    index: usize,
    done: bool,
}

impl<R: BufRead> SdfRecords<R> {
    pub fn new(reader: R, path: impl AsRef<Path>) -> Self {
        SdfRecords {
            lines: reader.lines(),
            path: path.as_ref().to_owned(),
            index: 0,
            done: false,
        }
    }

    fn make_record(&mut self, block: Vec<String>) -> MolRecord {
        let name = block
            .first()
            .map(|l| l.trim_end().to_string())
            .unwrap_or_default();

        // Data items after the connection table are not part of the mol block.
        let end = block
            .iter()
            .position(|l| l.trim_end() == MOL_BLOCK_END)
            .map(|pos| pos + 1)
            .unwrap_or(block.len());
        let mut mol_block = block[..end].join("\n");
        mol_block.push('\n');

        let record = MolRecord {
            index: self.index,
            name,
            source: MolSource::MolBlock(mol_block),
        };
        self.index += 1;

        record
    }
}

impl<R: BufRead> Iterator for SdfRecords<R> {
    type Item = Result<MolRecord, BitsError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut block: Vec<String> = Vec::new();
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if line.trim_end() == RECORD_END {
                        return Some(Ok(self.make_record(block)));
                    }
                    block.push(line);
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(read_error(&self.path, e)));
                }
                None => {
                    self.done = true;
                    if block.iter().all(|l| l.trim().is_empty()) {
                        return None;
                    }
                    return Some(Ok(self.make_record(block)));
                }
            }
        }
    }
}
