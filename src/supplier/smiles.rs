use std::io::{BufRead, Lines};
use std::path::{Path, PathBuf};

use super::{read_error, MolRecord, MolSource};
use crate::error::BitsError;

/// SMILES records, one per line: `<smiles> [name]`, split on spaces or tabs.
pub struct SmilesRecords<R> {
    lines: Lines<R>,
    path: PathBuf,
    skip_title: bool,
    index: usize,
}

impl<R: BufRead> SmilesRecords<R> {
    pub fn new(reader: R, path: impl AsRef<Path>, title_line: bool) -> Self {
        SmilesRecords {
            lines: reader.lines(),
            path: path.as_ref().to_owned(),
            skip_title: title_line,
            index: 0,
        }
    }
}

impl<R: BufRead> Iterator for SmilesRecords<R> {
    type Item = Result<MolRecord, BitsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(read_error(&self.path, e))),
            };

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if self.skip_title {
                self.skip_title = false;
                continue;
            }

            let mut fields = line.split([' ', '\t']).filter(|f| !f.is_empty());
            let smiles = match fields.next() {
                Some(smiles) => smiles.to_string(),
                None => continue,
            };
            let name = fields
                .next()
                .map(|n| n.to_string())
                .unwrap_or_else(|| self.index.to_string());

            let record = MolRecord {
                index: self.index,
                name,
                source: MolSource::Smiles(smiles),
            };
            self.index += 1;

            return Some(Ok(record));
        }
    }
}
