use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::error::BitsError;

pub mod sdf;
pub mod smiles;

pub use sdf::SdfRecords;
pub use smiles::SmilesRecords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

/// Input format resolved once from the file suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Smiles(Compression),
    Sdf(Compression),
    Unsupported,
}

impl InputFormat {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let name = match path.as_ref().file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return InputFormat::Unsupported,
        };

        if name.ends_with(".smi") {
            InputFormat::Smiles(Compression::None)
        } else if name.ends_with(".smi.gz") {
            InputFormat::Smiles(Compression::Gzip)
        } else if name.ends_with(".sdf") {
            InputFormat::Sdf(Compression::None)
        } else if name.ends_with(".sdf.gz") {
            InputFormat::Sdf(Compression::Gzip)
        } else {
            InputFormat::Unsupported
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MolSource {
    Smiles(String),
    MolBlock(String),
}

/// One molecule as split out of an input file, not yet interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MolRecord {
    pub index: usize,
    pub name: String,
    pub source: MolSource,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierOptions {
    /// Skip the first line of a SMILES file.
    pub title_line: bool,
}

pub type MolSupplier = Box<dyn Iterator<Item = Result<MolRecord, BitsError>>>;

/// Opens `path` and returns a stream of its molecule records.
///
/// Nothing is read when the suffix is not recognised.
pub fn open_supplier(
    path: impl AsRef<Path>,
    options: SupplierOptions,
) -> Result<MolSupplier, BitsError> {
    let path = path.as_ref();

    let supplier: MolSupplier = match InputFormat::from_path(path) {
        InputFormat::Smiles(compression) => {
            let reader = open_reader(path, compression)?;
            log::debug!("reading SMILES from {}", path.display());
            Box::new(SmilesRecords::new(reader, path, options.title_line))
        }
        InputFormat::Sdf(compression) => {
            let reader = open_reader(path, compression)?;
            log::debug!("reading SDF from {}", path.display());
            Box::new(SdfRecords::new(reader, path))
        }
        InputFormat::Unsupported => {
            return Err(BitsError::UnsupportedFormat {
                path: path.to_owned(),
            })
        }
    };

    Ok(supplier)
}

fn open_reader(path: &Path, compression: Compression) -> Result<Box<dyn BufRead>, BitsError> {
    let file = File::open(path).map_err(|source| BitsError::Open {
        path: path.to_owned(),
        source,
    })?;

    let reader: Box<dyn BufRead> = match compression {
        Compression::None => Box::new(BufReader::new(file)),
        Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
    };

    Ok(reader)
}

pub(crate) fn read_error(path: &Path, source: std::io::Error) -> BitsError {
    BitsError::Read {
        path: PathBuf::from(path),
        source,
    }
}
