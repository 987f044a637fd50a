use std::path::{Path, PathBuf};

use super::prelude::*;
use crate::output::{BitstringReader, BitstringWriter};

pub const NAME: &str = "merge-bits";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Concatenate bitstring files of the same width")
        .arg(
            Arg::new("input-file")
                .required(true)
                .long("input-file")
                .short('I')
                .help("Input filename, give once per file")
                .action(ArgAction::Append)
                .num_args(1),
        )
        .arg(
            Arg::new("output-file")
                .required(true)
                .long("output-file")
                .short('O')
                .help("Output filename")
                .num_args(1),
        )
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let inputs = matches
        .get_many::<String>("input-file")
        .ok_or(eyre::eyre!("Failed to extract input paths"))?
        .map(PathBuf::from)
        .collect::<Vec<_>>();
    let output = matches
        .get_one::<String>("output-file")
        .ok_or(eyre::eyre!("Failed to extract output path"))?;

    let written = run(&inputs, output)?;

    log::info!(
        "Written {} fingerprints from {} files to {}",
        written,
        inputs.len(),
        output
    );

    Ok(())
}

/// Every input is opened before the output is created. Records keep the
/// order of the inputs, and all of them must share the first record's width.
pub fn run(inputs: &[PathBuf], output: impl AsRef<Path>) -> Result<usize, BitsError> {
    let readers = inputs
        .iter()
        .map(BitstringReader::open)
        .collect::<Result<Vec<_>, _>>()?;

    let mut writer = BitstringWriter::create(output)?;
    let mut width: Option<usize> = None;

    for (path, reader) in inputs.iter().zip(readers) {
        log::debug!("Reading fingerprint file {}", path.display());
        let before = writer.written();

        for record in reader {
            let record = record?;
            match width {
                Some(expected) if expected != record.num_bits() => {
                    return Err(BitsError::WidthMismatch {
                        path: path.clone(),
                        expected,
                        found: record.num_bits(),
                    });
                }
                Some(_) => {}
                None => width = Some(record.num_bits()),
            }
            writer.write_record(&record)?;
        }

        log::debug!(
            "Read {} fingerprints from {}",
            writer.written() - before,
            path.display()
        );
    }

    writer.finish()
}
