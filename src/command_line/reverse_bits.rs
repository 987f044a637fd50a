use std::path::Path;

use super::prelude::*;
use crate::output::{BitstringReader, BitstringWriter};

pub const NAME: &str = "reverse-bits";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Write the records of a bitstring file in reverse order")
        .arg(
            Arg::new("input-file")
                .required(true)
                .long("input-file")
                .short('I')
                .help("Input filename")
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
    let input = matches
        .get_one::<String>("input-file")
        .ok_or(eyre::eyre!("Failed to extract input path"))?;
    let output = matches
        .get_one::<String>("output-file")
        .ok_or(eyre::eyre!("Failed to extract output path"))?;

    let written = run(input, output)?;

    log::info!("Written {} fingerprints to {}", written, output);

    Ok(())
}

/// The whole input is read before the output is created.
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize, BitsError> {
    let records = BitstringReader::open(input)?.collect::<Result<Vec<_>, _>>()?;
    log::debug!("Read {} fingerprints", records.len());

    let mut writer = BitstringWriter::create(output)?;
    for record in records.iter().rev() {
        writer.write_record(record)?;
    }

    writer.finish()
}
