use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::prelude::*;
use crate::output::{BitstringReader, BitstringWriter};

pub const NAME: &str = "subset-bits";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Copy the records of a bitstring file whose names are listed in another file")
        .arg(
            Arg::new("input-file")
                .required(true)
                .long("input-file")
                .short('I')
                .help("Input filename")
                .num_args(1),
        )
        .arg(
            Arg::new("subset-names-file")
                .required(true)
                .long("subset-names-file")
                .short('S')
                .help("Name of file containing names for subset.")
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
    let names = matches
        .get_one::<String>("subset-names-file")
        .ok_or(eyre::eyre!("Failed to extract subset names path"))?;
    let output = matches
        .get_one::<String>("output-file")
        .ok_or(eyre::eyre!("Failed to extract output path"))?;

    let written = run(input, names, output)?;

    log::info!("Written {} fingerprints to {}", written, output);

    Ok(())
}

/// Names are whitespace separated, so several may share a line.
pub fn read_subset_names(path: impl AsRef<Path>) -> Result<HashSet<String>, BitsError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| BitsError::Open {
        path: path.to_owned(),
        source,
    })?;

    Ok(contents.split_whitespace().map(str::to_string).collect())
}

/// Records are written in input order, whatever the order of the names.
pub fn run(
    input: impl AsRef<Path>,
    names: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<usize, BitsError> {
    let reader = BitstringReader::open(input)?;
    let names = read_subset_names(names)?;
    log::debug!("Read {} subset names", names.len());

    let mut writer = BitstringWriter::create(output)?;
    for record in reader {
        let record = record?;
        if names.contains(&record.name) {
            writer.write_record(&record)?;
        }
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_subset_keeps_input_order() -> eyre::Result<()> {
        let dir = TempDir::new("fpbits")?;
        let input = dir.path().join("bits.txt");
        let names = dir.path().join("names.txt");
        let output = dir.path().join("subset.txt");
        fs::write(&input, "benzene 0110\nethanol 0001\naspirin 1111\n")?;
        fs::write(&names, "aspirin  benzene\n\ncaffeine\n")?;

        let written = run(&input, &names, &output)?;

        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(&output)?, "benzene 0110\naspirin 1111\n");

        Ok(())
    }

    #[test]
    fn test_missing_names_file_writes_nothing() -> eyre::Result<()> {
        let dir = TempDir::new("fpbits")?;
        let input = dir.path().join("bits.txt");
        let output = dir.path().join("subset.txt");
        fs::write(&input, "benzene 0110\n")?;

        let res = run(&input, dir.path().join("absent.txt"), &output);

        assert!(matches!(res, Err(BitsError::Open { .. })));
        assert!(!output.exists());

        Ok(())
    }
}
