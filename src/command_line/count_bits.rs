use std::io::Write;
use std::path::Path;

use super::prelude::*;
use crate::output::BitstringReader;

pub const NAME: &str = "count-bits";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Print the number of set bits of every record in a bitstring file")
        .arg(Arg::new("bits").required(true).num_args(1))
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let path = matches
        .get_one::<String>("bits")
        .ok_or(eyre::eyre!("Failed to extract bitstring file path"))?;

    let stdout = std::io::stdout();
    let counted = run(path, stdout.lock())?;

    log::debug!("counted bits of {} records", counted);

    Ok(())
}

/// Prints `<name> <set bits>` as each record is read.
pub fn run(path: impl AsRef<Path>, mut out: impl Write) -> Result<usize, BitsError> {
    let mut counted = 0;

    for record in BitstringReader::open(path)? {
        let record = record?;
        writeln!(out, "{} {}", record.name, record.count_ones())
            .map_err(|source| BitsError::Write { source })?;
        counted += 1;
    }

    out.flush().map_err(|source| BitsError::Write { source })?;

    Ok(counted)
}
