use std::io::Write;
use std::path::Path;

use super::prelude::*;
use crate::fingerprint::{Fingerprinter, RdkitFingerprinter};
use crate::output::BitstringWriter;
use crate::pipeline::{dump_bits, FingerprintRequest};
use crate::supplier::{open_supplier, SupplierOptions};

pub const NAME: &str = "make-bits";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Print the default path fingerprint of every molecule in a file to stdout")
        .arg(Arg::new("input").required(true).num_args(1))
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .ok_or(eyre::eyre!("Failed to extract input path"))?;

    let stdout = std::io::stdout();
    let written = run(input, &RdkitFingerprinter::new(), stdout.lock())?;

    log::debug!("wrote {} fingerprints", written);

    Ok(())
}

pub fn run(
    input: impl AsRef<Path>,
    fingerprinter: &dyn Fingerprinter,
    out: impl Write,
) -> Result<usize, BitsError> {
    let supplier = open_supplier(input, SupplierOptions::default())?;

    dump_bits(
        supplier,
        fingerprinter,
        FingerprintRequest::ToolkitDefaultPath,
        BitstringWriter::new(out),
    )
}
