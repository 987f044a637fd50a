use std::path::PathBuf;

use super::prelude::*;
use crate::fingerprint::{
    FingerprintParams, FingerprintType, Fingerprinter, RdkitFingerprinter, DEFAULT_NUM_BITS,
};
use crate::output::BitstringWriter;
use crate::pipeline::{dump_bits, FingerprintRequest};
use crate::supplier::{open_supplier, SupplierOptions};

pub const NAME: &str = "make-rdkit-bits";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Generate RDKit fingerprints in ASCII format")
        .arg(
            Arg::new("input-mol")
                .required(true)
                .long("input-mol")
                .short('I')
                .help("Input molecule file.")
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
        .arg(
            Arg::new("fingerprint-type")
                .required(false)
                .long("fingerprint-type")
                .short('F')
                .value_parser(FingerprintType::NAMES)
                .default_value("Morgan")
                .help("Fingerprint type (Path or Circular/Morgan). Default=Morgan")
                .num_args(1),
        )
        .arg(
            Arg::new("num-bits")
                .required(false)
                .long("num-bits")
                .short('N')
                .help("Number of bits in fingerprint. Default=4096")
                .num_args(1),
        )
        .arg(
            Arg::new("size")
                .required(false)
                .long("size")
                .short('S')
                .help(
                    "Max. path length for Path fingerprints (default=7), \
                     max. radius for Morgan fingerprints (default=3)",
                )
                .num_args(1),
        )
        .arg(
            Arg::new("title-line")
                .required(false)
                .long("title-line")
                .help("Skip the first line of a SMILES file")
                .action(ArgAction::SetTrue),
        )
}

#[derive(Debug, Clone)]
pub struct MakeRdkitBitsArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub params: FingerprintParams,
    pub title_line: bool,
}

impl MakeRdkitBitsArgs {
    pub fn from_matches(matches: &ArgMatches) -> eyre::Result<Self> {
        let input = matches
            .get_one::<String>("input-mol")
            .ok_or(eyre::eyre!("Failed to extract input path"))?;
        let output = matches
            .get_one::<String>("output-file")
            .ok_or(eyre::eyre!("Failed to extract output path"))?;
        let fp_type = matches
            .get_one::<String>("fingerprint-type")
            .ok_or(eyre::eyre!("Failed to extract fingerprint type"))?
            .parse::<FingerprintType>()?;
        let num_bits = matches.get_one::<String>("num-bits");
        let size = matches.get_one::<String>("size");

        let num_bits = if let Some(num_bits) = num_bits {
            num_bits.parse::<usize>()?
        } else {
            DEFAULT_NUM_BITS
        };

        let size = if let Some(size) = size {
            Some(size.parse::<u32>()?)
        } else {
            None
        };

        Ok(MakeRdkitBitsArgs {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            params: FingerprintParams::resolve(fp_type, num_bits, size)?,
            title_line: matches.get_flag("title-line"),
        })
    }
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let args = MakeRdkitBitsArgs::from_matches(matches)?;

    let written = run(&args, &RdkitFingerprinter::new())?;

    log::info!(
        "A total of {} {} fingerprints were written to {}",
        written,
        args.params.fp_type,
        args.output.display()
    );

    Ok(())
}

/// The parameters are checked and the input is opened before the output file
/// is created, so a rejected run leaves no output behind.
pub fn run(
    args: &MakeRdkitBitsArgs,
    fingerprinter: &dyn Fingerprinter,
) -> Result<usize, BitsError> {
    log::info!("Read from {}", args.input.display());
    log::info!("Write to {}", args.output.display());

    fingerprinter.check(&args.params)?;

    let supplier = open_supplier(
        &args.input,
        SupplierOptions {
            title_line: args.title_line,
        },
    )?;

    log::debug!(
        "fingerprint type={}, num_bits={}, size={}",
        args.params.fp_type,
        args.params.num_bits,
        args.params.size
    );

    let writer = BitstringWriter::create(&args.output)?;

    dump_bits(
        supplier,
        fingerprinter,
        FingerprintRequest::Params(args.params),
        writer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> eyre::Result<MakeRdkitBitsArgs> {
        let matches = command().try_get_matches_from(argv)?;
        MakeRdkitBitsArgs::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[NAME, "-I", "mols.smi", "-O", "bits.txt"]).unwrap();

        assert_eq!(args.input, PathBuf::from("mols.smi"));
        assert_eq!(args.output, PathBuf::from("bits.txt"));
        assert_eq!(args.params.fp_type, FingerprintType::Morgan);
        assert_eq!(args.params.num_bits, 4096);
        assert_eq!(args.params.size, 3);
        assert!(!args.title_line);
    }

    #[test]
    fn test_path_default_size() {
        let args = parse(&[NAME, "-I", "mols.sdf", "-O", "bits.txt", "-F", "Path"]).unwrap();

        assert_eq!(args.params.fp_type, FingerprintType::Path);
        assert_eq!(args.params.size, 7);
    }

    #[test]
    fn test_explicit_values() {
        let args = parse(&[
            NAME,
            "--input-mol",
            "benzene.smi",
            "--output-file",
            "out.txt",
            "--fingerprint-type",
            "Path",
            "--num-bits",
            "2048",
            "--size",
            "3",
            "--title-line",
        ])
        .unwrap();

        assert_eq!(args.params.num_bits, 2048);
        assert_eq!(args.params.size, 3);
        assert!(args.title_line);
    }

    #[test]
    fn test_rejected_arguments() {
        assert!(parse(&[NAME, "-I", "mols.smi"]).is_err());
        assert!(parse(&[NAME, "-I", "mols.smi", "-O", "o", "-F", "Circular"]).is_err());
        assert!(parse(&[NAME, "-I", "mols.smi", "-O", "o", "-N", "many"]).is_err());
        assert!(parse(&[NAME, "-I", "mols.smi", "-O", "o", "-N", "0"]).is_err());
        assert!(parse(&[NAME, "-I", "mols.smi", "-O", "o", "-S", "-1"]).is_err());
    }
}
