use std::io::Write;
use std::path::{Path, PathBuf};

use super::prelude::*;
use crate::fingerprint::Fingerprint;
use crate::output::BitstringReader;
use crate::similarity::{DistanceHistogram, DistanceMeasure};

pub const NAME: &str = "histogram";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Histogram of the distances from each query to every target fingerprint")
        .arg(Arg::new("query-file").required(true).num_args(1))
        .arg(Arg::new("target-file").required(true).num_args(1))
        .arg(
            Arg::new("start")
                .required(false)
                .long("start")
                .help("First query to use, counting from 0")
                .num_args(1),
        )
        .arg(
            Arg::new("finish")
                .required(false)
                .long("finish")
                .help("Stop before this query. Default is after the last one")
                .num_args(1),
        )
        .arg(
            Arg::new("alpha")
                .required(false)
                .long("alpha")
                .requires("beta")
                .help("Tversky weight of bits set only in the query")
                .num_args(1),
        )
        .arg(
            Arg::new("beta")
                .required(false)
                .long("beta")
                .requires("alpha")
                .help("Tversky weight of bits set only in the target")
                .num_args(1),
        )
}

#[derive(Debug, Clone)]
pub struct HistogramArgs {
    pub query_file: PathBuf,
    pub target_file: PathBuf,
    pub start: usize,
    pub finish: Option<usize>,
    pub measure: DistanceMeasure,
}

impl HistogramArgs {
    pub fn from_matches(matches: &ArgMatches) -> eyre::Result<Self> {
        let query_file = matches
            .get_one::<String>("query-file")
            .ok_or(eyre::eyre!("Failed to extract query file path"))?;
        let target_file = matches
            .get_one::<String>("target-file")
            .ok_or(eyre::eyre!("Failed to extract target file path"))?;

        let start = match matches.get_one::<String>("start") {
            Some(start) => start.parse::<usize>()?,
            None => 0,
        };
        let finish = match matches.get_one::<String>("finish") {
            Some(finish) => Some(finish.parse::<usize>()?),
            None => None,
        };

        let alpha = matches.get_one::<String>("alpha");
        let beta = matches.get_one::<String>("beta");
        let measure = match (alpha, beta) {
            (Some(alpha), Some(beta)) => DistanceMeasure::Tversky {
                alpha: alpha.parse::<f64>()?,
                beta: beta.parse::<f64>()?,
            },
            _ => DistanceMeasure::Tanimoto,
        };

        Ok(HistogramArgs {
            query_file: PathBuf::from(query_file),
            target_file: PathBuf::from(target_file),
            start,
            finish,
            measure,
        })
    }
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let args = HistogramArgs::from_matches(matches)?;

    let stdout = std::io::stdout();
    let histogram = run(&args, stdout.lock())?;

    log::info!("fraction total : {}", histogram.total());

    Ok(())
}

fn read_fingerprints(path: &Path) -> Result<(Vec<Fingerprint>, Option<usize>), BitsError> {
    let mut reader = BitstringReader::open(path)?;
    let fingerprints = reader
        .by_ref()
        .map(|record| record.map(|record| record.to_fingerprint()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((fingerprints, reader.num_bits()))
}

/// Prints `<query index> : <fractions>` after each query, the fractions
/// accumulating over all queries so far.
pub fn run(args: &HistogramArgs, mut out: impl Write) -> Result<DistanceHistogram, BitsError> {
    let (queries, query_bits) = read_fingerprints(&args.query_file)?;
    let (targets, target_bits) = read_fingerprints(&args.target_file)?;

    if let (Some(expected), Some(found)) = (query_bits, target_bits) {
        if expected != found {
            return Err(BitsError::WidthMismatch {
                path: args.target_file.clone(),
                expected,
                found,
            });
        }
    }

    log::info!("{} query fps and {} target fps.", queries.len(), targets.len());

    let finish = args.finish.unwrap_or(queries.len()).min(queries.len());
    let mut histogram = DistanceHistogram::new(args.measure);

    for (i, query) in queries.iter().enumerate().take(finish).skip(args.start) {
        histogram.add_query(query, &targets);

        let fractions = histogram
            .fractions()
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{} : {}", i, fractions).map_err(|source| BitsError::Write { source })?;
    }

    out.flush().map_err(|source| BitsError::Write { source })?;

    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    fn parse(argv: &[&str]) -> eyre::Result<HistogramArgs> {
        let matches = command().try_get_matches_from(argv)?;
        HistogramArgs::from_matches(&matches)
    }

    #[test]
    fn test_args() {
        let args = parse(&[NAME, "queries.txt", "targets.txt"]).unwrap();
        assert_eq!(args.start, 0);
        assert_eq!(args.finish, None);
        assert_eq!(args.measure, DistanceMeasure::Tanimoto);

        let args = parse(&[
            NAME, "p.txt", "t.txt", "--start", "2", "--finish", "5", "--alpha", "0.9", "--beta",
            "0.1",
        ])
        .unwrap();
        assert_eq!(args.start, 2);
        assert_eq!(args.finish, Some(5));
        assert_eq!(
            args.measure,
            DistanceMeasure::Tversky {
                alpha: 0.9,
                beta: 0.1
            }
        );

        assert!(parse(&[NAME, "p.txt", "t.txt", "--alpha", "0.9"]).is_err());
        assert!(parse(&[NAME, "p.txt"]).is_err());
    }

    #[test]
    fn test_cumulative_lines() -> eyre::Result<()> {
        let dir = TempDir::new("fpbits")?;
        let query_file = dir.path().join("queries.txt");
        let target_file = dir.path().join("targets.txt");
        fs::write(&query_file, "p0 1100\np1 0011\np2 1111\n")?;
        fs::write(&target_file, "t0 1100\nt1 0011\n")?;

        let args = HistogramArgs {
            query_file,
            target_file,
            start: 0,
            finish: Some(2),
            measure: DistanceMeasure::Tanimoto,
        };
        let mut out = Vec::new();
        let histogram = run(&args, &mut out)?;

        let out = String::from_utf8(out)?;
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0 : 0.5 0 "));
        assert!(lines[0].ends_with(" 0.5"));
        assert!(lines[1].starts_with("1 : 1 0 "));
        assert!(lines[1].ends_with(" 1"));
        assert_eq!(lines[1].split(" : ").nth(1).unwrap().split(' ').count(), 21);

        assert_eq!(histogram.queries(), 2);
        assert_eq!(histogram.total(), 2.0);

        Ok(())
    }

    #[test]
    fn test_start_past_queries_prints_nothing() -> eyre::Result<()> {
        let dir = TempDir::new("fpbits")?;
        let query_file = dir.path().join("queries.txt");
        fs::write(&query_file, "p0 1100\n")?;

        let args = HistogramArgs {
            query_file: query_file.clone(),
            target_file: query_file,
            start: 3,
            finish: None,
            measure: DistanceMeasure::Tanimoto,
        };
        let mut out = Vec::new();
        let histogram = run(&args, &mut out)?;

        assert!(out.is_empty());
        assert_eq!(histogram.queries(), 0);

        Ok(())
    }

    #[test]
    fn test_width_mismatch() -> eyre::Result<()> {
        let dir = TempDir::new("fpbits")?;
        let query_file = dir.path().join("queries.txt");
        let target_file = dir.path().join("targets.txt");
        fs::write(&query_file, "p0 1100\n")?;
        fs::write(&target_file, "t0 11\n")?;

        let args = HistogramArgs {
            query_file,
            target_file,
            start: 0,
            finish: None,
            measure: DistanceMeasure::Tanimoto,
        };
        let res = run(&args, Vec::new());

        assert!(matches!(
            res,
            Err(BitsError::WidthMismatch {
                expected: 4,
                found: 2,
                ..
            })
        ));

        Ok(())
    }
}
