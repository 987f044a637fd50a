use std::io::Write;

use crate::error::BitsError;
use crate::fingerprint::{Fingerprint, FingerprintParams, Fingerprinter};
use crate::output::BitstringWriter;
use crate::supplier::MolRecord;

const PROGRESS_EVERY: usize = 10_000;

/// Which fingerprint to compute for every record.
#[derive(Debug, Clone, Copy)]
pub enum FingerprintRequest {
    ToolkitDefaultPath,
    Params(FingerprintParams),
}

impl FingerprintRequest {
    pub fn compute(
        &self,
        fingerprinter: &dyn Fingerprinter,
        record: &MolRecord,
    ) -> Result<Fingerprint, BitsError> {
        match self {
            FingerprintRequest::ToolkitDefaultPath => {
                fingerprinter.default_path_fingerprint(record)
            }
            FingerprintRequest::Params(params) => fingerprinter.fingerprint(record, params),
        }
    }
}

/// Reads, fingerprints and writes one record at a time, stopping at the first
/// failure. Returns the number of lines written.
pub fn dump_bits<I, W>(
    records: I,
    fingerprinter: &dyn Fingerprinter,
    request: FingerprintRequest,
    mut writer: BitstringWriter<W>,
) -> Result<usize, BitsError>
where
    I: IntoIterator<Item = Result<MolRecord, BitsError>>,
    W: Write,
{
    for record in records {
        let record = record?;
        let fingerprint = request.compute(fingerprinter, &record)?;
        writer.write(&record.name, &fingerprint)?;

        let written = writer.written();
        if written % PROGRESS_EVERY == 0 {
            log::info!("{} molecules processed so far", written);
        }
    }

    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::FingerprintType;
    use crate::supplier::MolSource;

    struct Alternating;

    impl Fingerprinter for Alternating {
        fn fingerprint(
            &self,
            record: &MolRecord,
            params: &FingerprintParams,
        ) -> Result<Fingerprint, BitsError> {
            if record.name == "bad" {
                return Err(BitsError::Parse {
                    index: record.index,
                    name: record.name.clone(),
                    reason: "unparsable".to_string(),
                });
            }
            Ok(Fingerprint((0..params.num_bits).map(|i| i % 2 == 0).collect()))
        }

        fn default_path_fingerprint(&self, record: &MolRecord) -> Result<Fingerprint, BitsError> {
            self.fingerprint(
                record,
                &FingerprintParams::resolve(FingerprintType::Path, 6, None)?,
            )
        }
    }

    fn record(index: usize, name: &str) -> Result<MolRecord, BitsError> {
        Ok(MolRecord {
            index,
            name: name.to_string(),
            source: MolSource::Smiles("C".to_string()),
        })
    }

    #[test]
    fn test_one_line_per_record() {
        let mut out = Vec::new();
        let params = FingerprintParams::resolve(FingerprintType::Morgan, 4, None).unwrap();

        let written = dump_bits(
            vec![record(0, "a"), record(1, "b")],
            &Alternating,
            FingerprintRequest::Params(params),
            BitstringWriter::new(&mut out),
        )
        .unwrap();

        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "a 1010\nb 1010\n");
    }

    #[test]
    fn test_toolkit_default_request() {
        let mut out = Vec::new();

        dump_bits(
            vec![record(0, "a")],
            &Alternating,
            FingerprintRequest::ToolkitDefaultPath,
            BitstringWriter::new(&mut out),
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a 101010\n");
    }

    #[test]
    fn test_failure_keeps_earlier_lines() {
        let mut out = Vec::new();
        let params = FingerprintParams::resolve(FingerprintType::Path, 2, None).unwrap();

        let res = dump_bits(
            vec![record(0, "a"), record(1, "bad"), record(2, "c")],
            &Alternating,
            FingerprintRequest::Params(params),
            BitstringWriter::new(&mut out),
        );

        assert!(matches!(res, Err(BitsError::Parse { index: 1, .. })));
        assert_eq!(String::from_utf8(out).unwrap(), "a 10\n");
    }
}
