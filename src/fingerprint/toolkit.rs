use rdkit::{ROMol, RWMol};

use super::bridge::ffi;
use super::{Fingerprint, FingerprintParams, FingerprintType, Fingerprinter};
use crate::error::BitsError;
use crate::supplier::{MolRecord, MolSource};

/// Fingerprints computed by RDKit.
///
/// Records are parsed and sanitized through the `rdkit` bindings. Morgan and
/// path fingerprints with an explicit radius, path length and width go through
/// a small bridge onto `MorganFingerprints::getFingerprintAsBitVect` and
/// `RDKFingerprintMol`, which the bindings do not expose.
#[derive(Debug, Default)]
pub struct RdkitFingerprinter;

impl RdkitFingerprinter {
    pub fn new() -> Self {
        RdkitFingerprinter
    }

    fn to_mol(&self, record: &MolRecord) -> Result<ROMol, BitsError> {
        match &record.source {
            MolSource::Smiles(smiles) => {
                ROMol::from_smiles(smiles).map_err(|e| BitsError::Parse {
                    index: record.index,
                    name: record.name.clone(),
                    reason: e.to_string(),
                })
            }
            MolSource::MolBlock(mol_block) => RWMol::from_mol_block(mol_block, true, true, false)
                .map(|rw_mol| rw_mol.to_ro_mol())
                .ok_or_else(|| BitsError::Parse {
                    index: record.index,
                    name: record.name.clone(),
                    reason: "could not convert molblock".to_string(),
                }),
        }
    }
}

impl Fingerprinter for RdkitFingerprinter {
    fn check(&self, params: &FingerprintParams) -> Result<(), BitsError> {
        if u32::try_from(params.num_bits).is_err() {
            return Err(BitsError::UnsupportedParams {
                reason: format!("{} bits is more than rdkit supports", params.num_bits),
            });
        }
        if params.fp_type == FingerprintType::Path && params.size == 0 {
            return Err(BitsError::UnsupportedParams {
                reason: "max path length must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    fn fingerprint(
        &self,
        record: &MolRecord,
        params: &FingerprintParams,
    ) -> Result<Fingerprint, BitsError> {
        self.check(params)?;

        // The bridge takes the sanitized molecule as canonical SMILES.
        let smiles = self.to_mol(record)?.as_smiles();
        let num_bits = params.num_bits as u32;

        let on_bits = match params.fp_type {
            FingerprintType::Morgan => ffi::morgan_bits(&smiles, params.size, num_bits),
            FingerprintType::Path => ffi::path_bits(&smiles, params.size, num_bits),
        }
        .map_err(|e| BitsError::Toolkit {
            index: record.index,
            name: record.name.clone(),
            reason: e.to_string(),
        })?;

        Ok(Fingerprint::from_on_bits(
            params.num_bits,
            on_bits.into_iter().map(|idx| idx as usize),
        ))
    }

    fn default_path_fingerprint(&self, record: &MolRecord) -> Result<Fingerprint, BitsError> {
        let romol = self.to_mol(record)?;

        Ok(Fingerprint::from_bitvec(romol.rdk_fingerprint().0))
    }
}
