use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;

use crate::error::BitsError;
use crate::supplier::MolRecord;

mod bridge;
pub mod toolkit;

pub use self::toolkit::RdkitFingerprinter;

pub const DEFAULT_NUM_BITS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintType {
    Morgan,
    Path,
}

impl FingerprintType {
    pub const NAMES: [&'static str; 2] = ["Morgan", "Path"];

    /// Radius for Morgan, max path length for Path.
    pub fn default_size(&self) -> u32 {
        match self {
            FingerprintType::Morgan => 3,
            FingerprintType::Path => 7,
        }
    }
}

impl FromStr for FingerprintType {
    type Err = BitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morgan" => Ok(FingerprintType::Morgan),
            "Path" => Ok(FingerprintType::Path),
            other => Err(BitsError::UnknownFingerprintType(other.to_string())),
        }
    }
}

impl fmt::Display for FingerprintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FingerprintType::Morgan => write!(f, "Morgan"),
            FingerprintType::Path => write!(f, "Path"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerprintParams {
    pub fp_type: FingerprintType,
    pub num_bits: usize,
    pub size: u32,
}

impl FingerprintParams {
    /// An explicit size always wins; otherwise the type's default is used.
    pub fn resolve(
        fp_type: FingerprintType,
        num_bits: usize,
        size: Option<u32>,
    ) -> Result<Self, BitsError> {
        if num_bits == 0 {
            return Err(BitsError::InvalidBitCount);
        }

        Ok(FingerprintParams {
            fp_type,
            num_bits,
            size: size.unwrap_or_else(|| fp_type.default_size()),
        })
    }
}

impl Default for FingerprintParams {
    fn default() -> Self {
        FingerprintParams {
            fp_type: FingerprintType::Morgan,
            num_bits: DEFAULT_NUM_BITS,
            size: FingerprintType::Morgan.default_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(pub BitVec<u8, Lsb0>);

impl Fingerprint {
    pub fn from_bitvec(bits: BitVec<u8, Lsb0>) -> Self {
        Fingerprint(bits)
    }

    /// `num_bits` wide with only the listed bits set. Out-of-range indices are
    /// ignored.
    pub fn from_on_bits(num_bits: usize, on_bits: impl IntoIterator<Item = usize>) -> Self {
        let mut bits = bitvec![u8, Lsb0; 0; num_bits];
        for idx in on_bits {
            if idx < num_bits {
                bits.set(idx, true);
            }
        }

        Fingerprint(bits)
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub fn bit_at(&self, idx: usize) -> bool {
        self.0.get(idx).map(|b| *b).unwrap_or(false)
    }

    pub fn count_ones(&self) -> usize {
        self.0.count_ones()
    }

    pub fn to_bitstring(&self) -> String {
        self.0.iter().map(|b| if *b { '1' } else { '0' }).collect()
    }

    fn common_bits(&self, other: &Fingerprint) -> usize {
        self.0.iter_ones().filter(|idx| other.bit_at(*idx)).count()
    }

    /// Tanimoto dissimilarity: 0.0 is identical, 1.0 shares no bits. Two empty
    /// fingerprints are identical.
    pub fn tanimoto_distance(&self, other: &Fingerprint) -> f64 {
        let common = self.common_bits(other) as f64;
        let div = self.count_ones() as f64 + other.count_ones() as f64 - common;
        if div == 0.0 {
            return 0.0;
        }

        1.0 - common / div
    }

    /// Tversky dissimilarity, weighting bits only in `self` by `alpha` and bits
    /// only in `other` by `beta`.
    pub fn tversky_distance(&self, other: &Fingerprint, alpha: f64, beta: f64) -> f64 {
        let common = self.common_bits(other);
        let a_not_b = (self.count_ones() - common) as f64;
        let b_not_a = (other.count_ones() - common) as f64;
        let common = common as f64;

        let div = a_not_b * alpha + b_not_a * beta + common;
        if div == 0.0 {
            return 0.0;
        }

        1.0 - common / div
    }
}

/// A cheminformatics toolkit able to turn a molecule record into bits.
pub trait Fingerprinter {
    /// Rejects parameters the toolkit cannot honour, before any molecule is read.
    fn check(&self, _params: &FingerprintParams) -> Result<(), BitsError> {
        Ok(())
    }

    fn fingerprint(
        &self,
        record: &MolRecord,
        params: &FingerprintParams,
    ) -> Result<Fingerprint, BitsError>;

    /// The toolkit's path fingerprint with all parameters left at their defaults.
    fn default_path_fingerprint(&self, record: &MolRecord) -> Result<Fingerprint, BitsError>;
}
