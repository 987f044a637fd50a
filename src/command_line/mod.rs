pub mod count_bits;
pub mod histogram;
pub mod make_bits;
pub mod make_rdkit_bits;
pub mod merge_bits;
pub mod reverse_bits;
pub mod subset_bits;

pub mod prelude {
    pub use clap::{Arg, ArgAction, ArgMatches, Command};

    pub use crate::error::BitsError;
}
