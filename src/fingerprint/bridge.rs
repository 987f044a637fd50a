#[cxx::bridge(namespace = "fpbits")]
pub mod ffi {
    unsafe extern "C++" {
        include!("fpbits/wrapper/include/fingerprint.h");

        pub fn morgan_bits(smiles: &str, radius: u32, num_bits: u32) -> Result<Vec<u32>>;

        pub fn path_bits(smiles: &str, max_path: u32, num_bits: u32) -> Result<Vec<u32>>;
    }
}
