#![feature(test)]

use fpbits::fingerprint::*;
use fpbits::supplier::{MolRecord, MolSource};

extern crate test;
use test::Bencher;

fn aspirin() -> MolRecord {
    MolRecord {
        index: 0,
        name: "aspirin".to_string(),
        source: MolSource::Smiles("CC(=O)Oc1ccccc1C(=O)O".to_string()),
    }
}

#[bench]
fn bench_default_path_fingerprint(b: &mut Bencher) {
    let fingerprinter = RdkitFingerprinter::new();
    let record = aspirin();

    b.iter(|| fingerprinter.default_path_fingerprint(&record));
}

#[bench]
fn bench_bitstring_encoding(b: &mut Bencher) {
    let fp = RdkitFingerprinter::new()
        .default_path_fingerprint(&aspirin())
        .unwrap();

    b.iter(|| fp.to_bitstring());
}

#[bench]
fn bench_morgan_4096(b: &mut Bencher) {
    let fingerprinter = RdkitFingerprinter::new();
    let record = aspirin();
    let params =
        FingerprintParams::resolve(FingerprintType::Morgan, DEFAULT_NUM_BITS, None).unwrap();

    b.iter(|| fingerprinter.fingerprint(&record, &params));
}

#[bench]
fn bench_tanimoto_distance(b: &mut Bencher) {
    let fingerprinter = RdkitFingerprinter::new();
    let left = fingerprinter.default_path_fingerprint(&aspirin()).unwrap();
    let right = fingerprinter
        .default_path_fingerprint(&MolRecord {
            index: 1,
            name: "benzene".to_string(),
            source: MolSource::Smiles("c1ccccc1".to_string()),
        })
        .unwrap();

    b.iter(|| left.tanimoto_distance(&right));
}
