use std::env;
use std::path::PathBuf;

const RDKIT_LIBS: [&str; 6] = [
    "Fingerprints",
    "Subgraphs",
    "SmilesParse",
    "GraphMol",
    "DataStructs",
    "RDGeneral",
];

fn rdkit_prefixes() -> Vec<PathBuf> {
    let mut prefixes = Vec::new();
    for var in ["RDKIT_PREFIX", "CONDA_PREFIX"] {
        if let Ok(prefix) = env::var(var) {
            prefixes.push(PathBuf::from(prefix));
        }
    }
    for prefix in ["/usr/local", "/usr", "/opt/homebrew"] {
        prefixes.push(PathBuf::from(prefix));
    }

    prefixes
        .into_iter()
        .filter(|p| p.join("include").join("rdkit").is_dir())
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=src/fingerprint/bridge.rs");
    println!("cargo:rerun-if-changed=wrapper/include/fingerprint.h");
    println!("cargo:rerun-if-changed=wrapper/src/fingerprint.cc");
    println!("cargo:rerun-if-env-changed=RDKIT_PREFIX");
    println!("cargo:rerun-if-env-changed=CONDA_PREFIX");

    let prefixes = rdkit_prefixes();

    let mut build = cxx_build::bridge("src/fingerprint/bridge.rs");
    build
        .file("wrapper/src/fingerprint.cc")
        .flag_if_supported("-std=c++17")
        .flag_if_supported("-Wno-unused-parameter");
    for prefix in &prefixes {
        build
            .include(prefix.join("include"))
            .include(prefix.join("include").join("rdkit"));
    }
    build.compile("fpbits-rdkit");

    for prefix in &prefixes {
        for lib_dir in ["lib", "lib64"] {
            let lib_dir = prefix.join(lib_dir);
            if lib_dir.is_dir() {
                println!("cargo:rustc-link-search=native={}", lib_dir.display());
            }
        }
    }
    for lib in RDKIT_LIBS {
        println!("cargo:rustc-link-lib=dylib=RDKit{}", lib);
    }
}
