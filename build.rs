//! Build script capturing codec crate versions
//! Reads the resolved versions from Cargo.lock and exposes them as
//! `JSONBENCH_VERSION_<CRATE>` compile-time variables.

#[path = "build/lock.rs"]
mod lock;

use std::env;
use std::fs;
use std::path::PathBuf;

/// Crates whose resolved version is reported next to the candidate name,
/// with the requirement declared in Cargo.toml
const TRACKED: &[(&str, &str)] = &[
    ("serde_json", "1.0"),
    ("simd-json", "0.14"),
    ("sonic-rs", "0.3"),
];

fn main() {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return,
    };
    let lock_path = manifest_dir.join("Cargo.lock");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/lock.rs");
    println!("cargo:rerun-if-changed={}", lock_path.display());

    // A missing lock file just leaves the versions as "unknown" at runtime
    let content = match fs::read_to_string(&lock_path) {
        Ok(content) => content,
        Err(_) => {
            println!("cargo:warning=Cargo.lock not found, codec versions will be unknown");
            return;
        }
    };

    for (name, req) in TRACKED {
        match lock::locked_version(&content, name, req) {
            Ok(Some(version)) => {
                let key = name.replace('-', "_").to_uppercase();
                println!("cargo:rustc-env=JSONBENCH_VERSION_{}={}", key, version);
            }
            Ok(None) => {}
            Err(e) => {
                println!("cargo:warning=could not read Cargo.lock: {}", e);
                return;
            }
        }
    }
}
