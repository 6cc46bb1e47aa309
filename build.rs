//! Build script for xr-handle crate.
//!
//! Links against the OpenXR loader when the `linked` feature is enabled.
//! Set `OPENXR_LOADER_DIR` to point at a loader that is not on the default
//! library search path.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=OPENXR_LOADER_DIR");

    if env::var_os("CARGO_FEATURE_LINKED").is_none() {
        return;
    }

    if let Some(dir) = env::var_os("OPENXR_LOADER_DIR") {
        let dir = PathBuf::from(dir);
        if !dir.exists() {
            println!(
                "cargo:warning=OPENXR_LOADER_DIR does not exist: {}",
                dir.display()
            );
        }
        println!("cargo:rustc-link-search=native={}", dir.display());
    }

    println!("cargo:rustc-link-lib=dylib=openxr_loader");
}

