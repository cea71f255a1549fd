//! Build script for seven-segment-simulator.
//!
//! On Windows, links against the SDL2 import library in `vendor/sdl2/` at the
//! workspace root and places `SDL2.dll` next to the built binary. Other
//! platforms use the system SDL2 and skip this script entirely.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const SDL2_DLL: &str = "SDL2.dll";

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Some(vendor_sdl2) = vendor_dir() else {
        println!("cargo:warning=CARGO_MANIFEST_DIR not set, skipping SDL2 setup");
        return;
    };
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!(
            "cargo:warning=SDL2 not found at {}; put SDL2.lib and SDL2.dll there",
            vendor_sdl2.display()
        );
        return;
    }
    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    if let Some(profile_dir) = profile_dir() {
        copy_dll(&vendor_sdl2.join(SDL2_DLL), &profile_dir.join(SDL2_DLL));
    }
}

/// `<workspace>/vendor/sdl2`
fn vendor_dir() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
    Some(manifest_dir.parent()?.join("vendor").join("sdl2"))
}

/// `target/<profile>`, found by walking up from `OUT_DIR`.
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR")?);
    out_dir
        .ancestors()
        .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
        .map(Path::to_path_buf)
}

fn copy_dll(
    src: &Path,
    dst: &Path,
) {
    if !src.exists() || dst.exists() {
        return;
    }
    if let Err(e) = fs::copy(src, dst) {
        println!("cargo:warning=Failed to copy {SDL2_DLL}: {e}");
    }
}
