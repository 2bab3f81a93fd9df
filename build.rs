//! Build script for the Portfolio Content Manager CLI.
//!
//! Copies the `.env.example` configuration template from the crate root into
//! the user's local data directory (`foliocli/.env.example`), so a freshly
//! built binary has a ready-to-copy starting point next to where it expects
//! the real `.env`:
//!
//! - Linux: `~/.local/share/foliocli/.env.example`
//! - macOS: `~/Library/Application Support/foliocli/.env.example`
//! - Windows: `%LOCALAPPDATA%/foliocli/.env.example`
//!
//! A missing template produces a cargo warning instead of failing the build;
//! directory-creation and copy failures are fatal.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("foliocli");
    fs::create_dir_all(&out_dir)?;

    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template_path.display()
        );
    }

    Ok(())
}
