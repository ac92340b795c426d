//! Embeds the git commit and build date for `snake --version`.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn git_short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let commit = String::from_utf8(output.stdout).ok()?;
    let commit = commit.trim();
    (!commit.is_empty()).then(|| commit.to_string())
}

fn main() {
    let commit = env::var("SNAKE_BUILD_COMMIT")
        .ok()
        .or_else(git_short_commit)
        .unwrap_or_else(|| "unknown".to_string());

    let date = env::var("SNAKE_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string());

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let dest_path = Path::new(&out_dir).join("build_info.rs");

    fs::write(
        &dest_path,
        format!(
            "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
            commit, date
        ),
    )
    .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=SNAKE_BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=SNAKE_BUILD_DATE");
}
