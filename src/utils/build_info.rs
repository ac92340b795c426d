//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line printed by `snake --version`.
pub fn version_line() -> String {
    format!(
        "snake {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
