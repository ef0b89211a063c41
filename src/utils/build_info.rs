//! Compile-time build information, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string, as printed by `--version`.
pub fn version_line() -> String {
    format!("flappy-rounds {}", VERSION_TEXT)
}
