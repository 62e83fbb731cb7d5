pub mod macros;

/// Returns the version of this workspace, as set in the root `Cargo.toml`.
pub const fn emcenter_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

