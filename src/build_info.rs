//! Version stamp printed in the simulator banner.

pub const BUILD_COMMIT: &str = env!("ANDOR_SIM_COMMIT");
pub const BUILD_DATE: &str = env!("ANDOR_SIM_BUILD_DATE");

/// `andor-sim 0.1.0 (abc1234, 2026-01-31)`
pub fn version_stamp() -> String {
    format!(
        "{} {} ({}, {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
