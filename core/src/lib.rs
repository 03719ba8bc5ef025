//! Core types shared by the collector, the reporters and the toolbox binary.

pub mod config;
pub mod error;
pub mod records;

pub use config::ReportConfig;
pub use error::RecordError;
pub use records::*;

pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!version().is_empty());
    }
}
