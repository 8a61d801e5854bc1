//! # splitzip
//!
//! Zips a delimited text file and, when the archive is larger than a given
//! limit, splits the records into parts. Every part is written twice: as a
//! plain delimited file and as a single-entry zip archive.
//!
//! ## Splitting
//!
//! The whole file is always zipped first, to `<stem>.zip` next to the source.
//! If that archive is over the limit, the number of parts is estimated from its
//! size (`floor(size / max) + 1`) and the records are cut into consecutive runs
//! of `floor(records / parts) + 1`. Parts are named `<stem>_<n>.csv` and
//! `<stem>_<n>.zip`, and every part from 1 to the estimated count is written,
//! including header-only parts when the records run out early. The estimate
//! assumes records compress evenly, so it is a heuristic rather than a
//! guarantee on part size.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splitzip::{Delimiter, SplitConfig, Splitter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SplitConfig::new("export.csv", 25.0).with_delimiter(Delimiter::COMMA);
//! let outcome = Splitter::new(config).run()?;
//!
//! println!("zipped size: {:.2} MB", outcome.size_mb());
//! for part in outcome.parts() {
//!     println!("part {}: {}", part.index, part.archive_path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod plan;
pub mod size;
pub mod splitter;

// Re-export commonly used types for convenience
pub use archive::{read_archive_file, ArchiveEntry};
pub use config::{Delimiter, SplitConfig};
pub use dataset::Dataset;
pub use error::{Result, SplitError};
pub use plan::PartitionPlan;
pub use size::size_in_mb;
pub use splitter::{PartOutput, SplitOutcome, Splitter};

/// Zip and, if needed, split the file described by `config`.
///
/// Validates the configuration first, which `Splitter::run` does not.
pub fn split_file(config: SplitConfig) -> Result<SplitOutcome> {
    config.validate()?;
    Splitter::new(config).run()
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_file_rejects_bad_limit() {
        let result = split_file(SplitConfig::new("whatever.csv", 0.0));
        assert!(matches!(result, Err(SplitError::Config(_))));
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert!(!DESCRIPTION.is_empty());
    }
}
