use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
	#[error("Given argument {} is not a valid path", .0.display())]
	PathNotFound(PathBuf),

	#[error("Failed to read in the delimited data ({0}). Please provide the correct delimiter.")]
	Parse(String),

	#[error("Source is not valid UTF-8 text ({0})")]
	Encoding(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error("Archive verification failed: {0}")]
	Verification(String),
}

pub type Result<T> = std::result::Result<T, SplitError>;

impl From<zip::result::ZipError> for SplitError {
	fn from(err: zip::result::ZipError) -> Self {
		match err {
			zip::result::ZipError::Io(e) => SplitError::Io(e),
			other => SplitError::Io(std::io::Error::new(std::io::ErrorKind::Other, other)),
		}
	}
}

// Only reached on the write side; source records go through `Dataset::from_reader`,
// which maps its csv errors to `Parse` itself.
impl From<csv::Error> for SplitError {
	fn from(err: csv::Error) -> Self {
		match err.into_kind() {
			csv::ErrorKind::Io(e) => SplitError::Io(e),
			kind => SplitError::Io(std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", kind))),
		}
	}
}
