use crate::error::Result;
use std::path::Path;

/// IEC binary megabyte.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Size of the file at `path` in megabytes. The file must already exist.
pub fn size_in_mb(path: &Path) -> Result<f64> {
	let bytes = std::fs::metadata(path)?.len();
	Ok(bytes_to_mb(bytes))
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
	bytes as f64 / BYTES_PER_MB
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SplitError;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn test_bytes_to_mb() {
		assert_eq!(bytes_to_mb(0), 0.0);
		assert_eq!(bytes_to_mb(1_048_576), 1.0);
		assert_eq!(bytes_to_mb(524_288), 0.5);
	}

	#[test]
	fn test_size_of_written_file() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(&vec![7u8; 262_144]).unwrap();
		file.flush().unwrap();

		assert_eq!(size_in_mb(file.path()).unwrap(), 0.25);
	}

	#[test]
	fn test_missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = size_in_mb(&dir.path().join("missing.zip"));
		assert!(matches!(result, Err(SplitError::Io(_))));
	}
}
