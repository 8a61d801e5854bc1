use crate::config::Delimiter;
use crate::dataset::Dataset;
use crate::error::{Result, SplitError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::ops::Range;
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const ARCHIVE_EXTENSION: &str = "zip";

/// The single file stored inside an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
	pub name: String,
	pub contents: Vec<u8>,
}

fn entry_options() -> FileOptions {
	FileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Write the header and `range` of `dataset` into a one-entry zip archive at `path`.
pub fn write_dataset_archive(
	path: &Path,
	entry_name: &str,
	dataset: &Dataset,
	delimiter: Delimiter,
	range: Range<usize>,
) -> Result<()> {
	let file = File::create(path)?;
	let mut zip = ZipWriter::new(BufWriter::new(file));
	zip.start_file(entry_name, entry_options())?;
	dataset.write_delimited(&mut zip, delimiter, range)?;
	let mut out = zip.finish()?;
	out.flush()?;
	Ok(())
}

pub fn read_archive<R: Read + Seek>(reader: R) -> Result<ArchiveEntry> {
	let mut zip = ZipArchive::new(reader)?;
	if zip.len() != 1 {
		return Err(SplitError::Verification(format!("expected a single entry, found {}", zip.len())));
	}
	let mut entry = zip.by_index(0)?;
	let name = entry.name().to_string();
	let mut contents = Vec::with_capacity(entry.size() as usize);
	entry.read_to_end(&mut contents)?;
	Ok(ArchiveEntry { name, contents })
}

pub fn read_archive_file(path: &Path) -> Result<ArchiveEntry> {
	read_archive(BufReader::new(File::open(path)?))
}

/// Check that the archive at `path` holds exactly the header and `range` of `dataset`.
pub fn check_dataset_archive(path: &Path, dataset: &Dataset, range: Range<usize>, delimiter: Delimiter) -> Result<()> {
	let entry = read_archive_file(path)?;
	let restored = Dataset::from_reader(entry.contents.as_slice(), delimiter)
		.map_err(|e| SplitError::Verification(format!("{}: {}", path.display(), e)))?;

	let expected = dataset.slice(range);
	if restored.headers() != dataset.headers() || restored.records() != expected {
		return Err(SplitError::Verification(format!(
			"{} holds {} records, expected {}",
			path.display(),
			restored.len(),
			expected.len()
		)));
	}
	Ok(())
}
