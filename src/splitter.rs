use crate::archive::{self, ARCHIVE_EXTENSION};
use crate::config::SplitConfig;
use crate::dataset::Dataset;
use crate::error::{Result, SplitError};
use crate::plan::PartitionPlan;
use crate::size::size_in_mb;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const PART_EXTENSION: &str = "csv";

/// Files written for one part.
#[derive(Debug, Clone, PartialEq)]
pub struct PartOutput {
	pub index: usize,
	pub records: Range<usize>,
	pub csv_path: PathBuf,
	pub archive_path: PathBuf,
	pub archive_size_mb: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
	/// The whole-file archive fits; it is the only output.
	WithinLimit {
		archive: PathBuf,
		size_mb: f64,
		max_size_mb: f64,
		record_count: usize,
	},
	/// The whole-file archive was too large and the records were split.
	Split {
		archive: PathBuf,
		size_mb: f64,
		max_size_mb: f64,
		plan: PartitionPlan,
		parts: Vec<PartOutput>,
	},
}

impl SplitOutcome {
	pub fn archive(&self) -> &Path {
		match self {
			SplitOutcome::WithinLimit { archive, .. } | SplitOutcome::Split { archive, .. } => archive,
		}
	}

	pub fn size_mb(&self) -> f64 {
		match self {
			SplitOutcome::WithinLimit { size_mb, .. } | SplitOutcome::Split { size_mb, .. } => *size_mb,
		}
	}

	pub fn parts(&self) -> &[PartOutput] {
		match self {
			SplitOutcome::WithinLimit { .. } => &[],
			SplitOutcome::Split { parts, .. } => parts,
		}
	}

	pub fn is_split(&self) -> bool {
		matches!(self, SplitOutcome::Split { .. })
	}
}

/// Output file names derived from the source path. Everything lands next to the source.
#[derive(Debug, Clone)]
struct OutputNames {
	dir: PathBuf,
	stem: OsString,
	entry_name: String,
}

impl OutputNames {
	fn new(source: &Path) -> Result<Self> {
		let file_name = source
			.file_name()
			.ok_or_else(|| SplitError::Config(format!("{} has no file name", source.display())))?;
		// Zip entry names are text; the file names on disk keep the raw stem.
		let entry_name = file_name.to_string_lossy().into_owned();
		let stem = source.file_stem().unwrap_or(file_name).to_os_string();
		let dir = source.parent().map(Path::to_path_buf).unwrap_or_default();
		Ok(Self { dir, stem, entry_name })
	}

	fn with_suffix(&self, suffix: &str) -> PathBuf {
		let mut name = self.stem.clone();
		name.push(suffix);
		self.dir.join(name)
	}

	fn whole_archive(&self) -> PathBuf {
		self.with_suffix(&format!(".{}", ARCHIVE_EXTENSION))
	}

	fn part_csv(&self, n: usize) -> PathBuf {
		self.with_suffix(&format!("_{}.{}", n, PART_EXTENSION))
	}

	fn part_archive(&self, n: usize) -> PathBuf {
		self.with_suffix(&format!("_{}.{}", n, ARCHIVE_EXTENSION))
	}
}

/// Zips a delimited file and, when the archive is over the size limit, splits
/// the records into parts written as both plain and zipped files.
pub struct Splitter {
	config: SplitConfig,
}

impl Splitter {
	pub fn new(config: SplitConfig) -> Self {
		Self { config }
	}

	pub fn run(&self) -> Result<SplitOutcome> {
		let source = &self.config.source;
		if !source.exists() {
			return Err(SplitError::PathNotFound(source.clone()));
		}

		let names = OutputNames::new(source)?;
		if names.whole_archive() == *source {
			return Err(SplitError::Config(format!(
				"{} would be overwritten by its own archive",
				source.display()
			)));
		}
		let dataset = Dataset::from_path(source, self.config.delimiter)?;
		info!(
			"Loaded {} records with {} columns from {}",
			dataset.len(),
			dataset.headers().len(),
			source.display()
		);

		let archive = names.whole_archive();
		let full_range = 0..dataset.len();
		archive::write_dataset_archive(&archive, &names.entry_name, &dataset, self.config.delimiter, full_range.clone())?;
		self.verify(&archive, &dataset, full_range)?;

		let size_mb = size_in_mb(&archive)?;
		let max_size_mb = self.config.max_size_mb;
		info!("Zipped size of {} is {:.3} MB (limit {} MB)", archive.display(), size_mb, max_size_mb);

		if size_mb <= max_size_mb {
			info!("No need to split");
			return Ok(SplitOutcome::WithinLimit {
				archive,
				size_mb,
				max_size_mb,
				record_count: dataset.len(),
			});
		}

		let plan = PartitionPlan::compute(size_mb, max_size_mb, dataset.len());
		debug!(
			"Partition plan: {} parts of at most {} records ({} records total)",
			plan.part_count, plan.records_per_part, plan.record_count
		);
		let parts = self.write_parts(&dataset, &names, &plan)?;
		info!("The file has been split into {} parts", parts.len());

		Ok(SplitOutcome::Split { archive, size_mb, max_size_mb, plan, parts })
	}

	fn write_parts(&self, dataset: &Dataset, names: &OutputNames, plan: &PartitionPlan) -> Result<Vec<PartOutput>> {
		let pb = if self.config.show_progress {
			ProgressBar::new(plan.part_count as u64)
		} else {
			ProgressBar::hidden()
		};
		if let Ok(style) = ProgressStyle::with_template(
			"{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] Parts {pos}/{len} ({eta})",
		) {
			pb.set_style(style.progress_chars("#>-"));
		}

		let mut parts = Vec::new();
		for (n, records) in plan.ranges() {
			if records.is_empty() {
				warn!("Part {} has no records left; writing header only", n);
			}
			debug!("Part {}: records {:?}", n, records);

			let csv_path = names.part_csv(n);
			let mut out = BufWriter::new(File::create(&csv_path)?);
			dataset.write_delimited(&mut out, self.config.delimiter, records.clone())?;
			out.flush()?;

			let archive_path = names.part_archive(n);
			archive::write_dataset_archive(&archive_path, &names.entry_name, dataset, self.config.delimiter, records.clone())?;
			self.verify(&archive_path, dataset, records.clone())?;

			let archive_size_mb = size_in_mb(&archive_path)?;
			info!("Wrote part {} ({} records, {:.3} MB zipped)", n, records.len(), archive_size_mb);
			parts.push(PartOutput { index: n, records, csv_path, archive_path, archive_size_mb });
			pb.inc(1);
		}

		pb.finish_with_message("Splitting finished");
		Ok(parts)
	}

	/// Re-read `path` and check it holds exactly the header and `records` of `dataset`.
	fn verify(&self, path: &Path, dataset: &Dataset, records: Range<usize>) -> Result<()> {
		if !self.config.verify {
			return Ok(());
		}
		archive::check_dataset_archive(path, dataset, records, self.config.delimiter)?;
		debug!("Verified {}", path.display());
		Ok(())
	}
}
