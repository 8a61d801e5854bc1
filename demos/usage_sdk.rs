use splitzip::{split_file, Delimiter, SplitConfig};

fn main() {
	let dir = std::env::temp_dir().join("splitzip-demo");
	std::fs::create_dir_all(&dir).unwrap();
	let source = dir.join("demo.csv");

	let mut text = String::from("id;label;score\n");
	for i in 0..50_000u64 {
		text.push_str(&format!("{};{:x};{}.{}\n", i, i.wrapping_mul(0x9E37_79B9_7F4A_7C15), i % 97, i % 10));
	}
	std::fs::write(&source, text).unwrap();

	let config = SplitConfig::new(&source, 0.25).with_delimiter(Delimiter::SEMICOLON);
	let outcome = split_file(config).unwrap();
	println!("zipped {} -> {:.2} MB", source.display(), outcome.size_mb());
	for part in outcome.parts() {
		println!("part {}: {} records -> {}", part.index, part.records.len(), part.archive_path.display());
	}
}
