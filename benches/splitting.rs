use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use splitzip::{Dataset, Delimiter, PartitionPlan};

fn sample(rows: usize) -> String {
	let mut text = String::from("id;name;value\n");
	for i in 0..rows {
		text.push_str(&format!("{};item-{};{}.{:02}\n", i, i * 7919 % 10_007, i % 1000, i % 100));
	}
	text
}

fn bench_split(c: &mut Criterion) {
	let text = sample(100_000);
	let mut group = c.benchmark_group("splitting");
	group.throughput(Throughput::Bytes(text.len() as u64));
	group.bench_function("parse", |b| {
		b.iter(|| Dataset::from_reader(text.as_bytes(), Delimiter::SEMICOLON).unwrap());
	});

	let dataset = Dataset::from_reader(text.as_bytes(), Delimiter::SEMICOLON).unwrap();
	let plan = PartitionPlan::compute(3.0, 1.0, dataset.len());
	group.bench_function("serialize_parts", |b| {
		b.iter(|| {
			for (_, range) in plan.ranges() {
				let _ = dataset.to_bytes(Delimiter::SEMICOLON, range).unwrap();
			}
		});
	});
	group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
