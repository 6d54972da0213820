use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use revenc::{compress, CompressionMethod, Pipeline};

fn sample_text(len: usize) -> String {
	"the quick brown fox jumps over the lazy dog; "
		.chars()
		.cycle()
		.take(len)
		.collect()
}

fn bench_codecs(c: &mut Criterion) {
	let text = sample_text(64 * 1024);
	let mut group = c.benchmark_group("codec");
	group.throughput(Throughput::Bytes(text.len() as u64));
	group.bench_function("lz_compress", |b| {
		b.iter(|| compress(&text, CompressionMethod::Lz));
	});
	group.bench_function("dictionary_compress", |b| {
		b.iter(|| compress(&text, CompressionMethod::Dictionary));
	});
	group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
	let text = sample_text(16 * 1024);
	let mut pipeline = Pipeline::new();
	pipeline
		.add_transform("base64")
		.set_compression(CompressionMethod::Dictionary)
		.enable_reversibility();
	let processed = pipeline.process(&text).unwrap();

	let mut group = c.benchmark_group("pipeline");
	group.throughput(Throughput::Bytes(text.len() as u64));
	group.bench_function("process", |b| {
		b.iter(|| pipeline.process(&text).unwrap());
	});
	group.bench_function("reverse", |b| {
		b.iter(|| pipeline.reverse(&processed).unwrap());
	});
	group.finish();
}

criterion_group!(benches, bench_codecs, bench_pipeline);
criterion_main!(benches);
