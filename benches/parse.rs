use criterion::{Criterion, criterion_group, criterion_main};
use pdb_fasta_tools::{FastaReader, ReportOptions, write_report};
use std::io::{BufReader, Cursor};

fn sample(n: usize) -> String {
    let mut data = String::new();
    for i in 0..n {
        data.push_str(&format!(
            ">{i:04}_A mol:protein length:48  BENCH\nACGTACGTACGTACGTACGTACGT\nNNGGCCTTAAGGCCTTAAGGCCTT\n"
        ));
    }
    data
}

fn bench_parse(c: &mut Criterion) {
    let data = sample(2000);
    c.bench_function("parse_2000_multiline", |b| {
        b.iter(|| {
            let rdr = BufReader::new(Cursor::new(data.clone().into_bytes()));
            let set = FastaReader::from_bufread(rdr).read_all().unwrap();
            set.len()
        })
    });
}

fn bench_report(c: &mut Criterion) {
    let data = sample(2000);
    let set = FastaReader::from_bufread(Cursor::new(data.into_bytes()))
        .read_all()
        .unwrap();
    c.bench_function("report_2000", |b| {
        b.iter(|| {
            let mut out = Vec::<u8>::with_capacity(128 * 1024);
            write_report(&set, &mut out, &ReportOptions::default()).unwrap();
            out.len()
        })
    });
}

criterion_group!(benches, bench_parse, bench_report);
criterion_main!(benches);
