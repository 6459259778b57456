use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use iniparser::Ini;

fn generate(sections: usize, options: usize) -> String {
    let mut text = String::from("; generated\n");
    for s in 0..sections {
        text.push_str(&format!("[Section{s}] ; header\n"));
        for o in 0..options {
            match o % 4 {
                0 => text.push_str(&format!("Int{o} = {} ; number\n", o * 7)),
                1 => text.push_str(&format!("Float{o} = {}.25e1\n", o)),
                2 => text.push_str(&format!("Bool{o} = on\n")),
                _ => text.push_str(&format!("Text{o} = \"  quoted; value #{o}  \"\n")),
            }
        }
        text.push('\n');
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 50, 200].iter() {
        let text = generate(*size, 20);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| Ini::parse(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let ini = Ini::parse(&generate(50, 20));

    c.bench_function("get_case_insensitive", |b| {
        b.iter(|| ini.get(black_box("SECTION25"), black_box("TEXT19")))
    });

    c.bench_function("get_int_prefix", |b| {
        b.iter(|| ini.get_int(black_box("section25"), black_box("int16")))
    });

    c.bench_function("get_double_prefix", |b| {
        b.iter(|| ini.get_double(black_box("section25"), black_box("float17")))
    });
}

criterion_group!(benches, benchmark_parse, benchmark_lookup);
criterion_main!(benches);
