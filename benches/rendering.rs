use criterion::{Criterion, criterion_group, criterion_main};
use framelog::fmt::{format_json, format_object, format_xml, substitute};
use framelog::printer::{Frame, render_lines};
use framelog::{Backend, Config, Level, Printer};
use serde::Serialize;
use std::hint::black_box;
use std::sync::Arc;

/// Discards everything so only rendering and dispatch are measured.
struct NullBackend;

impl Backend for NullBackend {
    fn verbose(&self, _tag: &str, _line: &str) {}
    fn debug(&self, _tag: &str, _line: &str) {}
    fn info(&self, _tag: &str, _line: &str) {}
    fn warn(&self, _tag: &str, _line: &str) {}
    fn error(&self, _tag: &str, _line: &str) {}
    fn assert(&self, _tag: &str, _line: &str) {}
}

#[derive(Serialize)]
struct Order {
    id: u32,
    items: Vec<&'static str>,
    paid: bool,
}

fn bench_substitute(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitute");

    group.bench_function("no_args", |b| {
        b.iter(|| substitute(black_box("plain message without placeholders"), &[]));
    });

    group.bench_function("mixed", |b| {
        b.iter(|| {
            substitute(
                black_box("user %s logged in from {} after {0} attempts (100%%)"),
                &[&"alice", &"10.0.0.1"],
            )
        });
    });

    group.finish();
}

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");

    let json = r#"{"id":1,"name":"framelog","tags":["a","b"],"nested":{"ok":true}}"#;
    group.bench_function("json", |b| {
        b.iter(|| format_json(black_box(json)));
    });

    let xml = r#"<?xml version="1.0"?><order id="1"><item>a</item><item>b</item></order>"#;
    group.bench_function("xml", |b| {
        b.iter(|| format_xml(black_box(xml)));
    });

    let order = Order {
        id: 7,
        items: vec!["apple", "pear"],
        paid: true,
    };
    group.bench_function("object", |b| {
        b.iter(|| format_object(black_box(Some(&order))));
    });

    group.finish();
}

fn bench_render_lines(c: &mut Criterion) {
    let callers = vec![
        Frame::new("app::server::Server::start", "src/server.rs", 42),
        Frame::new("app::main", "src/main.rs", 10),
    ];
    let fragments = vec!["{\n    \"id\": 1\n}".to_string()];

    c.bench_function("render_lines", |b| {
        b.iter(|| {
            render_lines(
                black_box("request failed\nretrying in 5s"),
                black_box(&fragments),
                2,
                black_box(&callers),
            )
        });
    });
}

fn bench_printer(c: &mut Criterion) {
    let mut group = c.benchmark_group("Printer::log");

    let mut config = Config::default();
    config
        .method_count(0)
        .show_thread_info(false)
        .add_logger(Arc::new(NullBackend));
    let printer = Printer::new(config);

    group.bench_function("single_line", |b| {
        b.iter(|| printer.info(black_box("hello %s"), &[&"world"]));
    });

    group.bench_function("filtered", |b| {
        printer.configure(|config| {
            config.log_level(Level::Error);
        });
        b.iter(|| printer.debug(black_box("dropped"), &[]));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_substitute,
    bench_formatters,
    bench_render_lines,
    bench_printer
);
criterion_main!(benches);
