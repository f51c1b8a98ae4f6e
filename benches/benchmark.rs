//! Performance benchmarks for rs-inner-text.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Text collection over a prebuilt tree (the core walk only)
//! - Parsing plus collection for a small HTML page
//! - Scaling with the number of table rows

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_inner_text::{dom, html_to_text, to_text, to_text_with_options, Node, Options, Whitespace};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <style>p { color: red }</style>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample   Article Title</h1>
        <p>This is the first paragraph of the article. It contains some
        meaningful content,	with tabs and   runs of spaces.</p>
        <p>Here is a second paragraph.<br>It has a line break.</p>
        <pre>  preformatted
    text stays</pre>
        <table>
            <caption>Figures</caption>
            <tr><th>Name</th><th>Value</th></tr>
            <tr><td>Alpha</td><td>1</td></tr>
        </table>
    </article>
    <dialog>Closed dialog</dialog>
</body>
</html>
"#;

fn table(rows: usize) -> Node {
    let rows = (0..rows)
        .map(|index| {
            Node::element(
                "tr",
                vec![
                    Node::element("td", vec![Node::text(format!("row {index}"))]),
                    Node::element("td", vec![Node::text("  value\n ")]),
                ],
            )
        })
        .collect();
    Node::element("table", rows)
}

fn bench_to_text_tree(c: &mut Criterion) {
    let tree = dom::from_html(SAMPLE_HTML);

    c.bench_function("to_text_tree", |b| {
        b.iter(|| to_text(black_box(&tree)));
    });
}

fn bench_to_text_pre(c: &mut Criterion) {
    let tree = dom::from_html(SAMPLE_HTML);
    let options = Options {
        whitespace: Whitespace::PreWrap,
    };

    c.bench_function("to_text_pre_wrap", |b| {
        b.iter(|| to_text_with_options(black_box(&tree), black_box(&options)));
    });
}

fn bench_html_to_text(c: &mut Criterion) {
    c.bench_function("html_to_text", |b| {
        b.iter(|| html_to_text(black_box(SAMPLE_HTML)));
    });
}

fn bench_table_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_rows");

    for rows in [10, 100, 1000] {
        let tree = table(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &tree, |b, tree| {
            b.iter(|| to_text(black_box(tree)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_text_tree,
    bench_to_text_pre,
    bench_html_to_text,
    bench_table_rows
);
criterion_main!(benches);
