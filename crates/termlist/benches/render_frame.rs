use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use std::io;
use termlist::DisplayOptions;
use termlist::SelectableList;

fn row_field(row: &(usize, String), field: &str) -> String {
    match field {
        "Id" => row.0.to_string(),
        _ => row.1.clone(),
    }
}

fn sample_list(rows: usize) -> SelectableList<(usize, String)> {
    let options = DisplayOptions::new()
        .fields(["Id", "Label"])
        .field_width(24)
        .show_header(true);
    let mut list = SelectableList::with_options(row_field, options);
    list.set_output(io::sink());
    for i in 0..rows {
        list.add_item((i, format!("The quick brown fox {i}")));
        if i % 3 == 0 {
            list.select_item(i);
        }
    }
    list
}

fn bench_frame_10k(c: &mut Criterion) {
    let list = sample_list(10_000);
    c.bench_function("frame_10k_rows", |b| {
        b.iter(|| black_box(list.frame()));
    });
}

fn bench_redraw_10k(c: &mut Criterion) {
    let mut list = sample_list(10_000);
    c.bench_function("redraw_10k_rows_to_sink", |b| {
        b.iter(|| list.redraw().expect("redraw"));
    });
}

criterion_group!(benches, bench_frame_10k, bench_redraw_10k);
criterion_main!(benches);
