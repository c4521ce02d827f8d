//! Benchmarks for the swipe row hot paths.
//!
//! Run with: cargo bench -p sliprow-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sliprow_core::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use sliprow_core::geometry::Rect;
use sliprow_render::frame::Frame;
use sliprow_widgets::{RowId, SwipeRow, Task, Widget};
use std::hint::black_box;

fn bench_drag_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("row/drag");
    let area = Rect::from_size(80, 1);

    group.bench_function("sample", |b| {
        let mut row = SwipeRow::new(RowId(1));
        row.configure(&Task::new("benchmark row"));
        row.handle_event(
            &Event::Mouse(MouseEvent::new(
                MouseEventKind::Down(MouseButton::Left),
                40,
                0,
            )),
            area,
            &mut (),
        );
        let mut x = 40u16;
        b.iter(|| {
            x = if x >= 60 { 41 } else { x + 1 };
            let event = Event::Mouse(MouseEvent::new(
                MouseEventKind::Drag(MouseButton::Left),
                x,
                0,
            ));
            black_box(row.handle_event(&event, area, &mut ()));
        })
    });

    group.finish();
}

fn bench_row_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("row/render");

    for w in [40u16, 80, 200] {
        let area = Rect::from_size(w, 1);
        let mut frame = Frame::new(w, 1);
        let mut row = SwipeRow::new(RowId(1));
        row.configure(&Task::new("a reasonably long task title"));

        group.bench_with_input(BenchmarkId::new("at_rest", w), &(), |b, _| {
            b.iter(|| {
                frame.buffer.clear();
                row.render(area, &mut frame);
                black_box(&frame.buffer);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_sample, bench_row_render);
criterion_main!(benches);
