// File: crates/perfchart-core/tests/snapshot.rs
// Purpose: Repeatable rendering of a box-plot figure.
// Behavior:
// - Renders a fixed box-plot and line figure to PNG bytes with labels disabled.
// - Two renders must match byte for byte and decode to the same pixels.

use perfchart_core::{compute_range_and_ticks, Axis, BoxSeries, Figure, GridLines, LineSeries, Marker, Plot, RenderOptions};

fn render_bytes() -> Vec<u8> {
    let samples = vec![
        vec![1.1, 2.4, 2.4, 2.5, 2.7, 4.9, 18.0],
        vec![1.1, 2.3, 2.4, 2.6, 3.9, 8.2],
        vec![1.5, 2.5, 2.6, 15.6, 43.9, 59.5],
    ];
    let mut boxes = Plot::new("dist", Axis::new("x", -0.5, 2.5), Axis::from_log_axis("y", compute_range_and_ticks(&samples, 0.1)));
    boxes.grid = GridLines::YOnly;
    boxes.add_series(BoxSeries::from_samples(&samples));

    let mut line = Plot::new("p50", Axis::log2("x", 48.0, 320.0), Axis::new("y", 0.0, 4.0));
    line.add_series(LineSeries::new(vec![(64.0, 2.4), (128.0, 2.35), (256.0, 2.4)]).marker(Marker::Pentagon));

    let mut fig = Figure::new(1, 2);
    fig.add_plot(boxes);
    fig.add_plot(line);

    // avoid text nondeterminism across platforms
    let opts = RenderOptions { width: 480, height: 240, draw_labels: false, ..RenderOptions::default() };
    fig.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_bytes(), render_bytes());
}

#[test]
fn both_cells_receive_ink() {
    let img = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (480, 240));
    let bg = *img.get_pixel(0, 0);
    for half in [0..240u32, 240..480u32] {
        let inked = half.clone().flat_map(|x| (0..240u32).map(move |y| (x, y))).filter(|&(x, y)| *img.get_pixel(x, y) != bg).count();
        assert!(inked > 500, "cell {half:?} is nearly blank ({inked} px)");
    }
}
