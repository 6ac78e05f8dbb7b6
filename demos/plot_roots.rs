//! Solve a polynomial and draw its roots on the complex plane.
//!
//! ```bash
//! cargo run --example plot_roots -- "1 0 -2 1"
//! ```
//!
//! The plot is written to `temp/roots.html`.

use plotly::{
    color::NamedColor,
    common::{Marker, MarkerSymbol, Mode, Title},
    layout::Axis,
    Layout, Plot, Scatter,
};
use poly_solve::{solve_str, PlotFrame, SolverConfig};

fn main() -> anyhow::Result<()> {
    let _ = simple_logger::init_with_level(log::Level::Info);

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1, 0, -2, 1".to_owned());
    let roots = solve_str(&text, &SolverConfig::default())?;
    log::info!("{} roots, {:?}", roots.len(), roots.method());

    let frame = PlotFrame::new(&roots);
    let points = frame.default_points();
    let (re, im, labels) = points.into_iter().fold(
        (vec![], vec![], vec![]),
        |(mut re, mut im, mut labels), p| {
            re.push(p.re);
            im.push(p.im);
            labels.push(p.label);
            (re, im, labels)
        },
    );

    let mut plot = Plot::new();
    let trace = Scatter::new(re, im)
        .mode(Mode::MarkersText)
        .text_array(labels)
        .marker(
            Marker::new()
                .symbol(MarkerSymbol::CircleOpen)
                .size(12)
                .color(NamedColor::Red),
        )
        .name("roots");
    plot.add_trace(trace);

    let range = vec![-frame.limit(), frame.limit()];
    plot.set_layout(
        Layout::new()
            .title(Title::with_text(&format!("roots of {text}")))
            .x_axis(Axis::new().title(Title::with_text("Re")).range(range.clone()))
            .y_axis(Axis::new().title(Title::with_text("Im")).range(range)),
    );

    std::fs::create_dir_all("temp")?;
    plot.write_html("temp/roots.html");
    Ok(())
}
