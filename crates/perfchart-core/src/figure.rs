// File: crates/perfchart-core/src/figure.rs
// Summary: Figure (grid of subplots) and headless PNG rendering pipeline using Skia CPU raster surfaces.

use log::debug;
use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::{grid_cells, RectI32};
use crate::plot::Plot;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const FIGURE_TITLE_SIZE: f32 = 20.0;
const FIGURE_TITLE_BAND: i32 = 40;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins inside each subplot cell, around its axes.
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to skip all text (deterministic output across font setups).
    pub draw_labels: bool,
    /// Outer padding of the figure.
    pub padding: i32,
    /// Space between subplot cells.
    pub gap: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            padding: 16,
            gap: 16,
        }
    }
}

/// `rows x cols` subplots filled row-major.
#[derive(Clone, Debug)]
pub struct Figure {
    pub rows: usize,
    pub cols: usize,
    pub plots: Vec<Plot>,
    pub title: Option<String>,
}

impl Figure {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, plots: Vec::new(), title: None }
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.plots.push(plot);
    }

    fn validate(&self, opts: &RenderOptions) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ChartError::InvalidLayout(format!("{}x{} grid has no cells", self.rows, self.cols)));
        }
        if self.plots.len() > self.rows * self.cols {
            return Err(ChartError::InvalidLayout(format!(
                "{} plots do not fit a {}x{} grid",
                self.plots.len(),
                self.rows,
                self.cols
            )));
        }
        if opts.width <= 0 || opts.height <= 0 {
            return Err(ChartError::InvalidLayout(format!("figure size {}x{} is empty", opts.width, opts.height)));
        }
        Ok(())
    }

    /// Render the figure and return PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.validate(opts)?;
        debug!("rendering {}x{} figure with {} plots", opts.width, opts.height, self.plots.len());

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let text = TextShaper::new();
        let mut area = RectI32::from_ltwh(0, 0, opts.width, opts.height).inset(&Insets::uniform(opts.padding.max(0) as u32));
        if let Some(title) = &self.title {
            if opts.draw_labels {
                let cx = (area.left + area.right) as f32 * 0.5;
                let baseline = (area.top + FIGURE_TITLE_BAND) as f32 - 12.0;
                text.draw_styled(canvas, title, cx, baseline, FIGURE_TITLE_SIZE, opts.theme.title, Align::Center, true);
            }
            area.top = (area.top + FIGURE_TITLE_BAND).min(area.bottom);
        }

        for (plot, cell) in self.plots.iter().zip(grid_cells(area, self.rows, self.cols, opts.gap)) {
            plot.render(canvas, cell, opts, &text);
        }

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    #[test]
    fn too_many_plots_is_a_layout_error() {
        let mut fig = Figure::new(1, 1);
        for _ in 0..2 {
            fig.add_plot(Plot::new("p", Axis::new("x", 0.0, 1.0), Axis::new("y", 0.0, 1.0)));
        }
        let err = fig.render_to_png_bytes(&RenderOptions::default()).unwrap_err();
        assert!(matches!(err, ChartError::InvalidLayout(_)));
    }

    #[test]
    fn empty_size_is_rejected_before_allocating() {
        let opts = RenderOptions { width: 0, ..RenderOptions::default() };
        assert!(Figure::new(2, 2).render_to_png_bytes(&opts).is_err());
    }
}
