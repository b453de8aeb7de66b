//! Renders a sampled curve and its approximating shapes to an image file.

use std::ops::Range;
use std::path::Path;

use log::{debug, info};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::estimation::report::EstimationReport;
use crate::plot::config::{ImageFormat, PlotCfg};
use crate::plot::errors::PlotError;

/// Fraction of the f(x) span added above and below the data.
const Y_MARGIN: f64 = 0.05;

fn render_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Widens a degenerate range so the chart has a non-zero extent.
#[inline]
fn non_degenerate(lo: f64, hi: f64) -> Range<f64> {
    if hi > lo { lo..hi } else { (lo - 1.0)..(hi + 1.0) }
}

/// Chart extents for the samples.
///
/// - x spans `[min(xs), max(xs)]`; `xs` need not be sorted
/// - f(x) spans `[min(0, fxs), max(0, fxs)]` plus [`Y_MARGIN`], so the
///   baseline every shape is drawn from stays visible
pub(crate) fn axis_bounds(xs: &[f64], fxs: &[f64]) -> (Range<f64>, Range<f64>) {
    let (x_lo, x_hi) = if xs.is_empty() {
        (0.0, 1.0)
    } else {
        xs.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
    };

    let (y_lo, y_hi) = fxs.iter().fold((0.0_f64, 0.0_f64), |(lo, hi), &y| (lo.min(y), hi.max(y)));
    let pad = (y_hi - y_lo) * Y_MARGIN;

    (non_degenerate(x_lo, x_hi), non_degenerate(y_lo - pad, y_hi + pad))
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &EstimationReport,
    xs: &[f64],
    fxs: &[f64],
    cfg: &PlotCfg,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(render_err)?;

    let (x_range, y_range) = axis_bounds(xs, fxs);
    debug!("plot bounds x={:?} f(x)={:?}", x_range, y_range);

    let mut chart = ChartBuilder::on(root)
        .caption(cfg.title(), ("sans-serif", 28).into_font().color(&BLACK))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .draw()
        .map_err(render_err)?;

    // one colour per interval
    let alpha = cfg.fill_opacity();
    chart
        .draw_series(report.shapes.iter().enumerate().map(|(i, shape)| {
            Polygon::new(shape.outline().to_vec(), Palette99::pick(i).mix(alpha).filled())
        }))
        .map_err(render_err)?
        .label(report.rule.label())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 20, y + 5)], Palette99::pick(0).mix(alpha).filled())
        });

    chart
        .draw_series(LineSeries::new(
            xs.iter().copied().zip(fxs.iter().copied()),
            BLUE.stroke_width(2),
        ))
        .map_err(render_err)?
        .label("f(x)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(xs.iter().zip(fxs).map(|(&x, &y)| Circle::new((x, y), 3, BLUE.filled())))
        .map_err(render_err)?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Draws `report`'s shapes over the curve `(xs, fxs)` and writes the image
/// to `path`.
///
/// The backend follows the file extension (see [`ImageFormat::from_path`]).
///
/// # Errors
/// - [`PlotError::MissingExtension`], [`PlotError::UnsupportedFormat`] for
///   an unusable `path`.
/// - [`PlotError::InvalidDimensions`], [`PlotError::InvalidOpacity`] from
///   [`PlotCfg::validate`].
/// - [`PlotError::Render`] if the backend fails to draw or write.
pub fn render(
    report: &EstimationReport,
    xs: &[f64],
    fxs: &[f64],
    path: &Path,
    cfg: &PlotCfg,
) -> Result<(), PlotError> {
    cfg.validate()?;
    let format = ImageFormat::from_path(path)?;
    let size = (cfg.width(), cfg.height());

    info!(
        "rendering {} ({} shapes) to {} as {:?}",
        report.rule_name,
        report.shapes.len(),
        path.display(),
        format
    );

    if format.is_bitmap() {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw(&root, report, xs, fxs, cfg)
    } else {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw(&root, report, xs, fxs, cfg)
    }
}
