// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, ErrorBar, PathElement};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLOR_DATA_POINT, COLOR_ERROR_BAR, COLOR_FIT_LINE, ERROR_BAR_CAP_WIDTH, LINE_WIDTH_LEGEND,
    LINE_WIDTH_PLOT, MIN_RANGE_SPAN, PLOT_HEIGHT, PLOT_WIDTH, POINT_MARKER_SIZE,
    RANGE_PADDING_FRACTION, SCI_NOTATION_LOWER, SCI_NOTATION_UPPER,
};
use crate::data_analysis::regression::LinearFit;
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND};
use crate::report::fit_equation_label;
use crate::types::{ErrorBarSeries, PlotPoint};

/// Calculate plot range with padding.
/// Adds 15% padding, or a padding proportional to the value when the range collapses.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < MIN_RANGE_SPAN {
        let center = 0.5 * (min + max);
        if center == 0.0 {
            0.5
        } else {
            center.abs() * 0.1
        }
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Tick label text: scientific notation for very small or large magnitudes,
/// fixed notation with magnitude-dependent precision otherwise.
pub fn format_axis_value(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let magnitude = v.abs();
    if !(SCI_NOTATION_LOWER..SCI_NOTATION_UPPER).contains(&magnitude) {
        format!("{v:.1e}")
    } else if magnitude >= 100.0 {
        format!("{v:.0}")
    } else if magnitude >= 10.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.2}")
    }
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// Everything needed to draw one error-bar scatter with its fitted line.
#[derive(Clone)]
pub struct FitPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub points: Vec<PlotPoint>,
    pub points_label: String,
    pub fit_line: PlotSeries,
    pub x_label: String,
    pub y_label: String,
}

/// Draws the scatter, error bars, fitted line and legend on `area`.
pub fn draw_fit_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    plot_config: &FitPlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let fit = &plot_config.fit_line;
    if !fit.data.is_empty() {
        let series = chart.draw_series(LineSeries::new(
            fit.data.iter().cloned(),
            fit.color.stroke_width(fit.stroke_width),
        ))?;
        if !fit.label.is_empty() {
            let legend_color = fit.color;
            series.label(&fit.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    legend_color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
        }
    }

    // Error bars go under the markers
    let bar_style = COLOR_ERROR_BAR.stroke_width(1);
    chart.draw_series(plot_config.points.iter().map(|&(x, _, y, y_err)| {
        ErrorBar::new_vertical(x, y - y_err, y, y + y_err, bar_style, ERROR_BAR_CAP_WIDTH)
    }))?;
    chart.draw_series(plot_config.points.iter().map(|&(x, x_err, y, _)| {
        ErrorBar::new_horizontal(y, x - x_err, x, x + x_err, bar_style, ERROR_BAR_CAP_WIDTH)
    }))?;

    let marker_color = *COLOR_DATA_POINT;
    chart
        .draw_series(
            plot_config
                .points
                .iter()
                .map(|&(x, _, y, _)| Circle::new((x, y), POINT_MARKER_SIZE, marker_color.filled())),
        )?
        .label(&plot_config.points_label)
        .legend(move |(x, y)| Circle::new((x + 10, y), POINT_MARKER_SIZE, marker_color.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(FONT_TUPLE_LEGEND)
        .draw()?;

    Ok(())
}

/// Renders a single fit chart to a PNG file.
pub fn draw_fit_plot(
    output_path: &Path,
    plot_config: &FitPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
        && plot_config.y_range.end > plot_config.y_range.start;
    if plot_config.points.is_empty() || !valid_ranges {
        return Err(format!(
            "cannot draw '{}': no data points or invalid ranges",
            plot_config.title
        )
        .into());
    }

    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw_fit_chart(&root_area, plot_config)?;
    root_area.present()?;
    log::info!("Plot saved as '{}'.", output_path.display());
    Ok(())
}

/// Default style for a fitted line series.
pub fn fit_line_series(data: Vec<(f64, f64)>, label: String) -> PlotSeries {
    PlotSeries {
        data,
        label,
        color: *COLOR_FIT_LINE,
        stroke_width: LINE_WIDTH_PLOT,
    }
}

/// Builds the chart description for `series` and its fitted line.
///
/// The line spans the x data range; both axis ranges cover every error bar
/// and the line end points. Returns `None` for an empty series.
pub fn build_fit_plot_config(
    series: &ErrorBarSeries,
    fit: &LinearFit,
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Option<FitPlotConfig> {
    let (x_data_min, x_data_max) = series.x_data_bounds()?;
    let fit_data = fit.line_over(x_data_min, x_data_max);

    let (x_min, x_max) = series.x_bounds()?;
    let (mut y_min, mut y_max) = series.y_bounds()?;
    for &(_, y) in &fit_data {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);

    Some(FitPlotConfig {
        title: title.to_string(),
        x_range: x_lo..x_hi,
        y_range: y_lo..y_hi,
        points: series.points(),
        points_label: "Experimental points".to_string(),
        fit_line: fit_line_series(fit_data, fit_equation_label(fit)),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_fifteen_percent() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo + 1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_swapped_and_collapsed() {
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!(lo < 0.0 && hi > 10.0);

        // A single strain value must keep its own scale
        let (lo, hi) = calculate_range(2.5e-4, 2.5e-4);
        assert!((lo - 2.25e-4).abs() < 1e-15);
        assert!((hi - 2.75e-4).abs() < 1e-15);

        assert_eq!(calculate_range(0.0, 0.0), (-0.5, 0.5));
    }

    #[test]
    fn test_build_fit_plot_config_covers_error_bars() {
        use crate::data_analysis::regression::linear_regression;
        use ndarray::array;

        let series = ErrorBarSeries::new(
            array![1.0, 2.0, 3.0],
            array![0.5, 0.5, 0.5],
            array![2.0, 4.1, 5.9],
            array![1.0, 1.0, 1.0],
        )
        .unwrap();
        let fit = linear_regression(series.x.view(), series.y.view()).unwrap();
        let config = build_fit_plot_config(&series, &fit, "T", "x", "y").unwrap();

        assert!(config.x_range.start < 0.5 && config.x_range.end > 3.5);
        assert!(config.y_range.start < 1.0 && config.y_range.end > 6.9);
        assert_eq!(config.fit_line.data.len(), 2);
        assert_eq!(config.fit_line.data[0].0, 1.0);
        assert_eq!(config.fit_line.data[1].0, 3.0);
        assert!(config.fit_line.label.starts_with("Fit: y = ("));
        assert_eq!(config.points.len(), 3);
    }

    #[test]
    fn test_draw_fit_plot_rejects_empty_config() {
        let config = FitPlotConfig {
            title: "empty".to_string(),
            x_range: 0.0..1.0,
            y_range: 0.0..1.0,
            points: vec![],
            points_label: String::new(),
            fit_line: fit_line_series(vec![], String::new()),
            x_label: String::new(),
            y_label: String::new(),
        };
        let result = draw_fit_plot(Path::new("unused.png"), &config);
        assert!(result.is_err());
        assert!(!Path::new("unused.png").exists());
    }
}

// src/plot_framework.rs
