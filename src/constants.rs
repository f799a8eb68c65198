// src/constants.rs

use plotters::style::colors::full_palette::RED;
use plotters::style::colors::BLACK;
use plotters::style::RGBColor;

// Standard gravity (m/s^2), used to turn accumulated masses into weights.
pub const STANDARD_GRAVITY_M_S2: f64 = 9.80665;

// --- Instrument error defaults ---
// Stopwatch resolution (s).
pub const TIMER_INSTRUMENTAL_ERROR_S: f64 = 0.001;
// Ruler resolution and parallax when reading a drop height (cm).
pub const RULER_INSTRUMENTAL_ERROR_CM: f64 = 0.05;
pub const RULER_PARALLAX_ERROR_CM: f64 = 0.15;
// Scale resolution per slotted mass (g).
pub const MASS_INSTRUMENTAL_ERROR_G: f64 = 0.1;
// Tape measure on the unloaded wire length (mm).
pub const WIRE_LENGTH_ERROR_MM: f64 = 0.5;
// Micrometer on the wire diameter (mm).
pub const MICROMETER_ERROR_MM: f64 = 0.01;
// Dial gauge on the elongation (mm).
pub const DIAL_GAUGE_ERROR_MM: f64 = 0.005;

// Default measurement-set keys inside the timed-distance JSON file.
pub const DEFAULT_DISTANCE_TIME_KEY: &str = "medidas_para_s(t)";
pub const DEFAULT_VELOCITY_KEY: &str = "medidas_para_v(t)";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 960;

// Relative padding added around the data range, and the absolute fallback
// when the range collapses to a point.
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
pub const MIN_RANGE_SPAN: f64 = 1e-12;

// Tick labels switch to scientific notation outside [1e-2, 1e4).
pub const SCI_NOTATION_LOWER: f64 = 1e-2;
pub const SCI_NOTATION_UPPER: f64 = 1e4;

// --- Plot Color Assignments ---
pub const COLOR_DATA_POINT: &RGBColor = &BLACK;
pub const COLOR_ERROR_BAR: RGBColor = RGBColor(128, 128, 128);
pub const COLOR_FIT_LINE: &RGBColor = &RED;

// Marker and stroke sizes.
pub const POINT_MARKER_SIZE: u32 = 4;
pub const ERROR_BAR_CAP_WIDTH: u32 = 6;
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 32;
pub const FONT_SIZE_AXIS_LABEL: i32 = 20;
pub const FONT_SIZE_LEGEND: i32 = 20;

// src/constants.rs
