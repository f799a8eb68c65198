// src/main.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use labfit::constants::{
    DIAL_GAUGE_ERROR_MM, DEFAULT_DISTANCE_TIME_KEY, DEFAULT_VELOCITY_KEY, MASS_INSTRUMENTAL_ERROR_G,
    MICROMETER_ERROR_MM, RULER_INSTRUMENTAL_ERROR_CM, RULER_PARALLAX_ERROR_CM,
    STANDARD_GRAVITY_M_S2, TIMER_INSTRUMENTAL_ERROR_S, WIRE_LENGTH_ERROR_MM,
};
use labfit::data_analysis::distance_time::{DistanceTimeAnalysis, TimingErrorSettings};
use labfit::data_analysis::wire_strain::{WireErrorSettings, WireStrainAnalysis};
use labfit::data_input::json_loader::{load_timed_samples, load_wire_setup};
use labfit::plot_functions::plot_distance_vs_time_squared::plot_distance_vs_time_squared;
use labfit::plot_functions::plot_strain_vs_force::plot_strain_vs_force;
use labfit::report::{export_points_csv, free_fall_report, times_report, wire_report};

#[derive(Parser)]
#[command(name = "labfit")]
#[command(version = labfit::crate_version())]
#[command(
    about = "Error propagation, linear fits and error-bar plots for lab measurements",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the mean time and total error of every timed sample
    Times {
        /// Measurement JSON file
        input: PathBuf,

        /// Measurement set inside the file
        #[arg(long, default_value = DEFAULT_VELOCITY_KEY)]
        key: String,

        #[command(flatten)]
        errors: TimingErrorArgs,
    },

    /// Fit drop height against time squared and derive g
    FreeFall {
        /// Measurement JSON file
        input: PathBuf,

        /// Measurement set inside the file
        #[arg(long, default_value = DEFAULT_DISTANCE_TIME_KEY)]
        key: String,

        #[command(flatten)]
        errors: TimingErrorArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fit wire strain against weight and derive the elastic modulus
    Wire {
        /// Wire setup JSON file
        input: PathBuf,

        #[command(flatten)]
        errors: WireErrorArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct TimingErrorArgs {
    /// Stopwatch instrumental error (s)
    #[arg(long, default_value_t = TIMER_INSTRUMENTAL_ERROR_S)]
    timer_error: f64,

    /// Ruler instrumental error (cm)
    #[arg(long, default_value_t = RULER_INSTRUMENTAL_ERROR_CM)]
    distance_error: f64,

    /// Parallax error when reading the ruler (cm)
    #[arg(long, default_value_t = RULER_PARALLAX_ERROR_CM)]
    parallax_error: f64,
}

impl From<&TimingErrorArgs> for TimingErrorSettings {
    fn from(args: &TimingErrorArgs) -> Self {
        Self {
            timer_instrumental_s: args.timer_error,
            distance_instrumental_cm: args.distance_error,
            distance_parallax_cm: args.parallax_error,
        }
    }
}

#[derive(Args)]
struct WireErrorArgs {
    /// Scale error per load (g)
    #[arg(long, default_value_t = MASS_INSTRUMENTAL_ERROR_G)]
    mass_error: f64,

    /// Error on the unloaded wire length (mm)
    #[arg(long, default_value_t = WIRE_LENGTH_ERROR_MM)]
    length_error: f64,

    /// Micrometer error on the diameter (mm)
    #[arg(long, default_value_t = MICROMETER_ERROR_MM)]
    diameter_error: f64,

    /// Dial gauge error on the elongation (mm)
    #[arg(long, default_value_t = DIAL_GAUGE_ERROR_MM)]
    elongation_error: f64,

    /// Gravitational acceleration used for the weights (m/s²)
    #[arg(long, default_value_t = STANDARD_GRAVITY_M_S2)]
    gravity: f64,
}

impl From<&WireErrorArgs> for WireErrorSettings {
    fn from(args: &WireErrorArgs) -> Self {
        Self {
            mass_instrumental_g: args.mass_error,
            wire_length_mm: args.length_error,
            micrometer_mm: args.diameter_error,
            elongation_mm: args.elongation_error,
            gravity_m_s2: args.gravity,
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Directory for the plot and exported tables
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write the plotted points as CSV
    #[arg(long)]
    export_csv: bool,

    /// Skip rendering the PNG plot
    #[arg(long)]
    no_plot: bool,
}

fn root_name(input: &Path) -> String {
    input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}

fn prepare_output_dir(output: &OutputArgs) -> Result<(), Box<dyn Error>> {
    if output.no_plot && !output.export_csv {
        return Ok(());
    }
    fs::create_dir_all(&output.output_dir)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Times { input, key, errors } => {
            let samples = load_timed_samples(&input, &key)?;
            let analysis =
                DistanceTimeAnalysis::from_samples(&samples, &TimingErrorSettings::from(&errors))?;
            print!("{}", times_report(&analysis));
        }
        Commands::FreeFall {
            input,
            key,
            errors,
            output,
        } => {
            let samples = load_timed_samples(&input, &key)?;
            let analysis =
                DistanceTimeAnalysis::from_samples(&samples, &TimingErrorSettings::from(&errors))?;
            let result = analysis.fit_distance_vs_time_squared()?;
            print!("{}", free_fall_report(&analysis, &result));

            prepare_output_dir(&output)?;
            let root = root_name(&input);
            if output.export_csv {
                let csv_path = output
                    .output_dir
                    .join(format!("{root}_distance_vs_time_squared.csv"));
                export_points_csv(&csv_path, &result.series, &result.fit)?;
            }
            if !output.no_plot {
                let png = plot_distance_vs_time_squared(&result, &root, &output.output_dir)?;
                println!("Plot: {}", png.display());
            }
        }
        Commands::Wire {
            input,
            errors,
            output,
        } => {
            let setup = load_wire_setup(&input)?;
            let settings = WireErrorSettings::from(&errors);
            let analysis = WireStrainAnalysis::from_setup(&setup, &settings)?;
            let result = analysis.fit_strain_vs_force()?;
            print!("{}", wire_report(&analysis, &result));

            prepare_output_dir(&output)?;
            let root = root_name(&input);
            if output.export_csv {
                let csv_path = output.output_dir.join(format!("{root}_strain_vs_force.csv"));
                export_points_csv(&csv_path, &result.series, &result.fit)?;
            }
            if !output.no_plot {
                let png = plot_strain_vs_force(&result, &root, &output.output_dir)?;
                println!("Plot: {}", png.display());
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::debug!("labfit {}", labfit::crate_version());

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
