// tests/pipeline_test.rs

use std::fs;
use std::path::PathBuf;

use labfit::data_analysis::distance_time::{DistanceTimeAnalysis, TimingErrorSettings};
use labfit::data_analysis::wire_strain::{WireErrorSettings, WireStrainAnalysis};
use labfit::data_input::json_loader::{load_timed_samples, load_wire_setup};
use labfit::plot_framework::build_fit_plot_config;
use labfit::plot_functions::plot_distance_vs_time_squared::plot_distance_vs_time_squared;
use labfit::plot_functions::plot_strain_vs_force::plot_strain_vs_force;
use labfit::report::{free_fall_report, times_report, wire_report};
use labfit::LabError;

fn sample_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn test_free_fall_pipeline_on_sample_data() {
    let samples = load_timed_samples(&sample_data("dados.json"), "medidas_para_s(t)").unwrap();
    assert_eq!(samples.len(), 5);

    let analysis =
        DistanceTimeAnalysis::from_samples(&samples, &TimingErrorSettings::default()).unwrap();
    let result = analysis.fit_distance_vs_time_squared().unwrap();

    let g = result.gravity_m_s2;
    assert!(g.value > 9.5 && g.value < 10.1, "g = {}", g.value);
    assert!(g.error > 0.0 && g.error < 0.5);
    assert!(result.fit.r_squared() > 0.999);

    let report = free_fall_report(&analysis, &result);
    assert!(report.contains("Mean times (s):"));
    assert!(report.contains("Gravitational acceleration g = "));
    assert!(report.contains("m/s²"));

    let config =
        build_fit_plot_config(&result.series, &result.fit, "title", "t² (s²)", "H (cm)").unwrap();
    assert_eq!(config.points.len(), 5);
}

#[test]
fn test_wire_pipeline_on_sample_data() {
    let setup = load_wire_setup(&sample_data("wire_a.json")).unwrap();
    let analysis = WireStrainAnalysis::from_setup(&setup, &WireErrorSettings::default()).unwrap();
    let result = analysis.fit_strain_vs_force().unwrap();

    // Steel-like wire: roughly 170-180 GPa for this data
    let e = result.elastic_modulus_pa;
    assert!(e.value > 1.5e11 && e.value < 2.0e11, "E = {:e}", e.value);
    assert!(e.error > 0.0);
    assert!(result.fit.slope > 0.0);

    let report = wire_report(&analysis, &result);
    assert!(report.contains("Cross-section area A = "));
    assert!(report.contains("Elastic modulus E = "));
}

#[test]
fn test_wire_plot_written_to_png() {
    let setup = load_wire_setup(&sample_data("wire_a.json")).unwrap();
    let analysis = WireStrainAnalysis::from_setup(&setup, &WireErrorSettings::default()).unwrap();
    let result = analysis.fit_strain_vs_force().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let png = plot_strain_vs_force(&result, "wire_a", dir.path()).unwrap();
    assert_eq!(png, dir.path().join("wire_a_strain_vs_force.png"));
    let size = fs::metadata(&png).unwrap().len();
    assert!(size > 0, "empty PNG at {}", png.display());
}

#[test]
fn test_free_fall_plot_written_to_png() {
    let samples = load_timed_samples(&sample_data("dados.json"), "medidas_para_s(t)").unwrap();
    let analysis =
        DistanceTimeAnalysis::from_samples(&samples, &TimingErrorSettings::default()).unwrap();
    let result = analysis.fit_distance_vs_time_squared().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let png = plot_distance_vs_time_squared(&result, "dados", dir.path()).unwrap();
    assert_eq!(png, dir.path().join("dados_distance_vs_time_squared.png"));
    assert!(fs::metadata(&png).unwrap().len() > 0);
}

#[test]
fn test_times_report_from_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drops.json");
    fs::write(
        &path,
        r#"{"set": [
            {"distance_cm": 10.0, "times_s": [0.100, 0.102, 0.101]},
            {"distance_cm": 20.0, "times_s": [0.200]}
        ]}"#,
    )
    .unwrap();

    let samples = load_timed_samples(&path, "set").unwrap();
    let analysis =
        DistanceTimeAnalysis::from_samples(&samples, &TimingErrorSettings::default()).unwrap();
    let report = times_report(&analysis);

    // SEM 0.000577 combined with 0.001 -> 0.0012, three decimals
    assert!(report.contains("t = 0.101 ± 0.001"), "{report}");
    // Single reading keeps only the stopwatch resolution
    assert!(report.contains("t = 0.200 ± 0.001"), "{report}");
}

#[test]
fn test_malformed_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_timed_samples(&path, "set"),
        Err(LabError::Json(_))
    ));
    assert!(matches!(load_wire_setup(&path), Err(LabError::Json(_))));
}

// tests/pipeline_test.rs
