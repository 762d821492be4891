//! End-to-end behaviour of the fit / query / persistence path through the
//! public library API.

use gumbel_wind::data::{SampleConfig, generate_sample};
use gumbel_wind::domain::{DataPoint, GumbelParameters, PlotScale, QueryKind};
use gumbel_wind::engine::{Project, QueryEngine};
use gumbel_wind::error::GumbelError;
use gumbel_wind::io::{load_project, project_from_json, read_points_csv, save_project};
use gumbel_wind::math::reduced_variate;
use gumbel_wind::models::{evaluate, fit, invert};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

fn scenario_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(30.0, 10.0),
        DataPoint::new(35.0, 50.0),
        DataPoint::new(40.0, 100.0),
    ]
}

/// Plain closed-form simple regression of V on y, for cross-checking.
fn closed_form(points: &[DataPoint]) -> (f64, f64) {
    let ys: Vec<f64> = points.iter().map(|p| reduced_variate(p.return_period).unwrap()).collect();
    let n = points.len() as f64;
    let my = ys.iter().sum::<f64>() / n;
    let mv = points.iter().map(|p| p.wind_speed).sum::<f64>() / n;
    let sxy: f64 = ys.iter().zip(points).map(|(y, p)| (y - my) * (p.wind_speed - mv)).sum();
    let sxx: f64 = ys.iter().map(|y| (y - my) * (y - my)).sum();
    let slope = sxy / sxx;
    (mv - slope * my, slope)
}

#[test]
fn three_point_fit_matches_closed_form_regression() {
    let points = scenario_points();
    let params = fit(&points).unwrap();
    let (mu, scale) = closed_form(&points);

    assert!((params.mu - mu).abs() < 1e-9, "mu {} vs {mu}", params.mu);
    assert!((params.scale - scale).abs() < 1e-9, "scale {} vs {scale}", params.scale);
    assert!((params.mu - 20.54).abs() < 0.01);
    assert!((params.scale - 4.034).abs() < 0.01);
}

#[test]
fn period_and_speed_queries_round_trip() {
    let params = fit(&scenario_points()).unwrap();
    let mut engine = QueryEngine::with_model(params);

    let by_period = engine.query_by_period(100.0).unwrap();
    assert_eq!(by_period.kind, QueryKind::FromPeriod);
    assert_eq!(by_period.return_period, 100.0);

    let by_speed = engine.query_by_speed(by_period.wind_speed).unwrap();
    assert_eq!(by_speed.kind, QueryKind::FromSpeed);
    assert!((by_speed.return_period - 100.0).abs() < 1e-6 * 100.0);

    let v40 = engine.query_by_speed(40.0).unwrap();
    assert!(v40.return_period > 50.0 && v40.return_period < 200.0);
    let back = engine.query_by_period(v40.return_period).unwrap();
    assert!((back.wind_speed - 40.0).abs() < 1e-9, "V={}", back.wind_speed);
    assert_eq!(engine.list_queried_points().len(), 4);
}

#[test]
fn fitting_needs_two_points() {
    assert_eq!(fit(&[]), Err(GumbelError::InsufficientData { found: 0 }));
    assert_eq!(
        fit(&[DataPoint::new(30.0, 10.0)]),
        Err(GumbelError::InsufficientData { found: 1 })
    );
}

#[test]
fn evaluate_and_invert_reject_out_of_domain_values() {
    let params = GumbelParameters { mu: 20.0, scale: 4.0 };
    assert!(matches!(
        evaluate(&params, 1.0),
        Err(GumbelError::InvalidReturnPeriod { .. })
    ));
    assert!(matches!(invert(&params, 0.0), Err(GumbelError::InvalidWindSpeed { .. })));
    assert!(matches!(invert(&params, -3.0), Err(GumbelError::InvalidWindSpeed { .. })));
}

#[test]
fn fit_does_not_depend_on_point_order() {
    let config = SampleConfig {
        params: GumbelParameters { mu: 30.0, scale: 5.0 },
        years: 40,
        seed: 11,
    };
    let points = generate_sample(&config).unwrap();
    let reference = fit(&points).unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10 {
        let mut shuffled = points.clone();
        shuffled.shuffle(&mut rng);
        let params = fit(&shuffled).unwrap();
        assert!((params.mu - reference.mu).abs() < 1e-9 * reference.mu.abs().max(1.0));
        assert!((params.scale - reference.scale).abs() < 1e-9 * reference.scale.abs().max(1.0));
    }
}

#[test]
fn refit_replaces_model_and_clears_queries() {
    let mut project = Project::from_points(scenario_points());
    let first = project.fit().unwrap();
    project.query_by_period(500.0).unwrap();
    project.query_by_speed(42.0).unwrap();
    assert_eq!(project.queried_points().len(), 2);

    project.add_point(DataPoint::new(45.0, 500.0));
    // Adding a point alone does not refit.
    assert_eq!(project.params(), Some(&first));
    assert_eq!(project.queried_points().len(), 2);

    let second = project.fit().unwrap();
    assert_ne!(first, second);
    assert!(project.queried_points().is_empty());
}

#[test]
fn project_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("station.gblproj");

    let mut project = Project::from_points(scenario_points());
    project.fit().unwrap();
    project.query_by_period(200.0).unwrap();
    project.query_by_speed(38.0).unwrap();
    project.set_plot_scale(PlotScale::Linear);
    save_project(&path, &project).unwrap();

    let loaded = load_project(&path, false).unwrap();
    assert_eq!(loaded.points(), project.points());
    assert_eq!(loaded.params(), project.params());
    assert_eq!(loaded.queried_points(), project.queried_points());
    assert_eq!(loaded.plot_scale(), PlotScale::Linear);

    let refit = load_project(&path, true).unwrap();
    assert!(refit.queried_points().is_empty());
    assert!(refit.params().is_some());
}

#[test]
fn tampered_parameters_make_saved_queries_stale() {
    let mut project = Project::from_points(scenario_points());
    project.fit().unwrap();
    project.query_by_period(100.0).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("p.gblproj");
    save_project(&path, &project).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&text).unwrap();
    json["parameters"]["mu"] = serde_json::json!(25.0);

    let err = project_from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, GumbelError::LoadError { .. }), "{err:?}");
}

#[test]
fn csv_points_fit_like_inline_points() {
    let csv = "Return Period,Wind Speed\n10,30\n\n50,35\n100,40\n";
    let ingested = read_points_csv(csv.as_bytes()).unwrap();
    assert_eq!(ingested.points, scenario_points());

    let from_csv = fit(&ingested.points).unwrap();
    let inline = fit(&scenario_points()).unwrap();
    assert_eq!(from_csv, inline);
}

#[test]
fn extrapolation_is_monotone_in_return_period() {
    let params = fit(&scenario_points()).unwrap();
    let periods = [1.5, 2.0, 10.0, 100.0, 1_000.0, 10_000.0, 1e6];
    let speeds: Vec<f64> = periods.iter().map(|&t| evaluate(&params, t).unwrap()).collect();
    assert!(speeds.windows(2).all(|w| w[0] < w[1]));
}
