use std::fs;
use std::path::Path;

use anyhow::Result;
use float_cmp::assert_approx_eq;
use gibbs_core::{
    compute_layout, parse_energy_text, prepare_profiles, EnergyPoint, EnergySeries, GibbsError,
    LayoutConfig, ParseOptions, ZeroReference,
};
use rstest::rstest;

fn load_fixture(name: &str) -> Result<EnergySeries> {
    let path = Path::new("tests/data").join(name);
    let contents = fs::read_to_string(path)?;
    Ok(parse_energy_text(&contents, &ParseOptions::default())?)
}

#[rstest]
#[case("mechanism_a.txt", 5)]
#[case("mechanism_b.txt", 3)]
#[case("flat.txt", 3)]
fn test_layout_counts(#[case] name: &str, #[case] n: usize) -> Result<()> {
    let series = load_fixture(name)?.zeroed_with(ZeroReference::First);
    let layout = compute_layout(&series, &LayoutConfig::default())?;
    assert_eq!(layout.plateau_segments.len(), n);
    assert_eq!(layout.connector_segments.len(), n - 1);
    assert_eq!(layout.label_anchors.len(), n);
    Ok(())
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
#[case(40)]
fn test_layout_counts_for_generated_series(#[case] n: usize) -> Result<()> {
    let points = (0..n)
        .map(|i| EnergyPoint::new(format!("S{i}"), (i as f64 * 1.7).sin() * 10.0))
        .collect();
    let layout = compute_layout(&EnergySeries::load(points)?, &LayoutConfig::default())?;
    assert_eq!(layout.plateau_segments.len(), n);
    assert_eq!(layout.connector_segments.len(), n - 1);
    assert_eq!(layout.label_anchors.len(), n);

    for (i, connector) in layout.connector_segments.iter().enumerate() {
        assert_eq!(connector.y_start, layout.plateau_segments[i].y_end);
        assert_eq!(connector.y_end, layout.plateau_segments[i + 1].y_start);
        assert_eq!(connector.x_start, layout.plateau_segments[i].x_end);
        assert_eq!(connector.x_end, layout.plateau_segments[i + 1].x_start);
    }
    Ok(())
}

#[test]
fn test_single_mechanism_from_file() -> Result<()> {
    let raw = load_fixture("mechanism_a.txt")?;
    let prepared = prepare_profiles(&[raw], &LayoutConfig::default(), 1.2)?;

    let layout = &prepared.layouts[0];
    assert_eq!(layout.label_anchors[1].text, "TS1");

    // Span is 18.4 - (-12.1) = 30.5, bump is 5% of it
    let bump = 0.05 * 30.5;
    assert_approx_eq!(f64, layout.label_anchors[0].y, -bump, epsilon = 1e-9);
    assert_approx_eq!(f64, layout.label_anchors[1].y, 18.4 + bump, epsilon = 1e-9);
    assert_approx_eq!(f64, layout.label_anchors[2].y, -5.2 - bump, epsilon = 1e-9);

    // Plateau extent [-12.1, 18.4] widened by 20%
    let center = (18.4 - 12.1) / 2.0;
    assert_approx_eq!(f64, prepared.y_range.min, center - 15.25 * 1.2, epsilon = 1e-9);
    assert_approx_eq!(f64, prepared.y_range.max, center + 15.25 * 1.2, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_overlay_from_files() -> Result<()> {
    let raw = vec![
        load_fixture("mechanism_a.txt")?,
        load_fixture("mechanism_b.txt")?,
    ];
    let prepared = prepare_profiles(&raw, &LayoutConfig::default(), 1.2)?;

    assert_eq!(prepared.normalization.zero_reference, -2.0);
    assert_approx_eq!(f64, prepared.normalization.global_min, -13.5, epsilon = 1e-9);
    assert_approx_eq!(f64, prepared.normalization.global_max, 20.4, epsilon = 1e-9);

    let first: Vec<_> = prepared.series[0].energies().collect();
    assert_approx_eq!(f64, first[0], 2.0);
    let second: Vec<_> = prepared.series[1].energies().collect();
    assert_approx_eq!(f64, second[0], 0.0);
    Ok(())
}

#[test]
fn test_malformed_file_reports_line() -> Result<()> {
    let err = load_fixture("malformed.txt").unwrap_err();
    let err = err.downcast::<GibbsError>()?;
    assert_eq!(
        err,
        GibbsError::MalformedInput {
            line: 3,
            reason: "energy \"2.0;\" is not a number".to_string(),
        }
    );
    Ok(())
}

#[test]
fn test_flat_file_labels_on_line() -> Result<()> {
    let series = load_fixture("flat.txt")?.zeroed_with(ZeroReference::First);
    let layout = compute_layout(&series, &LayoutConfig::default())?;
    for anchor in &layout.label_anchors {
        assert_eq!(anchor.y, 0.0);
    }
    Ok(())
}
