use super::*;

#[test]
fn test_round2_two_decimals() {
    assert_eq!(round2(0.801), 0.8);
    assert_eq!(round2(0.02), 0.02);
    assert_eq!(round2(0.7549), 0.75);
    assert_eq!(round2(0.0), 0.0);
}

#[test]
fn test_round2_ties_to_even() {
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(0.375), 0.38);
}

#[test]
fn test_round2_uses_stored_binary_value() {
    // 0.015 is stored as 0.01499..., 0.025 as 0.02500...
    assert_eq!(round2(0.015), 0.01);
    assert_eq!(round2(0.025), 0.03);
    assert_eq!(round2(0.045), 0.04);
    assert_eq!(round2(2.675), 2.67);
}

#[test]
fn test_round2_keeps_non_finite_values() {
    assert!(round2(f64::NAN).is_nan());
    assert_eq!(round2(f64::INFINITY), f64::INFINITY);
}

#[test]
fn test_round2_idempotent() {
    for v in [0.801, 0.02, 0.7549, 0.125, 0.999, 0.005, 0.3333333, 1.0, 0.0] {
        let once = round2(v);
        assert_eq!(round2(once), once, "value {v}");
    }
}

#[test]
fn test_chart_series_push_rounds_both_values() {
    let mut series = ChartSeries::new(Strategy::MultiEmbed);
    series.push(0.7549, 0.0251);
    series.push(0.6, 0.1);
    assert_eq!(series.averages, vec![0.75, 0.6]);
    assert_eq!(series.stds, vec![0.03, 0.1]);
    assert_eq!(series.strategy, Strategy::MultiEmbed);
}

#[test]
fn test_panel_data_series_for() {
    let panel = PanelData {
        datasets: vec!["d1".to_string()],
        series: [
            ChartSeries::new(Strategy::MultiHashEmbed),
            ChartSeries::new(Strategy::MultiEmbed),
        ],
    };
    assert_eq!(
        panel.series_for(Strategy::MultiHashEmbed).strategy,
        Strategy::MultiHashEmbed
    );
    assert_eq!(
        panel.series_for(Strategy::MultiEmbed).strategy,
        Strategy::MultiEmbed
    );
}
