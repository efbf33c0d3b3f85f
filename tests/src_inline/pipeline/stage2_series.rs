use std::path::Path;

use serde_json::json;

use super::*;

fn doc(value: serde_json::Value) -> MetricsDocument {
    MetricsDocument::from_value(Path::new("metrics.json"), value).unwrap()
}

#[test]
fn test_build_panel_data_rounds_scores() {
    let metrics = doc(json!({
        "d1": {"multihashembed": {"f": [0.801, 0.02]}, "multiembed": {"f": [0.75, 0.03]}}
    }));
    let panel = build_panel_data(&metrics).unwrap();

    assert_eq!(panel.datasets, vec!["d1".to_string()]);
    let mhe = panel.series_for(Strategy::MultiHashEmbed);
    let me = panel.series_for(Strategy::MultiEmbed);
    assert_eq!(mhe.averages, vec![0.80]);
    assert_eq!(mhe.stds, vec![0.02]);
    assert_eq!(me.averages, vec![0.75]);
    assert_eq!(me.stds, vec![0.03]);
}

#[test]
fn test_build_panel_data_follows_document_order() {
    let metrics = doc(json!({
        "wnut": {"multihashembed": {"f": [0.45, 0.01]}, "multiembed": {"f": [0.41, 0.02]}},
        "conll": {"multihashembed": {"f": [0.9, 0.003]}, "multiembed": {"f": [0.88, 0.004]}},
        "anem": {"multihashembed": {"f": [0.6666, 0.05]}, "multiembed": {"f": [0.6, 0.049]}}
    }));
    let panel = build_panel_data(&metrics).unwrap();

    assert_eq!(panel.datasets, vec!["wnut", "conll", "anem"]);
    assert_eq!(
        panel.series_for(Strategy::MultiHashEmbed).averages,
        vec![0.45, 0.9, 0.67]
    );
    assert_eq!(
        panel.series_for(Strategy::MultiEmbed).stds,
        vec![0.02, 0.0, 0.05]
    );
}

#[test]
fn test_build_panel_data_missing_multiembed() {
    let metrics = doc(json!({
        "d1": {"multihashembed": {"f": [0.8, 0.02]}, "multiembed": {"f": [0.7, 0.03]}},
        "d2": {"multihashembed": {"f": [0.8, 0.02]}}
    }));
    let err = build_panel_data(&metrics).unwrap_err();
    match err {
        InputError::Schema { reason, .. } => {
            assert!(reason.contains("`d2`"));
            assert!(reason.contains("multiembed"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_run_stage2_builds_both_panels() {
    let with_vectors = doc(json!({
        "d1": {"multihashembed": {"f": [0.801, 0.02]}, "multiembed": {"f": [0.75, 0.03]}}
    }));
    let without_vectors = doc(json!({
        "d1": {"multihashembed": {"f": [0.7, 0.021]}, "multiembed": {"f": [0.65, 0.033]}}
    }));
    let stage1 = Stage1Output {
        with_vectors,
        without_vectors,
    };
    let out = run_stage2(&stage1).unwrap();
    assert_eq!(
        out.with_vectors.series_for(Strategy::MultiHashEmbed).averages,
        vec![0.8]
    );
    assert_eq!(
        out.without_vectors.series_for(Strategy::MultiEmbed).stds,
        vec![0.03]
    );
}
