use crate::input::{InputError, MetricsDocument};
use crate::model::series::{ChartSeries, PanelData};
use crate::model::strategy::Strategy;
use crate::pipeline::stage1_load::Stage1Output;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub with_vectors: PanelData,
    pub without_vectors: PanelData,
}

pub fn run_stage2(stage1: &Stage1Output) -> Result<Stage2Output, InputError> {
    Ok(Stage2Output {
        with_vectors: build_panel_data(&stage1.with_vectors)?,
        without_vectors: build_panel_data(&stage1.without_vectors)?,
    })
}

pub fn build_panel_data(doc: &MetricsDocument) -> Result<PanelData, InputError> {
    let mut datasets = Vec::with_capacity(doc.len());
    let mut mhe = ChartSeries::new(Strategy::MultiHashEmbed);
    let mut me = ChartSeries::new(Strategy::MultiEmbed);

    for dataset in doc.dataset_names() {
        let mhe_score = doc.score(dataset, Strategy::MultiHashEmbed)?;
        let me_score = doc.score(dataset, Strategy::MultiEmbed)?;

        mhe.push(mhe_score.avg(), mhe_score.std());
        me.push(me_score.avg(), me_score.std());
        datasets.push(dataset.to_string());

        tracing::debug!(
            "Dataset `{}`: MultiHashEmbed {} ({}) MultiEmbed {} ({})",
            dataset,
            mhe_score.avg(),
            mhe_score.std(),
            me_score.avg(),
            me_score.std()
        );
    }

    Ok(PanelData {
        datasets,
        series: [mhe, me],
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_series.rs"]
mod tests;
