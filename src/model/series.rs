use crate::model::strategy::Strategy;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub strategy: Strategy,
    pub averages: Vec<f64>,
    pub stds: Vec<f64>,
}

impl ChartSeries {
    pub fn new(strategy: Strategy) -> Self {
        ChartSeries {
            strategy,
            averages: Vec::new(),
            stds: Vec::new(),
        }
    }

    pub fn push(&mut self, avg: f64, std: f64) {
        self.averages.push(round2(avg));
        self.stds.push(round2(std));
    }
}

/// One panel's worth of data: dataset names on the x axis and one series per
/// strategy, both in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelData {
    pub datasets: Vec<String>,
    pub series: [ChartSeries; 2],
}

impl PanelData {
    pub fn series_for(&self, strategy: Strategy) -> &ChartSeries {
        match strategy {
            Strategy::MultiHashEmbed => &self.series[0],
            Strategy::MultiEmbed => &self.series[1],
        }
    }
}

/// Rounds to two decimals using the exact binary value of `v`: `0.015` is
/// stored just below the tie and becomes `0.01`, `0.025` just above it and
/// becomes `0.03`. Exact ties such as `0.125` go to the even digit.
pub fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/series.rs"]
mod tests;
