pub mod series;
pub mod strategy;
