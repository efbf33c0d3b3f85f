pub mod stage1_load;
pub mod stage2_series;
pub mod stage3_render;
