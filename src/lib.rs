pub mod color_pipeline;
pub mod logger;
