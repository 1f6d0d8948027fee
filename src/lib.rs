pub mod charts;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod tables;
