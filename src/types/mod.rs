pub mod config;
pub mod scoring;
