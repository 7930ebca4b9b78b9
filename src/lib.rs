pub mod browser;
pub mod config;
pub mod github;
pub mod output;
pub mod scoring;
