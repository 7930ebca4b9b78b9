pub mod formatter;

pub use formatter::{format_assessment, format_candidate_table, should_use_colors};
