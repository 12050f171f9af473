pub mod formatter;

pub use formatter::{
    format_json, format_progress_bar, format_rank_table, format_report, parse_hex_color,
    should_use_colors, ScoreReport,
};
