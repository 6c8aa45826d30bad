use took::Took;

use crate::session::RunSummary;

pub fn format_log_command_timed(command: &str, result: &str, took: &Took) -> String {
    format!("{command} - {}, took: {took}", first_line(result))
}

pub fn format_log_summary(summary: &RunSummary) -> String {
    format!(
        "{} commands executed, {} failed",
        summary.executed, summary.failed
    )
}

// multi-line results (PRINT) are logged by their first line only
fn first_line(s: &str) -> &str {
    s.lines().next().unwrap_or("")
}

/// Duration as written to the output file, seconds with microsecond precision.
pub fn format_seconds(took: &Took) -> String {
    format!("{:.6} sec", took.as_std().as_secs_f64())
}
