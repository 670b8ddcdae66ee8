use crate::rewriter::StageInfo;
use crate::source::Conversion;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::Write;
use std::path::Path;

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Print the ordered stage listing as a table.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_stage_table(writer: &mut impl Write, stages: &[StageInfo]) -> std::io::Result<()> {
    let mut table = create_table(vec!["#", "Stage", "Kind", "Description"]);
    for stage in stages {
        let kind_color = if stage.kind == "filter" {
            Color::Yellow
        } else {
            Color::Cyan
        };
        table.add_row(vec![
            Cell::new(stage.position),
            Cell::new(stage.name),
            Cell::new(stage.kind).fg(kind_color),
            Cell::new(stage.description),
        ]);
    }
    writeln!(writer, "{table}")
}

/// Print the header separating files when several are shown at once.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_file_header(writer: &mut impl Write, path: &Path) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}",
        format!("# ==> {} <==", path.display()).cyan().bold()
    )
}

/// Print the one-line summary for a file written to disk.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_written(
    writer: &mut impl Write,
    conversion: &Conversion,
    target: &Path,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {} -> {} {}",
        "[OK]".green(),
        conversion.path.display(),
        target.display(),
        format!(
            "({} lines, {} dropped)",
            conversion.lines.len(),
            conversion.dropped()
        )
        .dimmed()
    )
}
