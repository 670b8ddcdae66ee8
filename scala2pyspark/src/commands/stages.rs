//! `stages` command: show the rewrite order.

use crate::output::print_stage_table;
use crate::rewriter::Pipeline;

use anyhow::Result;
use std::io::Write;

/// Print the stages of `pipeline` as a table or JSON.
pub fn run_stages<W: Write>(pipeline: &Pipeline, json: bool, mut writer: W) -> Result<()> {
    let stages = pipeline.describe();
    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&stages)?)?;
    } else {
        print_stage_table(&mut writer, &stages)?;
    }
    Ok(())
}
