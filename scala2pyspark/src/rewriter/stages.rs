//! Per-line rules used by the standard pipeline.
//!
//! Filter predicates return `true` for lines to drop. Map rules return the line
//! unchanged when their trigger is absent. All substitutions are plain substring
//! replacements and fire inside string literals and identifiers alike.

use crate::constants::{
    CLOSING_BRACE, COL_CALL, DATAFRAME_IMPORT, DEF_KEYWORD, FALSE_TOKEN, FUNCTIONS_IMPORT,
    NONE_TOKEN, NULL_TOKEN, PACKAGE_KEYWORD, PYSPARK_DATAFRAME_IMPORT, PYSPARK_FUNCTIONS_IMPORT,
    PY_FALSE_TOKEN, PY_TRUE_TOKEN, QUALIFIED_COL_CALL, SCALA_STDLIB_IMPORT, TRUE_TOKEN,
    VAL_TOKEN, VAR_TOKEN,
};
use crate::rewriter::signature::clean_function_definition;

/// Split a line into its content and trailing terminator (`"\r\n"`, `"\n"` or `""`).
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

/// Swap the line's content for `replacement`, keeping its indentation and terminator.
fn replace_with_terminator(line: &str, replacement: &str) -> String {
    let (content, terminator) = split_terminator(line);
    let indent = &content[..content.len() - content.trim_start().len()];
    format!("{indent}{replacement}{terminator}")
}

/// `package com.example` declarations.
pub fn is_package_declaration(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(PACKAGE_KEYWORD)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// `import org.apache.spark.sql.DataFrame` becomes the PySpark `DataFrame` import.
pub fn rewrite_dataframe_import(line: &str) -> String {
    if line.trim_start().starts_with(DATAFRAME_IMPORT) {
        replace_with_terminator(line, PYSPARK_DATAFRAME_IMPORT)
    } else {
        line.to_owned()
    }
}

/// `import org.apache.spark.sql.functions._` becomes `import pyspark.sql.functions as F`.
pub fn rewrite_functions_import(line: &str) -> String {
    if line.trim_start().starts_with(FUNCTIONS_IMPORT) {
        replace_with_terminator(line, PYSPARK_FUNCTIONS_IMPORT)
    } else {
        line.to_owned()
    }
}

/// Imports from the Scala standard library have no Python counterpart.
pub fn is_scala_import(line: &str) -> bool {
    line.trim_start().starts_with(SCALA_STDLIB_IMPORT)
}

/// Drop every `val ` token.
pub fn strip_val(line: &str) -> String {
    line.replace(VAL_TOKEN, "")
}

/// Drop every `var ` token.
pub fn strip_var(line: &str) -> String {
    line.replace(VAR_TOKEN, "")
}

/// A line holding nothing but `}`.
///
/// `foo() }` is kept: only bare terminators are recognised.
pub fn is_closing_brace(line: &str) -> bool {
    line.trim() == CLOSING_BRACE
}

/// Left-trimmed line starts with `def`.
pub fn is_function_definition(line: &str) -> bool {
    line.trim_start().starts_with(DEF_KEYWORD)
}

/// Run the signature cleaner on definition lines.
pub fn clean_signature(line: &str) -> String {
    if is_function_definition(line) {
        clean_function_definition(line)
    } else {
        line.to_owned()
    }
}

/// `col(` becomes `F.col(`.
pub fn qualify_col(line: &str) -> String {
    line.replace(COL_CALL, QUALIFIED_COL_CALL)
}

/// `null` becomes `None`.
pub fn null_to_none(line: &str) -> String {
    line.replace(NULL_TOKEN, NONE_TOKEN)
}

/// `true` becomes `True`.
pub fn capitalize_true(line: &str) -> String {
    line.replace(TRUE_TOKEN, PY_TRUE_TOKEN)
}

/// `false` becomes `False`.
pub fn capitalize_false(line: &str) -> String {
    line.replace(FALSE_TOKEN, PY_FALSE_TOKEN)
}
