//! Line-oriented Scala to PySpark rewriter.
//!
//! The rewriter is an ordered list of [`Stage`]s. Each stage is either a filter
//! that drops matching lines or a map that rewrites every line in place; the
//! order of the list is part of the output contract (definition lines must be
//! cleaned before the blanket `null`/`true`/`false` substitutions run over them).
//!
//! # Usage
//!
//! ```
//! use scala2pyspark::rewriter::Pipeline;
//!
//! let lines = vec!["val x = null\n".to_owned(), "}\n".to_owned()];
//! let out = Pipeline::standard().run(lines);
//! assert_eq!(out, vec!["x = None\n".to_owned()]);
//! ```
//!
//! Nothing here parses Scala. Multi-line statements, nested braces and trigger
//! tokens inside strings or comments are rewritten as plain text.

pub mod signature;
pub mod stages;

use serde::Serialize;
use std::fmt;

pub use signature::{clean_args, clean_function_definition, Signature};

/// What a stage does to each line.
#[derive(Clone, Copy)]
pub enum StageKind {
    /// Drop lines for which the predicate returns `true`.
    Filter(fn(&str) -> bool),
    /// Replace each line with the rule's output.
    Map(fn(&str) -> String),
}

impl StageKind {
    /// Short label used in listings.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Filter(_) => "filter",
            Self::Map(_) => "map",
        }
    }
}

impl fmt::Debug for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named transformation over the whole line sequence.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    /// Stable kebab-case identifier.
    pub name: &'static str,
    /// One-line description for listings.
    pub description: &'static str,
    /// The rule applied to each line.
    pub kind: StageKind,
}

impl Stage {
    /// Build a filter stage.
    pub const fn filter(
        name: &'static str,
        description: &'static str,
        drop_if: fn(&str) -> bool,
    ) -> Self {
        Self {
            name,
            description,
            kind: StageKind::Filter(drop_if),
        }
    }

    /// Build a map stage.
    pub const fn map(
        name: &'static str,
        description: &'static str,
        rule: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            description,
            kind: StageKind::Map(rule),
        }
    }

    /// Apply this stage to a line sequence.
    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        let before = lines.len();
        let out: Vec<String> = match self.kind {
            StageKind::Filter(drop_if) => lines.into_iter().filter(|l| !drop_if(l)).collect(),
            StageKind::Map(rule) => lines.into_iter().map(|l| rule(&l)).collect(),
        };
        log::trace!("stage {}: {} -> {} lines", self.name, before, out.len());
        out
    }
}

/// Serializable description of a stage, used for listings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StageInfo {
    /// 1-based position in the pipeline.
    pub position: usize,
    /// Stage identifier.
    pub name: &'static str,
    /// `filter` or `map`.
    pub kind: &'static str,
    /// What the stage does.
    pub description: &'static str,
}

/// The standard rewrite order.
pub static STANDARD_STAGES: [Stage; 12] = [
    Stage::filter(
        "drop-package",
        "Drop `package` declarations",
        stages::is_package_declaration,
    ),
    Stage::map(
        "import-dataframe",
        "Spark DataFrame import -> pyspark.sql.dataframe import",
        stages::rewrite_dataframe_import,
    ),
    Stage::map(
        "import-functions",
        "Spark functions import -> `import pyspark.sql.functions as F`",
        stages::rewrite_functions_import,
    ),
    Stage::filter(
        "drop-scala-imports",
        "Drop `import scala...` lines",
        stages::is_scala_import,
    ),
    Stage::map("strip-val", "Remove `val ` tokens", stages::strip_val),
    Stage::map("strip-var", "Remove `var ` tokens", stages::strip_var),
    Stage::filter(
        "drop-closing-braces",
        "Drop lines consisting only of `}`",
        stages::is_closing_brace,
    ),
    Stage::map(
        "clean-signatures",
        "Rewrite `def` lines without type annotations",
        stages::clean_signature,
    ),
    Stage::map("qualify-col", "`col(` -> `F.col(`", stages::qualify_col),
    Stage::map("null-to-none", "`null` -> `None`", stages::null_to_none),
    Stage::map("true-to-capital", "`true` -> `True`", stages::capitalize_true),
    Stage::map(
        "false-to-capital",
        "`false` -> `False`",
        stages::capitalize_false,
    ),
];

/// An ordered chain of stages.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl Pipeline {
    /// The standard Scala to PySpark chain.
    pub fn standard() -> Self {
        Self::from_stages(STANDARD_STAGES.to_vec())
    }

    /// A pipeline running exactly `stages`, in order.
    pub fn from_stages(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Stages in execution order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Look up a stage by name.
    pub fn stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }

    /// Listing of the stages, numbered from 1.
    pub fn describe(&self) -> Vec<StageInfo> {
        self.stages
            .iter()
            .enumerate()
            .map(|(i, s)| StageInfo {
                position: i + 1,
                name: s.name,
                kind: s.kind.label(),
                description: s.description,
            })
            .collect()
    }

    /// Run every stage over `lines`.
    pub fn run(&self, lines: Vec<String>) -> Vec<String> {
        let input_len = lines.len();
        let out = self
            .stages
            .iter()
            .fold(lines, |acc, stage| stage.apply(acc));
        log::debug!(
            "rewrote {} lines into {} through {} stages",
            input_len,
            out.len(),
            self.stages.len()
        );
        out
    }
}

/// Rewrite `lines` with the standard pipeline.
pub fn rewrite_lines(lines: Vec<String>) -> Vec<String> {
    Pipeline::standard().run(lines)
}
