use regex::Regex;
use std::sync::OnceLock;

/// Name of the project-level configuration file.
pub const CONFIG_FILENAME: &str = ".scala2pyspark.toml";

/// Name of the Python project file that may carry a `[tool.scala2pyspark]` table.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// Extension of source files picked up when walking directories.
pub const SCALA_EXTENSION: &str = "scala";

/// Default extension for converted files.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "py";

/// Folders never descended into when collecting Scala sources.
pub const DEFAULT_EXCLUDE_FOLDERS: &[&str] = &["target", "project", ".git", ".idea", ".bsp"];

// Source dialect triggers.

/// Package declaration keyword.
pub const PACKAGE_KEYWORD: &str = "package";
/// Spark `DataFrame` import.
pub const DATAFRAME_IMPORT: &str = "import org.apache.spark.sql.DataFrame";
/// Spark SQL functions import.
pub const FUNCTIONS_IMPORT: &str = "import org.apache.spark.sql.functions";
/// Imports from the Scala standard library.
pub const SCALA_STDLIB_IMPORT: &str = "import scala";
/// Immutable binding keyword, with its trailing space.
pub const VAL_TOKEN: &str = "val ";
/// Mutable binding keyword, with its trailing space.
pub const VAR_TOKEN: &str = "var ";
/// Block terminator removed when it stands alone on a line.
pub const CLOSING_BRACE: &str = "}";
/// Function definition keyword.
pub const DEF_KEYWORD: &str = "def";
/// Column accessor call.
pub const COL_CALL: &str = "col(";
/// Null literal.
pub const NULL_TOKEN: &str = "null";
/// Lowercase boolean literals.
pub const TRUE_TOKEN: &str = "true";
/// Lowercase boolean literals.
pub const FALSE_TOKEN: &str = "false";

// Target dialect replacements.

/// Replacement for [`DATAFRAME_IMPORT`], without terminator.
pub const PYSPARK_DATAFRAME_IMPORT: &str = "from pyspark.sql.dataframe import DataFrame";
/// Replacement for [`FUNCTIONS_IMPORT`], without terminator.
pub const PYSPARK_FUNCTIONS_IMPORT: &str = "import pyspark.sql.functions as F";
/// Replacement for [`COL_CALL`].
pub const QUALIFIED_COL_CALL: &str = "F.col(";
/// Replacement for [`NULL_TOKEN`].
pub const NONE_TOKEN: &str = "None";
/// Replacement for [`TRUE_TOKEN`].
pub const PY_TRUE_TOKEN: &str = "True";
/// Replacement for [`FALSE_TOKEN`].
pub const PY_FALSE_TOKEN: &str = "False";

/// Separator between parameters in a signature.
pub const PARAM_SEPARATOR: &str = ", ";
/// Separator between a parameter name and its type annotation.
pub const TYPE_SEPARATOR: &str = ": ";

/// Regex capturing indentation, name and raw parameter text of a `def` line.
///
/// The match is unanchored and greedy: `.*\(` skips any type parameters, and the
/// parameter group runs to the last closing parenthesis on the line.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_signature_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(\s*)def (\w+).*\((.*)\)").expect("Invalid signature regex pattern")
    })
}
