//! Signature cleaner for `def` lines.
//!
//! A single regex match splits a definition line into indentation, function name
//! and raw parameter text. Parameters are split on `", "` and each keeps only the
//! text before its first `": "`. Lines the regex does not match (multi-line
//! signatures, definitions without parentheses) are returned unchanged.
//!
//! The splitting is deliberately naive: a parameter typed `Map[String, Int]` is cut
//! at its inner comma, and a default value after a type annotation is lost.

use crate::constants::{get_signature_re, PARAM_SEPARATOR, TYPE_SEPARATOR};

/// Structural view of a definition line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature<'a> {
    /// Whitespace before `def`, kept verbatim.
    pub indent: &'a str,
    /// Function name.
    pub name: &'a str,
    /// Raw text between the parentheses.
    pub params: &'a str,
}

impl<'a> Signature<'a> {
    /// Match `line` against the signature pattern.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = get_signature_re().captures(line)?;
        Some(Self {
            indent: caps.get(1).map_or("", |m| m.as_str()),
            name: caps.get(2).map_or("", |m| m.as_str()),
            params: caps.get(3).map_or("", |m| m.as_str()),
        })
    }

    /// Re-emit as a Python definition with bare parameter names.
    pub fn to_python(&self) -> String {
        format!(
            "{}def {}({}):\n",
            self.indent,
            self.name,
            clean_args(self.params)
        )
    }
}

/// Strip type annotations from a comma-space separated parameter list.
pub fn clean_args(args: &str) -> String {
    args.split(PARAM_SEPARATOR)
        .map(|arg| arg.split(TYPE_SEPARATOR).next().unwrap_or(arg))
        .collect::<Vec<_>>()
        .join(PARAM_SEPARATOR)
}

/// Rewrite a `def` line, or return it unchanged when it does not parse.
pub fn clean_function_definition(line: &str) -> String {
    match Signature::parse(line) {
        Some(signature) => signature.to_python(),
        None => line.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_captures_parts() {
        let sig = Signature::parse("    def total(xs: Seq[Int]): Int = {\n").unwrap();
        assert_eq!(sig.indent, "    ");
        assert_eq!(sig.name, "total");
        assert_eq!(sig.params, "xs: Seq[Int]");
    }

    #[test]
    fn test_clean_args_keeps_names_in_order() {
        assert_eq!(clean_args("a: Int, b: String, c: Double"), "a, b, c");
        assert_eq!(clean_args(""), "");
    }

    #[test]
    fn test_type_parameters_are_skipped() {
        assert_eq!(
            clean_function_definition("def first[T](xs: List[T]): T = xs.head\n"),
            "def first(xs):\n"
        );
    }

    #[test]
    fn test_no_parentheses_passes_through() {
        let line = "  def name: String = \"x\"\n";
        assert_eq!(clean_function_definition(line), line);
    }

    #[test]
    fn test_untyped_default_is_kept() {
        assert_eq!(clean_function_definition("def f(a=1, b: Int)\n"), "def f(a=1, b):\n");
    }

    #[test]
    fn test_idempotent_on_cleaned_line() {
        let once = clean_function_definition("  def add(a: Int, b: Int): Int = {\n");
        assert_eq!(clean_function_definition(&once), once);
    }
}
