use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// C89/C99/C11 reserved words
const C_KEYWORDS: &[&str] = &[
  "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else", "enum",
  "extern", "float", "for", "goto", "if", "inline", "int", "long", "register", "restrict",
  "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
  "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
  "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

/// Get the file name from a path
pub fn get_file_name(path: &Path) -> Option<String> {
  path.file_name().and_then(|name| name.to_str()).map(String::from)
}

/// Name a program the way a usage line shows it: the basename of `argv[0]`
pub fn program_name(argv0: &str) -> String {
  get_file_name(Path::new(argv0)).unwrap_or_else(|| argv0.to_string())
}

fn identifier_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"))
}

/// Check whether a string can be used verbatim as a C identifier
pub fn is_c_identifier(s: &str) -> bool {
  identifier_pattern().is_match(s)
}

/// Check whether a string is a C reserved keyword
pub fn is_c_keyword(s: &str) -> bool {
  C_KEYWORDS.contains(&s)
}

/// Make text safe to place inside a `/* ... */` comment
pub fn escape_comment(s: &str) -> String {
  s.replace("*/", "* /")
}
