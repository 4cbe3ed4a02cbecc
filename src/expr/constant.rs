
//! Classification of literal text: numeric constants and named
//! function calls.

use crate::util::regex_opt_with;

use once_cell::sync::Lazy;
use phf::phf_set;
use regex::Regex;

/// Functions whose derivatives are marked but not computed.
pub static KNOWN_FUNCTIONS: phf::Set<&'static str> = phf_set! {
  "ln",
  "sin",
  "cos",
  "tg",
  "ctg",
};

/// Unanchored: the call may appear anywhere in the text.
static FUNCTION_CALL_RE: Lazy<Regex> = Lazy::new(|| {
  regex_opt_with(KNOWN_FUNCTIONS.iter().copied(), |names| format!(r"({names})\((.*)\)"))
});

/// Whether `text` is a signed decimal number: after removing one
/// leading `-` and at most one `.`, only ASCII digits remain.
pub fn is_constant(text: &str) -> bool {
  let unsigned = text.strip_prefix('-').unwrap_or(text);
  let digits = unsigned.replacen('.', "", 1);
  !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn constant_value(text: &str) -> Option<f64> {
  if is_constant(text) {
    text.parse().ok()
  } else {
    None
  }
}

/// Finds a call to one of the [`KNOWN_FUNCTIONS`] in `text`,
/// returning the function name and its argument text.
pub fn function_call(text: &str) -> Option<(&str, &str)> {
  let captures = FUNCTION_CALL_RE.captures(text)?;
  let name = captures.get(1)?.as_str();
  let argument = captures.get(2)?.as_str();
  Some((name, argument))
}
