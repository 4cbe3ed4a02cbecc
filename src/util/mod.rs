
//! Various utility functions.

use regex::{Regex, escape};

use std::cmp::Reverse;

/// Renders a float the way expression results print numbers: integral
/// values keep a trailing `.0`, other values use the shortest string
/// that round-trips, and very large or very small magnitudes switch to
/// exponent notation with a signed exponent of at least two digits.
///
/// ```text
/// 1.0      -> "1.0"
/// 0.25     -> "0.25"
/// 1e20     -> "1e+20"
/// 0.000015 -> "1.5e-05"
/// ```
pub fn format_float(value: f64) -> String {
  if value.is_nan() {
    return "nan".to_owned();
  }
  if value.is_infinite() {
    return if value > 0.0 { "inf".to_owned() } else { "-inf".to_owned() };
  }
  let magnitude = value.abs();
  if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
    let repr = format!("{value:e}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
      return repr;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
      return repr;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
  } else if value.fract() == 0.0 {
    format!("{value:.1}")
  } else {
    format!("{value}")
  }
}

/// Constructs a regex which matches any string in `options`. Applies
/// the function `helper` to the resulting regex string before
/// compilation. If the result of `helper` is not a valid regular
/// expression, this function will panic.
pub fn regex_opt_with<'a, I, F>(options: I, helper: F) -> Regex
where I : IntoIterator<Item = &'a str>,
      F : FnOnce(String) -> String {
  // Put longer elements first, so we always match the longest thing
  // we can. Ties are broken alphabetically to keep the pattern
  // deterministic.
  let mut options: Vec<_> = options.into_iter().collect();
  options.sort_by_key(|a| (Reverse(a.len()), *a));

  let regex_str = options.into_iter().map(escape).collect::<Vec<_>>().join("|");
  let regex_str = helper(format!("(?:{regex_str})"));
  Regex::new(&regex_str).unwrap_or_else(|_| {
    panic!("Invalid regular expression: {}", regex_str);
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_float_integral() {
    assert_eq!(format_float(1.0), "1.0");
    assert_eq!(format_float(0.0), "0.0");
    assert_eq!(format_float(-2.0), "-2.0");
    assert_eq!(format_float(41.0), "41.0");
  }

  #[test]
  fn test_format_float_fractional() {
    assert_eq!(format_float(0.5), "0.5");
    assert_eq!(format_float(-1.25), "-1.25");
    assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_float(1.0 / 3.0), "0.3333333333333333");
    assert_eq!(format_float(0.0001), "0.0001");
  }

  #[test]
  fn test_format_float_exponent() {
    assert_eq!(format_float(1e20), "1e+20");
    assert_eq!(format_float(1e16), "1e+16");
    assert_eq!(format_float(0.000015), "1.5e-05");
    assert_eq!(format_float(-2.5e-7), "-2.5e-07");
    assert_eq!(format_float(1.5e100), "1.5e+100");
  }

  #[test]
  fn test_format_float_special() {
    assert_eq!(format_float(f64::NAN), "nan");
    assert_eq!(format_float(f64::INFINITY), "inf");
    assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
  }

  #[test]
  fn test_regex_opt_with() {
    let re = regex_opt_with(["a", "abc", "ab"], |s| format!("^{s}$"));
    assert!(re.is_match("a"));
    assert!(re.is_match("ab"));
    assert!(re.is_match("abc"));
    assert!(!re.is_match("abcd"));
    assert_eq!(re.as_str(), "^(?:abc|ab|a)$");
  }

  #[test]
  fn test_regex_opt_with_escapes() {
    let re = regex_opt_with(["+", "*"], |s| s);
    assert!(re.is_match("*"));
    assert!(!re.is_match("x"));
  }
}
