// SPDX-License-Identifier: MIT

//! Text normalization helpers.
//!
//! Collapse runs of whitespace and/or punctuation into single blanks
//! before scanning, so patterns match across odd spacing. Offsets in
//! subsequent matches refer to the normalized text.

use std::sync::LazyLock;

use regex::Regex;

// `\s` in the regex crate is the Unicode whitespace class, covering
// NBSP, the U+2000 range, line/paragraph separators, and friends.
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"[-!"“”#$%&'()*+,./:;<=>?@\[\\\]_`{|}~\u{2000}-\u{206F}]"#));

static WHITESPACE_OR_PUNCT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?:\s|[-!"“”#$%&'()*+,./:;<=>?@\[\\\]_`{|}~\u{2000}-\u{206F}])+"#));

/// Replaces every run of whitespace with a single blank and trims the
/// ends.
pub fn normalize_whitespace(input: &str) -> String {
    WHITESPACE_RUNS.replace_all(input, " ").trim().to_string()
}

/// Replaces each punctuation character with a space. Runs are not
/// collapsed.
pub fn punctuation_to_space(input: &str) -> String {
    PUNCTUATION.replace_all(input, " ").into_owned()
}

/// Replaces every run of whitespace or punctuation with a single
/// blank and trims the ends.
pub fn normalize(input: &str) -> String {
    WHITESPACE_OR_PUNCT_RUNS
        .replace_all(input, " ")
        .trim()
        .to_string()
}

// Fixed literals above; compilation cannot fail at runtime.
#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex must compile")
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
