//! Content glob syntax checking
//!
//! Content patterns use `{a,b}` alternation on top of ordinary glob syntax.
//! The `glob` crate has no alternation, so a pattern is first expanded into
//! plain globs, and each expansion is then compiled with `glob::Pattern`.
//! Matching itself is left to `glob`.

use glob::Pattern;

use crate::{StylescanError, StylescanResult};


/// Upper bound on the plain globs a single pattern may expand to
pub const MAX_EXPANSIONS: usize = 1024;

/// Deepest brace nesting a pattern may use
pub const MAX_DEPTH: usize = 64;

/// Expand brace alternation in `pattern` and check every expansion.
///
/// Returns the plain globs in expansion order.
pub fn expand(pattern: &str) -> StylescanResult<Vec<String>> {
    if pattern.trim().is_empty() {
        return Err(invalid(pattern, "pattern is empty"));
    }

    let expansions = BraceParser::new(pattern)
        .parse()
        .map_err(|reason| invalid(pattern, reason))?;

    for expansion in &expansions {
        Pattern::new(expansion).map_err(|e| {
            invalid(
                pattern,
                format!("{} at offset {} of '{}'", e.msg, e.pos, expansion),
            )
        })?;
    }

    Ok(expansions)
}

/// Check `pattern` without keeping its expansions
pub fn check(pattern: &str) -> StylescanResult<()> {
    expand(pattern).map(|_| ())
}

fn invalid(pattern: &str, reason: impl Into<String>) -> StylescanError {
    StylescanError::InvalidGlob {
        pattern: pattern.to_string(),
        reason: reason.into(),
    }
}

struct BraceParser {
    chars: Vec<char>,
    pos: usize,
}

impl BraceParser {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<Vec<String>, String> {
        self.sequence(0)
    }

    // Reads until the end of input, or until an unconsumed ',' or '}' when nested.
    fn sequence(&mut self, depth: usize) -> Result<Vec<String>, String> {
        let mut results = vec![String::new()];

        while let Some(&c) = self.chars.get(self.pos) {
            match c {
                '\\' => {
                    self.pos += 1;
                    let literal = match self.chars.get(self.pos) {
                        Some(&escaped) => {
                            self.pos += 1;
                            escape_literal(escaped)
                        }
                        None => "\\".to_string(),
                    };
                    append(&mut results, &literal);
                }
                '[' => {
                    let class = self.char_class();
                    append(&mut results, &class);
                }
                '{' => {
                    let open = self.pos;
                    if depth >= MAX_DEPTH {
                        return Err(format!(
                            "braces nested deeper than {MAX_DEPTH} at offset {open}"
                        ));
                    }
                    self.pos += 1;
                    let alternatives = self.alternatives(open, depth + 1)?;
                    results = product(&results, &alternatives)?;
                }
                ',' | '}' if depth > 0 => return Ok(results),
                '}' => return Err(format!("unmatched '}}' at offset {}", self.pos)),
                _ => {
                    self.pos += 1;
                    append(&mut results, &c.to_string());
                }
            }
        }

        Ok(results)
    }

    fn alternatives(&mut self, open: usize, depth: usize) -> Result<Vec<String>, String> {
        let mut alternatives = Vec::new();
        loop {
            alternatives.extend(self.sequence(depth)?);
            match self.chars.get(self.pos) {
                Some(',') => self.pos += 1,
                Some('}') => {
                    self.pos += 1;
                    return Ok(alternatives);
                }
                _ => return Err(format!("unclosed '{{' at offset {open}")),
            }
        }
    }

    // A `[...]` class is copied verbatim; braces inside it are literal.
    // An unterminated class is left for `glob::Pattern` to reject.
    fn char_class(&mut self) -> String {
        let start = self.pos;
        let mut end = start + 1;
        if self.chars.get(end) == Some(&'!') {
            end += 1;
        }
        if self.chars.get(end) == Some(&']') {
            end += 1;
        }
        while let Some(&c) = self.chars.get(end) {
            if c == ']' {
                self.pos = end + 1;
                return self.chars[start..=end].iter().collect();
            }
            end += 1;
        }

        self.pos = start + 1;
        "[".to_string()
    }
}

fn escape_literal(c: char) -> String {
    match c {
        '?' | '*' | '[' | ']' => format!("[{c}]"),
        _ => c.to_string(),
    }
}

fn append(results: &mut [String], literal: &str) {
    for result in results.iter_mut() {
        result.push_str(literal);
    }
}

fn product(prefixes: &[String], suffixes: &[String]) -> Result<Vec<String>, String> {
    let total = prefixes.len() * suffixes.len();
    if total > MAX_EXPANSIONS {
        return Err(format!(
            "expands to {total} patterns, more than the limit of {MAX_EXPANSIONS}"
        ));
    }

    let mut combined = Vec::with_capacity(total);
    for prefix in prefixes {
        for suffix in suffixes {
            combined.push(format!("{prefix}{suffix}"));
        }
    }
    Ok(combined)
}
