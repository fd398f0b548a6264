//! npm-style version ranges on top of the `semver` crate
//!
//! `semver` implements Cargo's requirement syntax, which differs from the
//! ranges written in package manifests:
//! - a bare version (`1.2.3`) is exact, not caret
//! - comparators are separated by whitespace, not commas
//! - `||` separates alternatives
//! - `a - b` is an inclusive hyphen range
//!
//! Ranges are translated into one `VersionReq` per alternative. A version
//! satisfies the range when any alternative matches it.

use semver::{Version, VersionReq};
use thiserror::Error;

/// Error for a range or version string that cannot be interpreted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid version range '{spec}': {reason}")]
    InvalidRange { spec: String, reason: String },

    #[error("invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },
}

/// Operators accepted in front of a version, longest first
const OPERATORS: &[&str] = &[">=", "<=", "~>", ">", "<", "=", "^", "~"];

/// A parsed version range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    /// `None` marks an alternative that can never match (e.g. `<*`)
    alternatives: Vec<Option<VersionReq>>,
}

impl VersionRange {
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        let alternatives = spec
            .split("||")
            .map(|alt| {
                translate_alternative(alt)
                    .and_then(|req| req.map(|r| parse_req(&r)).transpose())
                    .map_err(|reason| RangeError::InvalidRange {
                        spec: spec.to_string(),
                        reason,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { alternatives })
    }

    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives
            .iter()
            .flatten()
            .any(|req| req.matches(version))
    }
}

/// Parse a concrete version, tolerating a leading `v` or `=`
pub fn parse_version(version: &str) -> Result<Version, RangeError> {
    let trimmed = version
        .trim()
        .trim_start_matches('=')
        .trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|e| RangeError::InvalidVersion {
        version: version.to_string(),
        reason: e.to_string(),
    })
}

/// Whether `version` satisfies `spec`; unparsable input never satisfies
pub fn satisfies(version: &str, spec: &str) -> bool {
    let Ok(version) = parse_version(version) else {
        return false;
    };
    VersionRange::parse(spec).is_ok_and(|range| range.matches(&version))
}

fn parse_req(req: &str) -> Result<VersionReq, String> {
    VersionReq::parse(req).map_err(|e| e.to_string())
}

/// Translate one `||` alternative into Cargo requirement syntax.
///
/// `Ok(None)` means the alternative is well formed but matches nothing.
fn translate_alternative(alt: &str) -> Result<Option<String>, String> {
    let alt = alt.trim();

    if let Some((low, high)) = split_hyphen_range(alt) {
        let mut comparators = Vec::new();
        if let Some(low) = translate_comparator(">=", low)? {
            comparators.extend(low);
        }
        if let Some(high) = translate_comparator("<=", high)? {
            comparators.extend(high);
        }
        return Ok(Some(join_comparators(&comparators)));
    }

    let mut comparators = Vec::new();
    for (op, version) in tokenize(alt)? {
        match translate_comparator(op, version)? {
            Some(translated) => comparators.extend(translated),
            None => return Ok(None),
        }
    }
    Ok(Some(join_comparators(&comparators)))
}

fn join_comparators(comparators: &[String]) -> String {
    if comparators.is_empty() {
        "*".to_string()
    } else {
        comparators.join(", ")
    }
}

fn split_hyphen_range(alt: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = alt.split_whitespace().collect();
    match parts.as_slice() {
        [low, "-", high] => Some((*low, *high)),
        _ => None,
    }
}

/// Split an alternative into (operator, version) pairs.
///
/// An operator may be separated from its version by whitespace (`>= 1.2.0`).
fn tokenize(alt: &str) -> Result<Vec<(&str, &str)>, String> {
    let mut pairs = Vec::new();
    let mut pending_op: Option<&str> = None;

    for token in alt.split_whitespace() {
        let (op, rest) = split_operator(token);
        match (pending_op.take(), op, rest.is_empty()) {
            (Some(prev), "", false) => pairs.push((prev, rest)),
            (Some(prev), _, _) => {
                return Err(format!("operator '{prev}' is not followed by a version"));
            }
            (None, op, true) if !op.is_empty() => pending_op = Some(op),
            (None, op, _) => pairs.push((op, rest)),
        }
    }

    if let Some(op) = pending_op {
        return Err(format!("operator '{op}' is not followed by a version"));
    }
    Ok(pairs)
}

fn split_operator(token: &str) -> (&str, &str) {
    OPERATORS
        .iter()
        .find_map(|op| token.strip_prefix(op).map(|rest| (*op, rest)))
        .unwrap_or(("", token))
}

fn is_wildcard(part: &str) -> bool {
    matches!(part, "*" | "x" | "X")
}

/// Translate a single comparator.
///
/// Returns `Ok(Some(vec![]))` for a comparator that accepts everything and
/// `Ok(None)` for one that accepts nothing.
fn translate_comparator(op: &str, version: &str) -> Result<Option<Vec<String>>, String> {
    let version = version.trim_start_matches(['v', 'V']);
    let (core, pre) = split_prerelease(version);

    let parts: Vec<&str> = if core.is_empty() {
        Vec::new()
    } else {
        core.split('.').collect()
    };
    if parts.len() > 3 {
        return Err(format!("'{version}' has more than three components"));
    }

    let numeric: Vec<&str> = parts
        .iter()
        .copied()
        .take_while(|part| !is_wildcard(part))
        .collect();
    if parts[numeric.len()..].iter().any(|part| !is_wildcard(part)) {
        return Err(format!("'{version}' has a number after a wildcard"));
    }
    if let Some(bad) = numeric
        .iter()
        .find(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(format!("'{bad}' is not a version number in '{version}'"));
    }

    if numeric.is_empty() {
        return Ok(match op {
            "<" | ">" => None,
            _ => Some(Vec::new()),
        });
    }

    let op = match op {
        "" => "=",
        "~>" => "~",
        other => other,
    };
    let pre = if numeric.len() == 3 { pre } else { "" };

    Ok(Some(vec![format!("{op}{}{pre}", numeric.join("."))]))
}

/// Split `1.2.3-beta.1+build` into (`1.2.3`, `-beta.1`); build metadata is dropped
fn split_prerelease(version: &str) -> (&str, &str) {
    let without_build = version.split('+').next().unwrap_or(version);
    match without_build.find('-') {
        Some(idx) => without_build.split_at(idx),
        None => (without_build, ""),
    }
}
