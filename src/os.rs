//! Operating system detection.
//!
//! Signatures are tried in table order and the first match wins. Windows NT
//! bands are ordered most specific first so `NT 6.0` is reported as Vista
//! before the wider `NT 6.x` band can claim it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

/// One row of the OS table: a label template and the pattern that selects it.
///
/// The label may reference capture groups of the pattern as `$1`, `$2`, ...
#[derive(Debug, Clone)]
pub struct OsSignature {
    label: &'static str,
    pattern: Regex,
}

impl OsSignature {
    fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            pattern: Regex::new(&format!("(?i-u){}", pattern)).unwrap(),
        }
    }

    /// The unexpanded label template.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_match(&self, user_agent: &str) -> bool {
        self.pattern.is_match(user_agent)
    }

    /// The expanded label if this signature matches.
    pub fn resolve(&self, user_agent: &str) -> Option<String> {
        self.pattern
            .captures(user_agent)
            .map(|caps| expand_label(self.label, &caps))
    }
}

/// Ordered OS signature table.
pub static OS_SIGNATURES: Lazy<Vec<OsSignature>> = Lazy::new(|| {
    vec![
        OsSignature::new("iPad", r"ipad"),
        OsSignature::new("iPhone", r"iphone"),
        OsSignature::new("Windows Vista", r"windows nt 6\.0"),
        OsSignature::new("Windows 7 or 8", r"windows nt 6\.[0-9]+"),
        OsSignature::new("Windows 2003", r"windows nt 5\.2+"),
        OsSignature::new("Windows XP", r"windows nt 5\.1+"),
        OsSignature::new("Windows 2000", r"windows nt 5\.0+"),
        OsSignature::new("OS X $1.$2", r"os x ([0-9]+)[._]([0-9]+)"),
        OsSignature::new("Linux", r"linux"),
        OsSignature::new("Googlebot", r"googlebot"),
    ]
});

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+)").unwrap());

/// Replace each `$N` in `template` with capture group `N`.
///
/// Groups that did not participate in the match, or do not exist, expand to
/// the empty string.
pub fn expand_label(template: &str, captures: &Captures) -> String {
    PLACEHOLDER
        .replace_all(template, |placeholder: &Captures| {
            placeholder[1]
                .parse::<usize>()
                .ok()
                .and_then(|group| captures.get(group))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Classify the operating system, or `""` when no signature matches.
pub fn classify_os(user_agent: &str) -> String {
    for signature in OS_SIGNATURES.iter() {
        if let Some(label) = signature.resolve(user_agent) {
            trace!(signature = signature.label(), os = %label, "os signature matched");
            return label;
        }
    }
    String::new()
}
