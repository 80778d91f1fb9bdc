//! Compiled route table: declarative rewrite rules, encode rules, and the
//! ignore list.
//!
//! Rules are compiled from the ordered `router` configuration section once
//! per load. Entries whose key starts with `_` are configuration metadata and
//! never become rules; `_ignore` is compiled into the ignore list. A rule
//! whose decode regex fails to compile is skipped with a warning — matching
//! never observes a malformed rule.

use crate::config::schema::{EncodeDef, RawEntry, RouterSection};
use regex::Regex;
use tracing::{debug, warn};

/// Decode half of a compiled rule: match pattern plus replacement template.
#[derive(Debug, Clone)]
pub struct DecodeRule {
    pub pattern: Regex,
    pub replacement: String,
}

/// Encode half of a compiled rule.
#[derive(Debug, Clone)]
pub enum EncodeRule {
    /// Declarative rule: matches when module/controller/action all equal the
    /// configured triple; the template may use `{m}`, `{c}`, `{a}` and
    /// `{param}` placeholders.
    Template {
        module: String,
        controller: String,
        action: String,
        template: String,
    },
    /// Rule whose handler is a function registered on the router under this
    /// rule's key.
    Callback,
}

/// One compiled route rule. Either half may be absent; an absent half makes
/// the rule inert in that direction.
#[derive(Debug, Clone)]
pub struct RouteRule {
    pub key: String,
    pub decode: Option<DecodeRule>,
    pub encode: Option<EncodeRule>,
}

/// The ordered collection of compiled rules plus the ignore list.
///
/// Order is configuration declaration order and is the match order for both
/// directions: first match wins.
#[derive(Debug, Default)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
    ignore: Vec<Regex>,
}

impl RouteTable {
    /// Compile the raw `router` section. Malformed entries are skipped, not
    /// fatal: a bad regex or a mistyped entry loses that one rule and the
    /// rest of the table still loads.
    #[must_use]
    pub fn compile(section: &RouterSection) -> Self {
        let mut rules = Vec::with_capacity(section.entries.len());
        let mut ignore = Vec::new();

        for (key, entry) in &section.entries {
            if let Some(stripped) = key.strip_prefix('_') {
                if stripped == "ignore" {
                    ignore = compile_ignore(key, entry);
                }
                // Other metadata keys are reserved; retrievable via
                // RouterSection::meta but never matched.
                continue;
            }

            let def = match entry {
                RawEntry::Rule(def) => def,
                RawEntry::Patterns(_) => {
                    warn!(rule = %key, "Rule entry is a bare sequence, skipping");
                    continue;
                }
            };

            let decode = def.decode.as_ref().and_then(|(pattern, replacement)| {
                match Regex::new(pattern) {
                    Ok(re) => Some(DecodeRule {
                        pattern: re,
                        replacement: replacement.clone(),
                    }),
                    Err(err) => {
                        warn!(rule = %key, pattern = %pattern, error = %err,
                              "Invalid decode pattern, rule is inert for decode");
                        None
                    }
                }
            });

            let encode = def.encode.as_ref().and_then(|def| match def {
                EncodeDef::Template(m, c, a, template) => Some(EncodeRule::Template {
                    module: m.clone(),
                    controller: c.clone(),
                    action: a.clone(),
                    template: template.clone(),
                }),
                EncodeDef::Callback(marker) if marker == "callback" => {
                    Some(EncodeRule::Callback)
                }
                EncodeDef::Callback(marker) => {
                    warn!(rule = %key, marker = %marker,
                          "Unknown encode marker, rule is inert for encode");
                    None
                }
            });

            rules.push(RouteRule {
                key: key.clone(),
                decode,
                encode,
            });
        }

        Self { rules, ignore }
    }

    /// All compiled rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Number of compiled ignore patterns.
    #[must_use]
    pub fn ignore_patterns(&self) -> usize {
        self.ignore.len()
    }

    /// Apply the first matching decode rule to `path`, returning the
    /// rewritten path. Replacement templates use `$1`-style capture
    /// references; all occurrences of the pattern are replaced.
    #[must_use]
    pub fn rewrite(&self, path: &str) -> Option<String> {
        for rule in &self.rules {
            let Some(decode) = &rule.decode else { continue };
            if decode.pattern.is_match(path) {
                let rewritten = decode
                    .pattern
                    .replace_all(path, decode.replacement.as_str())
                    .into_owned();
                debug!(rule = %rule.key, path = %path, rewritten = %rewritten,
                       "Decode rule matched");
                return Some(rewritten);
            }
        }
        None
    }

    /// True if any ignore-list pattern matches `path`. A pure predicate:
    /// callers consult it before decoding if they want matched paths left
    /// untouched.
    #[must_use]
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignore.iter().any(|re| re.is_match(path))
    }
}

fn compile_ignore(key: &str, entry: &RawEntry) -> Vec<Regex> {
    let RawEntry::Patterns(patterns) = entry else {
        warn!(key = %key, "Ignore entry is not a sequence of patterns, ignoring it");
        return Vec::new();
    };
    patterns
        .iter()
        .filter_map(|p| match Regex::new(p) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!(pattern = %p, error = %err, "Invalid ignore pattern, skipping");
                None
            }
        })
        .collect()
}
