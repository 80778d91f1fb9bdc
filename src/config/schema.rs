//! Typed configuration schema.
//!
//! Configuration is deserialized into explicit structs and validated when the
//! file is loaded, not probed as an untyped dictionary at each access. The
//! `router` section is an *ordered* mapping of rule-key → rule-definition;
//! declaration order is the match order on both the decode and encode paths,
//! so it is deserialized with a map visitor that preserves document order
//! instead of a `HashMap`.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// URL scheme used when no declarative rule matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlMode {
    /// `/module/controller/action/k1/v1/.../` path segments.
    #[default]
    Path,
    /// Everything as `index.php?` query parameters.
    Traditional,
    /// Like traditional but without the literal script-name segment.
    SingleEntry,
}

impl fmt::Display for UrlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UrlMode::Path => "path",
            UrlMode::Traditional => "traditional",
            UrlMode::SingleEntry => "single_entry",
        };
        write!(f, "{}", s)
    }
}

fn default_mca_names() -> [String; 3] {
    ["m".to_string(), "c".to_string(), "a".to_string()]
}

/// The `system` configuration section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Module resolved when the request does not name one.
    pub default_module: String,
    /// Controller resolved when the request does not name one.
    pub default_controller: String,
    /// Action resolved when the request does not name one.
    pub default_action: String,
    /// Fallback URL scheme when no declarative rule matches.
    pub url_mode: UrlMode,
    /// Prefix prepended to every encoded URL, e.g. `http://example.com/`.
    pub host: String,
    /// Request parameter names the resolved module/controller/action are
    /// written under. Library callers usually supply these through
    /// [`RouterConfig`](crate::router::RouterConfig); this field feeds the CLI.
    #[serde(default = "default_mca_names")]
    pub mca_names: [String; 3],
    /// Module names the first path segment may resolve to.
    pub modules: Vec<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            default_module: String::new(),
            default_controller: String::new(),
            default_action: String::new(),
            url_mode: UrlMode::default(),
            host: String::new(),
            mca_names: default_mca_names(),
            modules: Vec::new(),
        }
    }
}

impl SystemConfig {
    /// The configured default MCA triple.
    #[must_use]
    pub fn mca_defaults(&self) -> (&str, &str, &str) {
        (
            &self.default_module,
            &self.default_controller,
            &self.default_action,
        )
    }
}

/// Raw decode half of a rule: `[match_pattern, replacement_template]`.
pub type DecodeDef = (String, String);

/// Raw encode half of a rule: either a declarative
/// `[module, controller, action, output_template]` 4-tuple, or the literal
/// string `callback` marking a rule whose handler is registered on the
/// router at runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EncodeDef {
    Template(String, String, String, String),
    Callback(String),
}

/// One raw rule definition from the `router` section. A rule missing
/// `decode` is inert for decoding; one missing `encode` is inert for
/// encoding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuleDef {
    pub decode: Option<DecodeDef>,
    pub encode: Option<EncodeDef>,
}

/// A raw entry of the `router` section. Keys beginning with `_` carry
/// configuration metadata instead of rules; only `_ignore`, a sequence of
/// regex strings, is defined.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Rule(RuleDef),
    Patterns(Vec<String>),
}

/// The `router` section: declaration-ordered rule entries.
#[derive(Debug, Clone, Default)]
pub struct RouterSection {
    pub entries: Vec<(String, RawEntry)>,
}

impl RouterSection {
    /// Look up a metadata entry by exact key, e.g. `_ignore`.
    #[must_use]
    pub fn meta(&self, key: &str) -> Option<&RawEntry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl<'de> Deserialize<'de> for RouterSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = RouterSection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ordered map of rule-key to rule-definition")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, RawEntry>()? {
                    entries.push((key, value));
                }
                Ok(RouterSection { entries })
            }
        }

        deserializer.deserialize_map(SectionVisitor)
    }
}

/// Whole configuration file as deserialized, before rule compilation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub system: SystemConfig,
    pub router: RouterSection,
}
