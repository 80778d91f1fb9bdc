//! # Router Module
//!
//! Bidirectional path matching: decode a request path into
//! module/controller/action plus parameters, and encode that tuple back
//! into a URL.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling the ordered rule table from configuration
//! - Applying first-match-wins declarative rewrites on the decode path
//! - Matching declarative and callback rules on the encode path
//! - Falling back to the configured URL mode when no rule matches
//! - Answering the ignore-list predicate
//!
//! ## Architecture
//!
//! A two-phase approach:
//!
//! 1. **Compilation**: at config load, rule patterns are compiled into
//!    regexes and the `_`-prefixed metadata entries are split out
//!    ([`rewrite::RouteTable::compile`]).
//!
//! 2. **Matching**: each decode/encode call loads the current config
//!    snapshot and walks the table in declaration order until a rule
//!    matches, then falls back to the mode codec ([`mode`]).
//!
//! ## Example
//!
//! ```rust
//! use mcaroute::{Config, RequestContext, Router, RouterConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::from_yaml(r#"
//! system:
//!   default_module: main
//!   default_controller: index
//!   default_action: index
//!   url_mode: path
//! "#)?;
//! let router = Router::new(RouterConfig::new(["m", "c", "a"], ["main", "blog"]), config);
//!
//! let mut ctx = RequestContext::new();
//! router.decode("blog/article/show/id/42", &mut ctx);
//! assert_eq!(ctx.get("m"), Some("blog"));
//! assert_eq!(ctx.get("c"), Some("article"));
//! assert_eq!(ctx.get("a"), Some("show"));
//! assert_eq!(ctx.get("id"), Some("42"));
//! # Ok(())
//! # }
//! ```

mod core;
pub mod mode;
pub mod rewrite;
#[cfg(test)]
mod tests;

pub use self::core::{EncodeHook, Router, RouterConfig};
pub use self::mode::url_append;
