//! # mcaroute
//!
//! **mcaroute** is a configuration-driven, bidirectional URL router. It
//! translates an incoming request path into a
//! (module, controller, action, parameter-map) tuple, and, inversely,
//! constructs a request path string from that same tuple.
//!
//! ## Overview
//!
//! Routing is driven by an ordered table of route rules loaded from
//! configuration. Each rule may carry a decode half (regex match pattern
//! plus replacement template) and/or an encode half (a declarative
//! module/controller/action/template 4-tuple, or a callback registered on
//! the router at runtime). Rules match in declaration order, first match
//! wins, in both directions.
//!
//! When no rule matches, a fallback codec builds or parses the URL
//! according to one of three configured modes:
//!
//! - **path**: `/module/controller/action/k1/v1/.../` path segments
//! - **traditional**: everything as `index.php?` query parameters
//! - **single_entry**: like traditional without the script-name segment
//!
//! ## Architecture
//!
//! - **[`config`]** - typed configuration schema and YAML/TOML/JSON loading
//! - **[`router`]** - rule compilation, rewrite matching, mode codec, and
//!   the [`Router`] facade
//! - **[`context`]** - per-request parameter storage the decode side writes
//!   into, and the ordered [`Params`] map the encode side consumes
//! - **[`hot_reload`]** - filesystem watcher that swaps the configuration
//!   snapshot atomically
//! - **[`cli`]** - the `mcaroute` binary for exercising a config from the
//!   shell
//!
//! ## Quick Start
//!
//! ```rust
//! use mcaroute::{Config, Params, RequestContext, Router, RouterConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::from_yaml(r#"
//! system:
//!   default_module: main
//!   default_controller: index
//!   default_action: index
//!   url_mode: path
//!   host: "http://example.com/"
//! router:
//!   article:
//!     decode: ['^article-(\d+)$', 'blog/article/show/id/$1']
//!     encode: ["blog", "article", "show", "article-{id}"]
//! "#)?;
//!
//! let identity = RouterConfig::new(["m", "c", "a"], ["main", "blog"]);
//! let router = Router::new(identity, config);
//!
//! // Decode: the rewrite rule hits and forces path-segment parsing.
//! let mut ctx = RequestContext::new();
//! router.decode("article-42", &mut ctx);
//! assert_eq!(ctx.get("c"), Some("article"));
//! assert_eq!(ctx.get("id"), Some("42"));
//!
//! // Encode: the declarative rule matches the same triple.
//! let params: Params = [("id", "42")].into();
//! assert_eq!(router.encode("blog", "article", "show", &params), "article-42");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! [`Router`] is `Send + Sync`. The configuration snapshot lives behind an
//! atomic pointer swap; every decode/encode call reads the current
//! snapshot, so a hot reload is observed by the next call without locking.
//! A [`RequestContext`] belongs to exactly one logical request.

pub mod cli;
pub mod config;
pub mod context;
pub mod hot_reload;
pub mod router;

pub use config::{load_config, Config, SystemConfig, UrlMode};
pub use context::{Params, RequestContext};
pub use router::{url_append, Router, RouterConfig};
