//! # Configuration Module
//!
//! Typed configuration schema and loading for the router.
//!
//! ## Data Flow
//!
//! ```text
//! config file (YAML / TOML / JSON)
//!     → load.rs   (parse by extension, deserialize ordered schema)
//!     → schema.rs (typed structs; router section keeps declaration order)
//!     → RouteTable::compile (regex validation, `_`-key filtering)
//!     → Config (immutable snapshot)
//!     → shared via ArcSwap; every decode/encode reads the current snapshot
//! ```
//!
//! ## Design Decisions
//!
//! - Config is immutable once loaded; changes arrive as a whole new snapshot.
//! - All fields have defaults so minimal configs parse.
//! - The `router` section is declaration-ordered; first-match-wins depends
//!   on it, so it is never stored in a hash map.
//! - Rules with invalid regexes are skipped with a warning at compile time,
//!   not surfaced at match time.

pub mod load;
pub mod schema;

pub use load::{load_config, Config};
pub use schema::{EncodeDef, RawConfig, RawEntry, RouterSection, RuleDef, SystemConfig, UrlMode};
