//! Rule table normalization pipeline.
//!
//! Takes raw tabular bytes describing named matching rules, produces a
//! validated, defaulted, deterministically ordered rule list, and renders it
//! as an ordered-mapping code literal plus summary statistics.

pub mod canonical;
pub mod normalize;
pub mod pipeline;
pub mod render;

pub use canonical::{COLUMN_SYNONYMS, canonical_fields};
pub use normalize::{
    DEFAULT_PALETTE, clean_rule_name, default_color, escape_single_quotes, normalize_rules,
    parse_priority,
};
pub use pipeline::{GeneratedMap, MapStats, generate, summarize};
pub use render::render_pattern_map;
