//! CLI library components for the rule table normalizer.

pub mod logging;
