pub mod csv_table;

pub use csv_table::{RuleTable, read_rule_table};
