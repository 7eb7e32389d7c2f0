pub mod error;
pub mod response;
pub mod rule;

pub use error::{Result, RulegenError};
pub use response::GenerateResponse;
pub use rule::Rule;
