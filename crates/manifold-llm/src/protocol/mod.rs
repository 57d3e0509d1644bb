//! Wire format types for each Bedrock provider
//!
//! Pure serde types mirroring what each backend reads and writes; all field
//! renaming and nesting differences between providers live here.

pub mod ai21;
pub mod anthropic;
pub mod cohere;
pub mod titan;
