pub mod parsing;
pub use parsing::normalize_args;
