pub mod config;
pub mod error;
pub mod output;
pub mod statements;
pub mod types;
pub mod utils;

pub use config::{Args, GenerationPlan, Profile};
pub use error::GenError;
pub use output::{write_schema, Summary};
pub use statements::{assemble, Statements};
pub use types::*;
