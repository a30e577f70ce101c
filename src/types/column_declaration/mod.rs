pub mod column;
pub mod columns;
pub use column::{ColumnDeclaration, ColumnRole, FIXED_COLUMN_TYPE};
pub use columns::ColumnDeclarations;
