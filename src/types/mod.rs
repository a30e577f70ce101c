pub mod column_declaration;
pub mod table_type;

pub use column_declaration::{ColumnDeclaration, ColumnDeclarations, ColumnRole, FIXED_COLUMN_TYPE};
pub use table_type::{StorageClause, TableType};

/// Rows inserted into every generated table.
pub const ROWS_PER_TABLE: u32 = 10_000;
