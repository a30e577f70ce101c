pub mod assembler;
pub mod descriptor;
pub mod operations;

pub use assembler::{assemble, Statements};
pub use descriptor::{describe_tables, TableDescriptor, TableFragments};
pub use operations::{Create, Index, Populate, Table, INDEX_COLUMN};
