use super::operations::{Create, Index, Populate, Table};

/// One generated table, named `{prefix}_table{index}`.
#[derive(Debug, Clone)]
pub struct TableDescriptor {
    prefix: String,
    index: usize,
}

impl Table for TableDescriptor {
    const POSTFIX: &'static str = "table";
    fn prefix(&self) -> &str {
        &self.prefix
    }
    fn ordinal(&self) -> usize {
        self.index
    }
}
impl Create for TableDescriptor {}
impl Populate for TableDescriptor {}
impl Index for TableDescriptor {}

impl TableDescriptor {
    pub fn new(prefix: &str, index: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            index,
        }
    }
}

/// Per-table statement pieces, in table order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableFragments {
    pub creates: Vec<String>,
    pub inserts: Vec<String>,
    pub indexes: Vec<String>,
}

/// Builds the `CREATE TABLE` and `INSERT INTO ... SELECT ` prefixes for `count` tables and,
/// when `indexes` is set, a complete `CREATE INDEX` statement per table.
pub fn describe_tables(prefix: &str, count: usize, indexes: bool) -> TableFragments {
    let mut fragments = TableFragments::default();
    for table in (0..count).map(|index| TableDescriptor::new(prefix, index)) {
        fragments.creates.push(table.create_table_fragment());
        fragments.inserts.push(table.insert_fragment());
        if indexes {
            fragments.indexes.push(table.create_index_query());
        }
    }
    fragments
}
