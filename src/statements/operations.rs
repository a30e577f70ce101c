/// Column every generated index is built on.
pub const INDEX_COLUMN: &str = "col2";

pub trait Table {
    const POSTFIX: &'static str;
    fn prefix(&self) -> &str;
    fn ordinal(&self) -> usize;
    fn name(&self) -> String {
        format!("{}_{}{}", self.prefix(), Self::POSTFIX, self.ordinal())
    }
}

pub trait Create: Table {
    /// `CREATE TABLE {name}`, without column list or storage clause.
    fn create_table_fragment(&self) -> String {
        format!("CREATE TABLE {}", self.name())
    }
}

pub trait Populate: Table {
    /// `INSERT INTO {name} SELECT `, without value list or source.
    fn insert_fragment(&self) -> String {
        format!("INSERT INTO {} SELECT ", self.name())
    }
}

pub trait Index: Table {
    fn create_index_query(&self) -> String {
        let name = self.name();
        format!("CREATE INDEX {name}_idx ON {name}({INDEX_COLUMN});")
    }
}
