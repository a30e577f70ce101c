use std::fmt::Display;

use super::ColumnDeclaration;

/// A collection of `ColumnDeclaration` instances, representing the schema of every generated table.
#[derive(Clone, Debug)]
pub struct ColumnDeclarations(pub Vec<ColumnDeclaration>);

impl ColumnDeclarations {
    /// Builds `count` columns named `col0..col{count-1}`. The first two are always `int`,
    /// the rest use `data_type` unchanged.
    pub fn generate(count: usize, data_type: &str) -> Self {
        Self(
            (0..count)
                .map(|index| ColumnDeclaration::new(index, data_type))
                .collect(),
        )
    }

    /// The `SELECT` list used to populate a table from `generate_series`, one term per column.
    pub fn value_list(&self, partitions: Option<u32>) -> String {
        self.0
            .iter()
            .map(|column| column.value_term(partitions))
            .collect::<Vec<String>>()
            .join(",")
    }
}

impl Display for ColumnDeclarations {
    /// Formats the collection as a comma-separated list of column definitions.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self
            .0
            .iter()
            .map(|column_declaration| column_declaration.to_string())
            .collect::<Vec<String>>()
            .join(",");
        f.write_str(&s)
    }
}
