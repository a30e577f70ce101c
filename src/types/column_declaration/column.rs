use std::{
    borrow::Cow,
    fmt::{self, Display},
};

/// Type used for the row key and partition key columns regardless of the requested type.
pub const FIXED_COLUMN_TYPE: &str = "int";

/// What a column is used for when rows are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRole {
    /// `col0`, receives the series value.
    Key,
    /// `col1`, the `PARTITION BY RANGE` column; receives the series value modulo the partition count.
    PartitionKey,
    /// Every other column, receives the series value.
    Payload,
}

impl ColumnRole {
    pub const fn for_index(index: usize) -> Self {
        match index {
            0 => ColumnRole::Key,
            1 => ColumnRole::PartitionKey,
            _ => ColumnRole::Payload,
        }
    }
}

/// Describes a single generated column: its ordinal, its role and its SQL type.
#[derive(Clone, Debug)]
pub struct ColumnDeclaration {
    index: usize,
    role: ColumnRole,
    data_type: Cow<'static, str>,
}

impl ColumnDeclaration {
    /// Constructs the column at `index`. Key columns ignore `data_type` and use [`FIXED_COLUMN_TYPE`].
    pub fn new(index: usize, data_type: &str) -> Self {
        let role = ColumnRole::for_index(index);
        let data_type = match role {
            ColumnRole::Key | ColumnRole::PartitionKey => Cow::Borrowed(FIXED_COLUMN_TYPE),
            ColumnRole::Payload => Cow::Owned(data_type.to_string()),
        };
        Self {
            index,
            role,
            data_type,
        }
    }

    pub fn role(&self) -> ColumnRole {
        self.role
    }

    /// Returns the column's name, `col{index}`.
    pub fn get_name(&self) -> String {
        format!("col{}", self.index)
    }

    /// Returns the column's data type exactly as it will be written.
    pub fn get_type(&self) -> &str {
        &self.data_type
    }

    /// Expression producing this column's value from the `generate_series` variable `i`.
    pub fn value_term(&self, partitions: Option<u32>) -> String {
        match (self.role, partitions) {
            (ColumnRole::PartitionKey, Some(partitions)) => format!("i%{}", partitions),
            _ => "i".to_string(),
        }
    }
}

impl Display for ColumnDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{} {}", self.get_name(), self.get_type()))
    }
}
