use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Physical layout of the generated tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableType {
    /// Unpartitioned, randomly distributed.
    Heap,
    /// Append-only, row-oriented, range partitioned on `col1`.
    PartitionedAo,
    /// Append-only, column-oriented, range partitioned on `col1`.
    #[default]
    PartitionedAoco,
}

impl TableType {
    pub const ALL: [TableType; 3] = [
        TableType::Heap,
        TableType::PartitionedAo,
        TableType::PartitionedAoco,
    ];

    /// The tag accepted by `-tableType`.
    pub const fn tag(&self) -> &'static str {
        match self {
            TableType::Heap => "heap",
            TableType::PartitionedAo => "partitionedAO",
            TableType::PartitionedAoco => "partitionedAOCO",
        }
    }

    /// Table name prefix used when none is given.
    pub const fn default_prefix(&self) -> &'static str {
        match self {
            TableType::Heap => "heap",
            TableType::PartitionedAo => "pao",
            TableType::PartitionedAoco => "paoco",
        }
    }

    pub const fn is_partitioned(&self) -> bool {
        !matches!(self, TableType::Heap)
    }

    /// `WITH (...)` storage options, if the type has any.
    const fn storage_options(&self) -> Option<&'static str> {
        match self {
            TableType::Heap => None,
            TableType::PartitionedAo => Some("APPENDONLY=true"),
            TableType::PartitionedAoco => Some("orientation='column', APPENDONLY=true"),
        }
    }
}

impl Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TableType {
    type Err = GenError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TableType::ALL
            .into_iter()
            .find(|table_type| table_type.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                GenError::Config(format!(
                    "unknown table type '{}', expected one of: heap, partitionedAO, partitionedAOCO",
                    s
                ))
            })
    }
}

/// The text following the column list of a `CREATE TABLE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StorageClause {
    table_type: TableType,
    partitions: Option<u32>,
}

impl StorageClause {
    /// Partitioned types need a partition count greater than zero; heap tables ignore it.
    pub fn new(table_type: TableType, partitions: Option<u32>) -> Result<Self> {
        if table_type.is_partitioned() {
            match partitions {
                None => return Err(GenError::MissingPartitionCount(table_type)),
                Some(0) => return Err(GenError::InvalidPartitionCount(table_type)),
                Some(_) => {}
            }
        }
        Ok(Self {
            table_type,
            partitions,
        })
    }

    pub fn table_type(&self) -> TableType {
        self.table_type
    }
}

const DISTRIBUTION: &str = "DISTRIBUTED RANDOMLY";

impl Display for StorageClause {
    /// Heap tables get ` DISTRIBUTED RANDOMLY ` with its surrounding spaces, so a heap
    /// `CREATE TABLE` reads `(...)  DISTRIBUTED RANDOMLY ;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.table_type.storage_options(), self.partitions) {
            (Some(options), Some(partitions)) => write!(
                f,
                "WITH ({}) {} PARTITION BY RANGE(col1) (START(0) END({}) EVERY(1))",
                options, DISTRIBUTION, partitions
            ),
            _ => write!(f, " {} ", DISTRIBUTION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_per_type() {
        let heap = StorageClause::new(TableType::Heap, None).unwrap();
        assert_eq!(heap.to_string(), " DISTRIBUTED RANDOMLY ");

        let ao = StorageClause::new(TableType::PartitionedAo, Some(12)).unwrap();
        assert_eq!(
            ao.to_string(),
            "WITH (APPENDONLY=true) DISTRIBUTED RANDOMLY PARTITION BY RANGE(col1) (START(0) END(12) EVERY(1))"
        );

        let aoco = StorageClause::new(TableType::PartitionedAoco, Some(4)).unwrap();
        assert_eq!(
            aoco.to_string(),
            "WITH (orientation='column', APPENDONLY=true) DISTRIBUTED RANDOMLY PARTITION BY RANGE(col1) (START(0) END(4) EVERY(1))"
        );
    }

    #[test]
    fn test_heap_ignores_partitions() {
        let heap = StorageClause::new(TableType::Heap, Some(7)).unwrap();
        assert_eq!(heap.to_string(), " DISTRIBUTED RANDOMLY ");
    }

    #[test]
    fn test_partitioned_requires_count() {
        assert!(matches!(
            StorageClause::new(TableType::PartitionedAoco, None),
            Err(GenError::MissingPartitionCount(TableType::PartitionedAoco))
        ));
        assert!(matches!(
            StorageClause::new(TableType::PartitionedAo, Some(0)),
            Err(GenError::InvalidPartitionCount(TableType::PartitionedAo))
        ));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("heap".parse::<TableType>().unwrap(), TableType::Heap);
        assert_eq!(
            "partitionedAO".parse::<TableType>().unwrap(),
            TableType::PartitionedAo
        );
        assert_eq!(
            "partitionedaoco".parse::<TableType>().unwrap(),
            TableType::PartitionedAoco
        );
        assert!("columnar".parse::<TableType>().is_err());
        for table_type in TableType::ALL {
            assert_eq!(table_type.tag().parse::<TableType>().unwrap(), table_type);
        }
    }
}
