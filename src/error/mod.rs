use std::fmt::{self, Display, Formatter};

use crate::types::TableType;

#[derive(Debug)]
pub enum GenError {
    Io(std::io::Error),
    Config(String),
    MissingPartitionCount(TableType),
    InvalidPartitionCount(TableType),
}

pub type Result<T> = std::result::Result<T, GenError>;

impl Display for GenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io(err) => write!(f, "I/O error: {}", err),
            GenError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GenError::MissingPartitionCount(table_type) => write!(
                f,
                "Table type {} is range partitioned and needs -numOfPartitions",
                table_type
            ),
            GenError::InvalidPartitionCount(table_type) => write!(
                f,
                "Table type {} needs a partition count greater than 0",
                table_type
            ),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenError {
    fn from(e: std::io::Error) -> Self {
        GenError::Io(e)
    }
}
impl From<ron::error::SpannedError> for GenError {
    fn from(e: ron::error::SpannedError) -> Self {
        GenError::Config(format!("invalid profile: {}", e))
    }
}
