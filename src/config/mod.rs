use std::fs;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{StorageClause, TableType};
use crate::utils::normalize_args;

/// Command-line arguments. Long flags are spelled the way the perf-scale scripts call them
/// (`-numOfTables`); see [`crate::utils::normalize_args`].
#[derive(Parser, Debug)]
#[command(name = "gen_tables", about = "Generate Tables Schema")]
pub struct Args {
    #[arg(long = "numOfTables")]
    pub num_of_tables: u32,

    #[arg(long = "numOfCols")]
    pub num_of_cols: u32,

    /// Type of every column after col0 and col1
    #[arg(long = "dataType", allow_hyphen_values = true)]
    pub data_type: String,

    /// Upper bound of the col1 partition range; required for partitioned table types
    #[arg(long = "numOfPartitions", value_parser = clap::value_parser!(u32).range(1..))]
    pub num_of_partitions: Option<u32>,

    #[arg(long = "outputFile")]
    pub output_file: PathBuf,

    /// heap, partitionedAO or partitionedAOCO [default: partitionedAOCO]
    #[arg(long = "tableType")]
    pub table_type: Option<TableType>,

    /// Table name prefix [default: derived from the table type]
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Also emit a CREATE INDEX on col2 for every table
    #[arg(long)]
    pub indexes: bool,

    /// RON profile providing defaults for the optional flags
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Long flag names, the ones [`normalize_args`] may rewrite from single-dash form.
    pub fn long_flags() -> Vec<String> {
        Self::command()
            .get_arguments()
            .filter_map(|arg| arg.get_long())
            .map(str::to_string)
            .chain(std::iter::once("help".to_string()))
            .collect()
    }

    /// Parses `args` after rewriting single-dash long flags.
    pub fn parse_normalized<I, S>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let flags = Self::long_flags();
        let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
        Self::try_parse_from(normalize_args(args, &flags))
    }
}

/// Defaults read from a RON file, e.g.
/// `(prefix: Some("heap"), table_type: Some(Heap), indexes: Some(true))`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub prefix: Option<String>,
    pub table_type: Option<TableType>,
    pub indexes: Option<bool>,
    pub num_of_partitions: Option<u32>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }
}

/// Everything one run needs, after flags and profile have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub prefix: String,
    pub table_count: usize,
    pub column_count: usize,
    pub data_type: String,
    pub storage: StorageClause,
    pub partitions: Option<u32>,
    pub indexes: bool,
    pub output: PathBuf,
}

impl GenerationPlan {
    /// A plan with the table type's default prefix and no indexes.
    pub fn new(
        table_count: usize,
        column_count: usize,
        data_type: &str,
        table_type: TableType,
        partitions: Option<u32>,
        output: impl Into<PathBuf>,
    ) -> Result<Self> {
        let storage = StorageClause::new(table_type, partitions)?;
        Ok(Self {
            prefix: table_type.default_prefix().to_string(),
            table_count,
            column_count,
            data_type: data_type.to_string(),
            storage,
            partitions,
            indexes: false,
            output: output.into(),
        })
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_indexes(mut self, indexes: bool) -> Self {
        self.indexes = indexes;
        self
    }

    pub fn table_type(&self) -> TableType {
        self.storage.table_type()
    }

    /// Merges flags over the profile over built-in defaults.
    pub fn resolve(args: Args, profile: Profile) -> Result<Self> {
        let table_type = args
            .table_type
            .or(profile.table_type)
            .unwrap_or_default();
        let partitions = args.num_of_partitions.or(profile.num_of_partitions);
        let plan = Self::new(
            args.num_of_tables as usize,
            args.num_of_cols as usize,
            &args.data_type,
            table_type,
            partitions,
            args.output_file,
        )?
        .with_indexes(args.indexes || profile.indexes.unwrap_or(false));
        Ok(match args.prefix.or(profile.prefix) {
            Some(prefix) => plan.with_prefix(prefix),
            None => plan,
        })
    }

    /// Parses the process arguments, loads the profile if one is named and resolves the plan.
    pub fn from_args<I, S>(args: I) -> std::result::Result<Self, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args = Args::parse_normalized(args)?;
        let profile = match &args.config {
            Some(path) => Profile::load(path)?,
            None => Profile::default(),
        };
        Ok(Self::resolve(args, profile)?)
    }
}
