use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info, trace};

use crate::config::GenerationPlan;
use crate::error::Result;
use crate::statements::{assemble, Statements};

/// Statement counts of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub creates: usize,
    pub inserts: usize,
    pub indexes: usize,
}

impl From<&Statements> for Summary {
    fn from(value: &Statements) -> Self {
        Self {
            creates: value.creates.len(),
            inserts: value.inserts.len(),
            indexes: value.indexes.len(),
        }
    }
}

/// Creates `path`, or empties it if it already exists.
pub fn truncate(path: &Path) -> Result<()> {
    File::create(path)?;
    Ok(())
}

/// Appends every statement to `path`, one per line: creates, then inserts, then indexes.
/// A failure part way through leaves whatever was already written.
pub fn append(path: &Path, statements: &Statements) -> Result<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut out = BufWriter::new(file);
    for statement in statements.iter() {
        trace!("{}", statement);
        writeln!(out, "{}", statement)?;
    }
    out.flush()?;
    Ok(())
}

/// Replaces the contents of `plan.output` with the statements the plan describes.
pub fn write_schema(plan: &GenerationPlan) -> Result<Summary> {
    info!(
        "generating {} {} table(s) with {} column(s) of {} into {}",
        plan.table_count,
        plan.table_type(),
        plan.column_count,
        plan.data_type,
        plan.output.display()
    );
    truncate(&plan.output)?;
    debug!("truncated {}", plan.output.display());

    let statements = assemble(plan);
    append(&plan.output, &statements)?;

    let summary = Summary::from(&statements);
    info!(
        "wrote {} create, {} insert and {} index statement(s)",
        summary.creates, summary.inserts, summary.indexes
    );
    Ok(summary)
}
