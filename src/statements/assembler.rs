use log::{debug, warn};

use super::descriptor::describe_tables;
use crate::config::GenerationPlan;
use crate::types::{ColumnDeclarations, ROWS_PER_TABLE};

/// Complete statements for one run, in the order they are written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statements {
    pub creates: Vec<String>,
    pub inserts: Vec<String>,
    pub indexes: Vec<String>,
}

impl Statements {
    /// All statements: creates, then inserts, then indexes.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.creates
            .iter()
            .chain(self.inserts.iter())
            .chain(self.indexes.iter())
    }

    pub fn len(&self) -> usize {
        self.creates.len() + self.inserts.len() + self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds every `CREATE TABLE`, `INSERT` and `CREATE INDEX` statement described by `plan`.
///
/// Inconsistent plans (an index on `col2` with fewer than three columns, a partitioned
/// table without a `col1`) are logged and still generated.
pub fn assemble(plan: &GenerationPlan) -> Statements {
    if plan.indexes && plan.column_count < 3 {
        warn!(
            "indexes reference col2 but tables only have {} column(s)",
            plan.column_count
        );
    }
    if plan.table_type().is_partitioned() && plan.column_count < 2 {
        warn!(
            "{} tables partition on col1 but only {} column(s) were requested",
            plan.table_type(),
            plan.column_count
        );
    }

    let fragments = describe_tables(&plan.prefix, plan.table_count, plan.indexes);
    let columns = ColumnDeclarations::generate(plan.column_count, &plan.data_type);
    let column_list = columns.to_string();
    let storage = plan.storage.to_string();
    debug!("column list: {}", column_list);
    debug!("storage clause: {}", storage);

    let creates = fragments
        .creates
        .iter()
        .map(|create| format!("{} ({}) {};", create, column_list, storage))
        .collect();

    let values = columns.value_list(plan.partitions);
    let inserts = fragments
        .inserts
        .iter()
        .map(|insert| {
            format!(
                "{}{} FROM generate_series(1,{})i;",
                insert, values, ROWS_PER_TABLE
            )
        })
        .collect();

    Statements {
        creates,
        inserts,
        indexes: fragments.indexes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TableType;
    use sqlparser::dialect::PostgreSqlDialect;
    use sqlparser::parser::Parser;

    fn plan(tables: usize, cols: usize, table_type: TableType, partitions: Option<u32>) -> GenerationPlan {
        GenerationPlan::new(tables, cols, "text", table_type, partitions, "unused.sql").unwrap()
    }

    #[test]
    fn test_aoco_scenario() {
        let statements = assemble(&plan(2, 3, TableType::PartitionedAoco, Some(4)));
        let clause = "WITH (orientation='column', APPENDONLY=true) DISTRIBUTED RANDOMLY PARTITION BY RANGE(col1) (START(0) END(4) EVERY(1))";
        assert_eq!(
            statements.creates,
            vec![
                format!("CREATE TABLE paoco_table0 (col0 int,col1 int,col2 text) {};", clause),
                format!("CREATE TABLE paoco_table1 (col0 int,col1 int,col2 text) {};", clause),
            ]
        );
        assert_eq!(
            statements.inserts,
            vec![
                "INSERT INTO paoco_table0 SELECT i,i%4,i FROM generate_series(1,10000)i;",
                "INSERT INTO paoco_table1 SELECT i,i%4,i FROM generate_series(1,10000)i;",
            ]
        );
        assert!(statements.indexes.is_empty());
        assert_eq!(statements.len(), 4);
    }

    #[test]
    fn test_heap_with_indexes() {
        let plan = plan(1, 4, TableType::Heap, None).with_indexes(true);
        let statements = assemble(&plan);
        assert_eq!(
            statements.creates,
            vec!["CREATE TABLE heap_table0 (col0 int,col1 int,col2 text,col3 text)  DISTRIBUTED RANDOMLY ;"]
        );
        assert_eq!(
            statements.inserts,
            vec!["INSERT INTO heap_table0 SELECT i,i,i,i FROM generate_series(1,10000)i;"]
        );
        assert_eq!(
            statements.indexes,
            vec!["CREATE INDEX heap_table0_idx ON heap_table0(col2);"]
        );
        let order: Vec<&String> = statements.iter().collect();
        assert_eq!(order[0], &statements.creates[0]);
        assert_eq!(order[1], &statements.inserts[0]);
        assert_eq!(order[2], &statements.indexes[0]);
    }

    #[test]
    fn test_exactly_one_storage_clause() {
        let markers = [
            "WITH (APPENDONLY=true)",
            "WITH (orientation='column', APPENDONLY=true)",
        ];
        for (table_type, expected) in [
            (TableType::Heap, None),
            (TableType::PartitionedAo, Some(markers[0])),
            (TableType::PartitionedAoco, Some(markers[1])),
        ] {
            let statements = assemble(&plan(3, 5, table_type, Some(6)));
            for create in &statements.creates {
                assert_eq!(create.matches("DISTRIBUTED RANDOMLY").count(), 1);
                for marker in markers {
                    assert_eq!(create.contains(marker), Some(marker) == expected);
                }
                assert_eq!(create.contains("PARTITION BY RANGE(col1)"), expected.is_some());
            }
        }
    }

    #[test]
    fn test_narrow_tables() {
        let one = assemble(&plan(1, 1, TableType::PartitionedAo, Some(3)));
        assert_eq!(
            one.inserts,
            vec!["INSERT INTO pao_table0 SELECT i FROM generate_series(1,10000)i;"]
        );
        let two = assemble(&plan(1, 2, TableType::PartitionedAo, Some(3)));
        assert_eq!(
            two.inserts,
            vec!["INSERT INTO pao_table0 SELECT i,i%3 FROM generate_series(1,10000)i;"]
        );
    }

    #[test]
    fn test_no_tables() {
        let statements = assemble(&plan(0, 3, TableType::PartitionedAoco, Some(4)).with_indexes(true));
        assert!(statements.is_empty());
    }

    #[test]
    fn test_inserts_and_indexes_parse() {
        let plan = plan(3, 6, TableType::PartitionedAoco, Some(10)).with_indexes(true);
        let statements = assemble(&plan);
        for sql in statements.inserts.iter().chain(statements.indexes.iter()) {
            match Parser::parse_sql(&PostgreSqlDialect {}, sql) {
                Ok(parsed) => assert_eq!(parsed.len(), 1),
                Err(err) => panic!("{}: {}", sql, err),
            }
        }
    }
}
