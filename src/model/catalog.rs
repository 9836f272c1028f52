//! Example catalog - the fixed set of authored join examples
//!
//! Records are authored in an embedded JSON document and validated at
//! construction time. Content errors are fatal at startup; nothing here
//! can fail once the catalog exists.

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Authored catalog content, compiled into the binary.
const BUILTIN_EXAMPLES: &str = include_str!("examples.json");

/// A single cell in a sample table.
///
/// `Null` is the display sentinel for an absent/unmatched field; renderers
/// must show it distinctly from ordinary values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Int(i64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One table row. `values` is positional, matching the table's `columns`.
///
/// `matched` marks rows that participate in the join result; the renderer
/// highlights them during the match-finding steps of the animation.
#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    pub values: Vec<CellValue>,
    #[serde(default)]
    pub matched: bool,
}

/// A titled sample table with ordered columns and display-ordered rows.
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    fn validate(&self, example: &str) -> Result<()> {
        ensure!(
            !self.columns.is_empty(),
            "{}: table '{}' has no columns",
            example,
            self.title
        );
        for (i, row) in self.rows.iter().enumerate() {
            ensure!(
                row.values.len() == self.columns.len(),
                "{}: table '{}' row {} has {} values for {} columns",
                example,
                self.title,
                i,
                row.values.len(),
                self.columns.len()
            );
        }
        Ok(())
    }
}

/// One authored join example.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleRecord {
    /// Display label, unique within the catalog
    pub name: String,
    pub definition: String,
    pub real_life_analogy: String,
    pub explanation: String,
    pub left_table: Table,
    pub right_table: Table,
    /// Pre-authored outcome of the operation; never computed at runtime
    pub result_table: Table,
    /// Result columns introduced by the query itself (AS aliases, literals)
    /// rather than taken verbatim from a source table
    #[serde(default)]
    pub result_aliases: Vec<String>,
    pub query_text: String,
}

impl ExampleRecord {
    /// Whether this example is a set operation (UNION family) rather than
    /// a join; drives the operator glyph in the animation diagram.
    pub fn is_set_operation(&self) -> bool {
        self.name.contains("UNION")
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.name.trim().is_empty(), "example has an empty name");
        self.left_table.validate(&self.name)?;
        self.right_table.validate(&self.name)?;
        self.result_table.validate(&self.name)?;

        // Every result column must be traceable to a source column or be a
        // declared query alias.
        for col in &self.result_table.columns {
            let known = self.left_table.columns.contains(col)
                || self.right_table.columns.contains(col)
                || self.result_aliases.contains(col);
            ensure!(
                known,
                "{}: result column '{}' is neither a source column nor a declared alias",
                self.name,
                col
            );
        }
        Ok(())
    }
}

/// Ordered, read-only sequence of examples, fixed at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ExampleRecord>,
}

impl Catalog {
    /// Validate and wrap a set of records.
    pub fn from_records(records: Vec<ExampleRecord>) -> Result<Self> {
        ensure!(!records.is_empty(), "catalog must contain at least one example");

        let mut names = HashSet::new();
        for record in &records {
            record.validate()?;
            ensure!(
                names.insert(record.name.clone()),
                "duplicate example name '{}'",
                record.name
            );
        }

        Ok(Self { records })
    }

    /// Parse and validate the embedded example catalog.
    pub fn builtin() -> Result<Self> {
        let records: Vec<ExampleRecord> = serde_json::from_str(BUILTIN_EXAMPLES)
            .context("failed to parse built-in example catalog")?;
        Self::from_records(records).context("built-in example catalog is invalid")
    }

    pub fn get(&self, index: usize) -> Option<&ExampleRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(title: &str, columns: &[&str], rows: Vec<Vec<CellValue>>) -> Table {
        Table {
            title: title.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|values| Row {
                    values,
                    matched: false,
                })
                .collect(),
        }
    }

    fn record(name: &str) -> ExampleRecord {
        ExampleRecord {
            name: name.to_string(),
            definition: "def".to_string(),
            real_life_analogy: "analogy".to_string(),
            explanation: "explanation".to_string(),
            left_table: table(
                "Left",
                &["id", "name"],
                vec![vec![CellValue::Int(1), CellValue::Text("a".to_string())]],
            ),
            right_table: table(
                "Right",
                &["id", "value"],
                vec![vec![CellValue::Int(1), CellValue::Text("b".to_string())]],
            ),
            result_table: table(
                "Result",
                &["name", "value"],
                vec![vec![
                    CellValue::Text("a".to_string()),
                    CellValue::Text("b".to_string()),
                ]],
            ),
            result_aliases: vec![],
            query_text: "SELECT 1;".to_string(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().expect("builtin catalog must validate");
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let catalog = Catalog::builtin().unwrap();
        let mut names = HashSet::new();
        for i in 0..catalog.len() {
            assert!(names.insert(catalog.get(i).unwrap().name.clone()));
        }
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get(catalog.len()).is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(Catalog::from_records(vec![]).is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Catalog::from_records(vec![record("INNER JOIN"), record("INNER JOIN")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_row_arity_mismatch_rejected() {
        let mut bad = record("INNER JOIN");
        bad.left_table.rows[0].values.pop();
        assert!(Catalog::from_records(vec![bad]).is_err());
    }

    #[test]
    fn test_undeclared_result_column_rejected() {
        let mut bad = record("INNER JOIN");
        bad.result_table.columns.push("invented".to_string());
        for row in &mut bad.result_table.rows {
            row.values.push(CellValue::Null);
        }
        assert!(Catalog::from_records(vec![bad]).is_err());
    }

    #[test]
    fn test_declared_alias_accepted() {
        let mut ok = record("UNION");
        ok.result_table.columns.push("source".to_string());
        for row in &mut ok.result_table.rows {
            row.values.push(CellValue::Text("Both".to_string()));
        }
        ok.result_aliases.push("source".to_string());
        assert!(Catalog::from_records(vec![ok]).is_ok());
    }

    #[test]
    fn test_null_cell_displays_sentinel() {
        assert_eq!(CellValue::Null.to_string(), "NULL");
        assert_eq!(CellValue::Int(42).to_string(), "42");
        assert_eq!(CellValue::Text("x".to_string()).to_string(), "x");
    }
}
