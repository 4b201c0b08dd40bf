//! Target table schemas and insert-statement construction.
//!
//! Each seedable table is a [`TargetSchema`] variant; the variant maps to its
//! DDL, its column list, and its row generator. Adding a table means adding a
//! variant, and the compiler points at every match that needs extending.

use rand::Rng;

use crate::error::SeedError;
use crate::generators::{AccountGenerator, PersonGenerator};

/// One generated row: column values in the same order as the target
/// schema's column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(Vec<String>);

impl Row {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

/// The set of tables the seeder knows how to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSchema {
    /// `users(name, email)` with a bigserial key.
    Users,
    /// `accounts(owner_name, contact_email)` with a bigserial key.
    Accounts,
}

impl TargetSchema {
    /// Table name.
    pub fn table(&self) -> &'static str {
        match self {
            TargetSchema::Users => "users",
            TargetSchema::Accounts => "accounts",
        }
    }

    /// Columns the seeder fills, in insert order. The `id` key is
    /// table-assigned and never generated.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TargetSchema::Users => &["name", "email"],
            TargetSchema::Accounts => &["owner_name", "contact_email"],
        }
    }

    /// Idempotent DDL for the table. Never drops or alters existing schema.
    pub fn ddl(&self) -> &'static str {
        match self {
            TargetSchema::Users => {
                r#"
                CREATE TABLE IF NOT EXISTS users (
                    id BIGSERIAL PRIMARY KEY,
                    name TEXT NOT NULL,
                    email TEXT NOT NULL
                )
                "#
            }
            TargetSchema::Accounts => {
                r#"
                CREATE TABLE IF NOT EXISTS accounts (
                    id BIGSERIAL PRIMARY KEY,
                    owner_name TEXT NOT NULL,
                    contact_email TEXT NOT NULL
                )
                "#
            }
        }
    }

    /// Generates one row for this schema, column order matching
    /// [`columns`](Self::columns).
    pub fn generate_row(&self, rng: &mut impl Rng) -> Row {
        match self {
            TargetSchema::Users => {
                let person = PersonGenerator::new().generate(rng);
                Row::new(vec![person.name, person.email])
            }
            TargetSchema::Accounts => {
                let account = AccountGenerator::new().generate(rng);
                Row::new(vec![account.owner_name, account.contact_email])
            }
        }
    }

    /// Builds one parameterized multi-row insert statement for `rows`.
    ///
    /// Row arity is checked here, before dispatch, so a mismatched row shape
    /// never reaches the database.
    pub fn insert_statement(&self, rows: &[Row]) -> Result<String, SeedError> {
        let columns = self.columns();

        if let Some(bad) = rows.iter().find(|r| r.arity() != columns.len()) {
            return Err(SeedError::InvalidArgument(format!(
                "row has {} values but table {} takes {} columns",
                bad.arity(),
                self.table(),
                columns.len()
            )));
        }

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ",
            self.table(),
            columns.join(", ")
        );

        let mut param = 1;
        for i in 0..rows.len() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push('(');
            for c in 0..columns.len() {
                if c > 0 {
                    sql.push_str(", ");
                }
                sql.push('$');
                sql.push_str(&param.to_string());
                param += 1;
            }
            sql.push(')');
        }

        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddl_is_idempotent_by_construction() {
        for target in [TargetSchema::Users, TargetSchema::Accounts] {
            assert!(target.ddl().contains("CREATE TABLE IF NOT EXISTS"));
        }
    }

    #[test]
    fn test_generated_row_arity_matches_columns() {
        let mut rng = rand::thread_rng();

        for target in [TargetSchema::Users, TargetSchema::Accounts] {
            let row = target.generate_row(&mut rng);
            assert_eq!(row.arity(), target.columns().len());
        }
    }

    #[test]
    fn test_insert_statement_numbers_placeholders_per_row() {
        let rows = vec![
            Row::new(vec!["a".into(), "a@x".into()]),
            Row::new(vec!["b".into(), "b@x".into()]),
            Row::new(vec!["c".into(), "c@x".into()]),
        ];

        let sql = TargetSchema::Users.insert_statement(&rows).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO users (name, email) VALUES ($1, $2), ($3, $4), ($5, $6)"
        );
    }

    #[test]
    fn test_insert_statement_rejects_arity_mismatch() {
        let rows = vec![Row::new(vec!["only-one-value".into()])];

        let err = TargetSchema::Accounts.insert_statement(&rows).unwrap_err();
        assert!(matches!(err, SeedError::InvalidArgument(_)));
    }
}
