//! Schema generation driver
//!
//! Walks the fields of one table, resolves and validates every string field, and
//! produces the ordered DDL statements for it. Nothing is emitted when any field
//! fails validation.

use std::borrow::Cow;
use std::collections::HashSet;

use ddlkit_core::{DdlError, DdlExecutor, Result};
use ddlkit_types::mysql::MAX_VARCHAR_LENGTH;
use ddlkit_types::mysql::ddl::{Column, ColumnDef, FieldDescriptor, Index, Table, TableSql};

use crate::config::DdlConfig;
use crate::rules::ColumnTypeDecision;
use crate::validate::resolve_and_validate;

/// One field of a [`TableSchema`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaField {
    /// String field; its type comes from the rule engine
    String(FieldDescriptor),
    /// Pre-typed column passed through unchanged
    Column(ColumnDef),
}

impl SchemaField {
    /// Field name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String(field) => field.name,
            Self::Column(def) => def.name,
        }
    }
}

/// Table description handed over by model introspection.
///
/// # Examples
///
/// ```
/// use ddlkit_mysql::{DdlConfig, TableSchema};
/// use ddlkit_types::mysql::ddl::{ColumnDef, FieldDescriptor};
///
/// let schema = TableSchema::new("users")
///     .column(ColumnDef::new("users", "id", "INT").primary_key().autoincrement())
///     .string(FieldDescriptor::new("email").unique());
///
/// let plan = schema.plan(&DdlConfig::default()).unwrap();
/// assert_eq!(plan.statements(), vec![
///     "CREATE TABLE `users` (\n\t`id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY,\n\t`email` VARCHAR(255)\n);".to_string(),
///     "CREATE UNIQUE INDEX `users_email_unique` ON `users`(`email`);".to_string(),
/// ]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSchema {
    name: &'static str,
    fields: Vec<SchemaField>,
    overwrite: Option<bool>,
}

impl TableSchema {
    /// Start an empty table
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
            overwrite: None,
        }
    }

    /// Add a string field
    #[must_use]
    pub fn string(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(SchemaField::String(field));
        self
    }

    /// Add a pre-typed column
    #[must_use]
    pub fn column(mut self, def: ColumnDef) -> Self {
        self.fields.push(SchemaField::Column(def));
        self
    }

    /// Drop an existing table first; overrides `[table] overwrite` from config
    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Table name
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve and validate every field and build the DDL plan.
    ///
    /// Fails on the first field whose index request the dialect cannot honour.
    pub fn plan(&self, config: &DdlConfig) -> Result<SchemaPlan> {
        if self.fields.is_empty() {
            return Err(DdlError::Schema(format!(
                "table `{}` has no columns",
                self.name
            )));
        }

        // MySQL column names are case-insensitive
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.name().to_ascii_lowercase()) {
                return Err(DdlError::Schema(format!(
                    "duplicate column `{}` in table `{}`",
                    field.name(),
                    self.name
                )));
            }
        }

        let mut columns = Vec::with_capacity(self.fields.len());
        let mut indexes = Vec::new();
        let mut decisions = Vec::new();

        for field in &self.fields {
            match field {
                SchemaField::String(descriptor) => {
                    let decision = resolve_and_validate(descriptor, &config.limits)?;

                    if decision
                        .sql_type
                        .varchar_length()
                        .is_some_and(|len| len > MAX_VARCHAR_LENGTH)
                    {
                        ddlkit_core::ddlkit_warn!(
                            table = self.name,
                            field = descriptor.name,
                            sql_type = %decision.sql_type,
                            "VARCHAR longer than the engine accepts; leaving it to the server"
                        );
                    }

                    columns.push(string_column(self.name, descriptor, &decision));
                    if let Some(kind) = descriptor.index {
                        indexes.push(Index::for_column(self.name, descriptor.name, kind));
                    }
                    decisions.push((descriptor.name, decision));
                }
                SchemaField::Column(def) => {
                    let mut column = def.into_column();
                    column.table = Cow::Borrowed(self.name);
                    columns.push(column);
                }
            }
        }

        let mut table = Table::new(self.name);
        table.engine = config.table.engine.clone().map(Cow::Owned);
        table.charset = config.table.charset.clone().map(Cow::Owned);

        Ok(SchemaPlan {
            table,
            columns,
            indexes,
            decisions,
            overwrite: self.overwrite.unwrap_or(config.table.overwrite),
        })
    }

    /// Plan and execute in one go
    pub async fn push<E: DdlExecutor>(&self, config: &DdlConfig, executor: &mut E) -> Result<()> {
        self.plan(config)?.push(executor).await
    }
}

fn string_column(
    table: &'static str,
    descriptor: &FieldDescriptor,
    decision: &ColumnTypeDecision,
) -> Column {
    let mut column = Column::new(table, descriptor.name, decision.sql_type_name());
    if descriptor.primary_key {
        column = column.primary_key();
    }
    if descriptor.not_null {
        column = column.not_null();
    }
    column
}

/// Validated DDL for one table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaPlan {
    pub table: Table,
    pub columns: Vec<Column>,
    pub indexes: Vec<Index>,
    /// Rule engine output per string field, in declaration order
    pub decisions: Vec<(&'static str, ColumnTypeDecision)>,
    pub overwrite: bool,
}

impl SchemaPlan {
    /// Decision for a string field
    #[must_use]
    pub fn decision(&self, field: &str) -> Option<&ColumnTypeDecision> {
        self.decisions
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, decision)| decision)
    }

    /// Generate CREATE TABLE SQL
    #[must_use]
    pub fn create_table_sql(&self) -> String {
        TableSql::new(&self.table)
            .columns(&self.columns)
            .create_table_sql()
    }

    /// All statements in execution order
    #[must_use]
    pub fn statements(&self) -> Vec<String> {
        let mut statements = Vec::with_capacity(self.indexes.len() + 2);
        if self.overwrite {
            statements.push(self.table.drop_table_if_exists_sql());
        }
        statements.push(self.create_table_sql());
        statements.extend(self.indexes.iter().map(Index::create_index_sql));
        statements
    }

    /// Execute the statements in order, stopping at the first driver error.
    ///
    /// Driver errors come back as [`DdlError::EngineRejection`] untouched.
    pub async fn push<E: DdlExecutor>(&self, executor: &mut E) -> Result<()> {
        for statement in self.statements() {
            ddlkit_core::ddlkit_trace_ddl!(&statement);
            executor
                .execute(&statement)
                .await
                .map_err(DdlError::engine)?;
        }
        Ok(())
    }
}
