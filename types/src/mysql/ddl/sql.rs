//! SQL generation for MySQL DDL types
//!
//! Turns [`Table`], [`Column`] and [`Index`] entities into the statement text the
//! schema driver sends to the server.

use crate::alloc_prelude::*;

use super::{Column, Index, Table};

/// Quote an identifier with backticks, doubling embedded backticks.
#[must_use]
pub fn quote_ident(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

fn quote_list<'a>(idents: impl IntoIterator<Item = &'a str>) -> String {
    idents
        .into_iter()
        .map(quote_ident)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Table SQL Generation
// =============================================================================

/// A table with its columns, ready for SQL generation
#[derive(Clone, Debug)]
pub struct TableSql<'a> {
    pub table: &'a Table,
    pub columns: &'a [Column],
}

impl<'a> TableSql<'a> {
    /// Create a new TableSql for SQL generation
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            columns: &[],
        }
    }

    /// Set columns
    pub fn columns(mut self, columns: &'a [Column]) -> Self {
        self.columns = columns;
        self
    }

    /// Generate CREATE TABLE SQL
    pub fn create_table_sql(&self) -> String {
        let mut sql = format!("CREATE TABLE {} (\n", quote_ident(self.table.name()));

        let pk_columns: Vec<&str> = self
            .columns
            .iter()
            .filter(|c| c.is_primary_key())
            .map(Column::name)
            .collect();
        let inline_pk = pk_columns.len() == 1;

        let mut lines: Vec<String> = self
            .columns
            .iter()
            .map(|column| format!("\t{}", column.to_column_sql(inline_pk)))
            .collect();

        // Composite primary key
        if pk_columns.len() > 1 {
            lines.push(format!("\tPRIMARY KEY({})", quote_list(pk_columns)));
        }

        sql.push_str(&lines.join(",\n"));
        sql.push_str("\n)");

        if let Some(engine) = self.table.engine.as_ref() {
            sql.push_str(&format!(" ENGINE={}", engine));
        }
        if let Some(charset) = self.table.charset.as_ref() {
            sql.push_str(&format!(" DEFAULT CHARSET={}", charset));
        }

        sql.push(';');
        sql
    }
}

// =============================================================================
// Column SQL Generation
// =============================================================================

impl Column {
    /// Generate the column definition SQL (without leading/trailing punctuation)
    ///
    /// `inline_pk` is set when the table has a single primary key column, which
    /// then carries `PRIMARY KEY` itself.
    pub fn to_column_sql(&self, inline_pk: bool) -> String {
        let mut sql = format!("{} {}", quote_ident(self.name()), self.sql_type());

        if self.not_null || self.is_primary_key() {
            sql.push_str(" NOT NULL");
        }

        if self.is_autoincrement() {
            sql.push_str(" AUTO_INCREMENT");
        }

        if inline_pk && self.is_primary_key() {
            sql.push_str(" PRIMARY KEY");
        }

        sql
    }
}

// =============================================================================
// Index SQL Generation
// =============================================================================

impl Index {
    /// Generate CREATE INDEX SQL
    pub fn create_index_sql(&self) -> String {
        let unique = if self.is_unique { "UNIQUE " } else { "" };
        format!(
            "CREATE {}INDEX {} ON {}({});",
            unique,
            quote_ident(self.name()),
            quote_ident(self.table()),
            quote_list(self.columns.iter().map(|c| c.as_ref()))
        )
    }
}

// =============================================================================
// Table-level utilities
// =============================================================================

impl Table {
    /// Generate DROP TABLE IF EXISTS SQL
    pub fn drop_table_if_exists_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {};", quote_ident(self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mysql::ddl::{ColumnDef, IndexKind, TableDef};

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident("users"), "`users`");
        assert_eq!(quote_ident("we`ird"), "`we``ird`");
    }

    #[test]
    fn test_create_table_inline_pk() {
        let table = TableDef::new("notes")
            .engine("InnoDB")
            .charset("utf8mb4")
            .into_table();
        let columns = [
            ColumnDef::new("notes", "id", "INT")
                .primary_key()
                .autoincrement()
                .into_column(),
            Column::new("notes", "body", "TEXT"),
            Column::new("notes", "title", "VARCHAR(255)").not_null(),
        ];

        let sql = TableSql::new(&table).columns(&columns).create_table_sql();
        assert_eq!(
            sql,
            "CREATE TABLE `notes` (\n\
             \t`id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY,\n\
             \t`body` TEXT,\n\
             \t`title` VARCHAR(255) NOT NULL\n\
             ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;"
        );
    }

    #[test]
    fn test_create_table_composite_pk() {
        let table = Table::new("pairs");
        let columns = [
            Column::new("pairs", "a", "VARCHAR(10)").primary_key(),
            Column::new("pairs", "b", "VARCHAR(10)").primary_key(),
        ];

        let sql = TableSql::new(&table).columns(&columns).create_table_sql();
        assert!(sql.contains("\t`a` VARCHAR(10) NOT NULL,\n"));
        assert!(sql.contains("\tPRIMARY KEY(`a`, `b`)\n"));
        assert!(sql.ends_with(");"));
    }

    #[test]
    fn test_index_sql() {
        let index = Index::for_column("users", "email", IndexKind::Unique);
        assert_eq!(
            index.create_index_sql(),
            "CREATE UNIQUE INDEX `users_email_unique` ON `users`(`email`);"
        );

        let index = Index::for_column("users", "we`ird", IndexKind::NonUnique);
        assert_eq!(
            index.create_index_sql(),
            "CREATE INDEX `users_we``ird_idx` ON `users`(`we``ird`);"
        );
    }

    #[test]
    fn test_drop_table_if_exists_sql() {
        let table = Table::new("notes");
        assert_eq!(
            table.drop_table_if_exists_sql(),
            "DROP TABLE IF EXISTS `notes`;"
        );
    }
}
