//! `mysql_async` connection wrapper
//!
//! Executes planned DDL on a live server. Server errors are handed back exactly as
//! `mysql_async` reports them.

use ddlkit_core::DdlExecutor;
use mysql_async::prelude::Queryable;
use mysql_async::{Conn, Opts};

/// A `mysql_async` connection that can run DDL statements
#[derive(Debug)]
pub struct MySqlExecutor {
    conn: Conn,
}

impl MySqlExecutor {
    /// Wrap an open connection
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    /// Open a connection from a `mysql://` URL
    pub async fn connect(url: &str) -> Result<Self, mysql_async::Error> {
        let opts = Opts::from_url(url)?;
        let conn = Conn::new(opts).await?;
        Ok(Self { conn })
    }

    /// Access the underlying connection
    pub fn conn_mut(&mut self) -> &mut Conn {
        &mut self.conn
    }
}

impl DdlExecutor for MySqlExecutor {
    type Error = mysql_async::Error;

    async fn execute(&mut self, sql: &str) -> Result<(), Self::Error> {
        self.conn.query_drop(sql).await
    }
}
