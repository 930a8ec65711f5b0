use std::{error::Error, fmt::Debug, io::Write};

use diesel::{
    query_dsl::{methods::ExecuteDsl, LoadQuery},
    sql_types::{BigInt, Text},
    Connection, OptionalExtension, QueryableByName, RunQueryDsl,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

use crate::{configuration::DatabaseSettings, models::TableRow, utils::{error_fmt_chain, DbConnection}};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

// Every failure the database side can produce. The messages stay generic;
// the cause chain is kept for the logs.
#[derive(Error)]
pub enum GatewayError{
    #[error("Unable to connect to database")]
    ConnectionError(#[from] diesel::ConnectionError),
    #[error("Database operation failed: {0}")]
    QueryError(#[from] diesel::result::Error),
    #[error("Failed to write query result")]
    OutputError(#[from] std::io::Error),
    #[error("Failed to apply schema migrations")]
    MigrationError(#[source] Box<dyn Error + Send + Sync>),
    #[error("Database connection is closed")]
    Closed
}

impl Debug for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[derive(QueryableByName)]
struct SequenceValue{
    #[diesel(sql_type = BigInt)]
    currval: i64
}

/// The only component that talks to the database.
///
/// Owns a single connection for the whole interactive run. Statements are
/// built with diesel's query builder (or bound `sql_query`), so user input
/// only ever reaches the server as bind parameters. Each statement commits
/// on its own unless it runs inside [`Gateway::transaction`].
pub struct Gateway{
    conn: Option<DbConnection>
}

impl Gateway {
    #[tracing::instrument(
        "Connecting to database",
        skip_all,
        fields(host = %settings.host, port = settings.port, database = %settings.name)
    )]
    pub fn connect(settings: &DatabaseSettings) -> Result<Self, GatewayError>{
        let conn = DbConnection::establish(&settings.get_database_table_url())?;
        tracing::info!("Connected");

        Ok(Gateway{ conn: Some(conn) })
    }

    #[cfg(test)]
    pub(crate) fn detached() -> Self{
        Gateway{ conn: None }
    }

    pub fn is_open(&self) -> bool{
        self.conn.is_some()
    }

    fn connection(&mut self) -> Result<&mut DbConnection, GatewayError>{
        self.conn.as_mut().ok_or(GatewayError::Closed)
    }

    /// Runs an INSERT, UPDATE or DELETE and returns the number of affected rows.
    #[tracing::instrument("Executing update statement", skip_all)]
    pub fn execute_update<Q>(&mut self, statement: Q) -> Result<usize, GatewayError>
    where
        Q: RunQueryDsl<DbConnection> + ExecuteDsl<DbConnection>
    {
        let affected_rows = statement.execute(self.connection()?)?;
        tracing::debug!(affected_rows);

        Ok(affected_rows)
    }

    /// Loads every row of `query` as `R`.
    pub fn query_rows<'q, R, Q>(&mut self, query: Q) -> Result<Vec<R>, GatewayError>
    where
        Q: RunQueryDsl<DbConnection> + LoadQuery<'q, DbConnection, R>
    {
        Ok(query.load::<R>(self.connection()?)?)
    }

    /// Runs a SELECT and returns only how many rows it produced.
    #[tracing::instrument("Counting query rows", skip_all)]
    pub fn execute_query<'q, R, Q>(&mut self, query: Q) -> Result<usize, GatewayError>
    where
        Q: RunQueryDsl<DbConnection> + LoadQuery<'q, DbConnection, R>
    {
        let rows = self.query_rows::<R, Q>(query)?;
        Ok(rows.len())
    }

    /// Runs a SELECT and returns each row as its column values rendered as text.
    #[tracing::instrument("Loading query result", skip_all)]
    pub fn execute_query_and_return_result<'q, R, Q>(&mut self, query: Q) -> Result<Vec<Vec<String>>, GatewayError>
    where
        Q: RunQueryDsl<DbConnection> + LoadQuery<'q, DbConnection, R>,
        R: TableRow
    {
        let rows = self.query_rows::<R, Q>(query)?;
        Ok(rows.iter().map(R::cells).collect())
    }

    /// Runs a SELECT and writes it to `out` as a tab separated table.
    /// Returns the number of rows written; no header is written for an
    /// empty result.
    #[tracing::instrument("Printing query result", skip_all)]
    pub fn execute_query_and_print_result<'q, R, Q>(
        &mut self,
        query: Q,
        out: &mut dyn Write
    ) -> Result<usize, GatewayError>
    where
        Q: RunQueryDsl<DbConnection> + LoadQuery<'q, DbConnection, R>,
        R: TableRow
    {
        let rows = self.query_rows::<R, Q>(query)?;
        write_table(&rows, out)?;

        Ok(rows.len())
    }

    /// Last value handed out by `sequence` in this session, -1 when the
    /// server returns nothing.
    #[tracing::instrument("Reading current sequence value", skip(self))]
    pub fn current_sequence_value(&mut self, sequence: &str) -> Result<i64, GatewayError>{
        let value = diesel::sql_query("SELECT currval($1::regclass) AS currval")
            .bind::<Text, _>(sequence)
            .get_result::<SequenceValue>(self.connection()?)
            .optional()?;

        Ok(value.map(|v| v.currval).unwrap_or(-1))
    }

    /// Runs `f` inside one database transaction, rolling back on error.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut DbConnection) -> Result<T, E>,
        E: From<diesel::result::Error> + From<GatewayError>
    {
        let conn = self.connection()?;
        conn.transaction(f)
    }

    #[tracing::instrument("Running pending migrations", skip_all)]
    pub fn run_migrations(&mut self) -> Result<usize, GatewayError>{
        let applied = self.connection()?
            .run_pending_migrations(MIGRATIONS)
            .map_err(GatewayError::MigrationError)?
            .len();
        tracing::info!(applied, "Schema is up to date");

        Ok(applied)
    }

    /// Drops the connection. Safe to call more than once.
    pub fn close(&mut self){
        if self.conn.take().is_some() {
            tracing::info!("Disconnected from database");
        }
    }
}

impl Drop for Gateway {
    fn drop(&mut self) {
        self.close();
    }
}

pub fn write_table<R: TableRow>(rows: &[R], out: &mut dyn Write) -> std::io::Result<()>{
    if rows.is_empty() {
        return Ok(())
    }

    writeln!(out, "{}", R::COLUMNS.join("\t"))?;
    for row in rows {
        writeln!(out, "{}", row.cells().join("\t"))?;
    }

    Ok(())
}
