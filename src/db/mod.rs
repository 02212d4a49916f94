//! Synchronous database query helpers.
//!
//! One connection is opened per query, the whole result set is buffered,
//! and the connection is released exactly once on every exit path. Not
//! suited for large result sets. Two flavors share the [`QueryRunner`]
//! contract and differ only in row shape: [`mysql::MysqlRunner`] returns
//! the driver's ordered name-to-value rows, [`postgres::PostgresRunner`]
//! returns fixed-field records; both give by-name column access.

use std::time::Duration;

use crate::PlugResult;

pub mod mysql;
pub mod postgres;

/// Connection settings, passed through to the driver verbatim.
#[derive(Debug, Default, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub connect_timeout: Option<Duration>,
}

impl DbConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();

        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();

        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();

        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);

        self
    }
}

/// A positionally bound statement parameter.
///
/// Placeholders follow the driver's convention: `?` for MySQL, `$1`, `$2`,
/// ... for PostgreSQL.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Integer(value)
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        SqlParam::Float(value)
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        SqlParam::Bool(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

/// The shared query contract of the two driver flavors.
pub trait QueryRunner {
    type Row;

    /// Opens a connection, executes the statement with the given
    /// parameters, buffers every row and releases the connection.
    ///
    /// Zero matching rows yield an empty `Vec`, never an absent value. Any
    /// driver-level failure surfaces as a single
    /// [`PlugError::Query`] carrying the cause, after the
    /// connection has been released. No retries, no partial results.
    ///
    /// [`PlugError::Query`]: crate::error::PlugError::Query
    fn run_query(&self, sql: &str, params: &[SqlParam]) -> PlugResult<Vec<Self::Row>>;
}

/// An open connection with the capability set the runners are written
/// against: execute-and-fetch, then close.
pub trait DbConn {
    type Row;

    fn query(&mut self, sql: &str, params: &[SqlParam]) -> PlugResult<Vec<Self::Row>>;

    fn close(self) -> PlugResult<()>;
}

/// Runs one statement over an already acquired connection.
///
/// `close` is called exactly once whether the query succeeds or fails; a
/// query error takes precedence over a close error.
pub(crate) fn fetch_all_and_close<C: DbConn>(mut conn: C, sql: &str, params: &[SqlParam]) -> PlugResult<Vec<C::Row>> {
    log::debug!("executing query: {}", sql);

    let fetched = conn.query(sql, params);
    let closed = conn.close();

    let rows = fetched?;
    closed?;

    Ok(rows)
}

#[cfg(test)]
mod test_db {
    use std::{cell::Cell, rc::Rc};

    use crate::error::PlugError;

    use super::{fetch_all_and_close, DbConn, SqlParam};

    struct FakeConn {
        rows: Vec<&'static str>,
        fail: bool,
        close_calls: Rc<Cell<usize>>,
    }

    impl FakeConn {
        fn new(rows: Vec<&'static str>, fail: bool) -> (Self, Rc<Cell<usize>>) {
            let close_calls = Rc::new(Cell::new(0));
            let conn = Self {
                rows,
                fail,
                close_calls: Rc::clone(&close_calls),
            };

            (conn, close_calls)
        }
    }

    impl DbConn for FakeConn {
        type Row = &'static str;

        fn query(&mut self, _sql: &str, _params: &[SqlParam]) -> crate::PlugResult<Vec<&'static str>> {
            if self.fail {
                return Err(PlugError::query(std::io::Error::other("connection reset")));
            }

            Ok(self.rows.clone())
        }

        fn close(self) -> crate::PlugResult<()> {
            self.close_calls.set(self.close_calls.get() + 1);

            Ok(())
        }
    }

    #[test]
    fn test_rows_pass_through_and_connection_closes_once() {
        let (conn, close_calls) = FakeConn::new(vec!["a", "b"], false);
        let rows = fetch_all_and_close(conn, "SELECT 1", &[]).unwrap();

        assert_eq!(rows, vec!["a", "b"]);
        assert_eq!(close_calls.get(), 1);
    }

    #[test]
    fn test_zero_rows_is_an_empty_vec() {
        let (conn, close_calls) = FakeConn::new(vec![], false);
        let rows = fetch_all_and_close(conn, "SELECT 1", &[]).unwrap();

        assert!(rows.is_empty());
        assert_eq!(close_calls.get(), 1);
    }

    #[test]
    fn test_failure_is_uniform_and_still_closes_once() {
        let (conn, close_calls) = FakeConn::new(vec![], true);
        let err = fetch_all_and_close(conn, "SELECT 1", &[]).unwrap_err();

        assert!(matches!(err, PlugError::Query(_)));
        assert_eq!(close_calls.get(), 1);
    }
}
