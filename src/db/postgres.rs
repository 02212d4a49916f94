use postgres::{types::ToSql, Client, Config, NoTls, Row};

use crate::{error::PlugError, PlugResult};

use super::{fetch_all_and_close, DbConfig, DbConn, QueryRunner, SqlParam};

/// PostgreSQL-flavored query runner.
///
/// Rows are the driver's [`postgres::Row`]: a fixed-field record with
/// by-name access. Statement placeholders are `$1`, `$2`, ...
#[derive(Debug, Clone)]
pub struct PostgresRunner {
    pub config: DbConfig,
}

impl PostgresRunner {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }
}

impl QueryRunner for PostgresRunner {
    type Row = Row;

    fn run_query(&self, sql: &str, params: &[SqlParam]) -> PlugResult<Vec<Row>> {
        log::debug!("connecting to postgres at {}:{}", self.config.host, self.config.port);

        let mut pg = Config::new();
        pg.host(&self.config.host)
            .port(self.config.port)
            .user(&self.config.user)
            .password(&self.config.password)
            .dbname(&self.config.database);

        if let Some(timeout) = self.config.connect_timeout {
            pg.connect_timeout(timeout);
        }

        let client = pg.connect(NoTls).map_err(PlugError::query)?;

        fetch_all_and_close(PostgresConn(client), sql, params)
    }
}

struct PostgresConn(Client);

impl DbConn for PostgresConn {
    type Row = Row;

    fn query(&mut self, sql: &str, params: &[SqlParam]) -> PlugResult<Vec<Row>> {
        let bound: Vec<&(dyn ToSql + Sync)> = params.iter().map(bind).collect();

        self.0.query(sql, &bound).map_err(PlugError::query)
    }

    fn close(self) -> PlugResult<()> {
        self.0.close().map_err(PlugError::query)
    }
}

fn bind(param: &SqlParam) -> &(dyn ToSql + Sync) {
    match param {
        SqlParam::Integer(n) => n,
        SqlParam::Float(d) => d,
        SqlParam::Bool(b) => b,
        SqlParam::Text(s) => s,
    }
}
