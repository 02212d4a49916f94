use mysql::{prelude::Queryable, Conn, Opts, OptsBuilder, Params, Row, Value};

use crate::{error::PlugError, PlugResult};

use super::{fetch_all_and_close, DbConfig, DbConn, QueryRunner, SqlParam};

/// MySQL-flavored query runner.
///
/// Rows are the driver's [`mysql::Row`]: an ordered column mapping with
/// by-name access. Statement placeholders are `?`.
#[derive(Debug, Clone)]
pub struct MysqlRunner {
    pub config: DbConfig,
}

impl MysqlRunner {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }
}

impl QueryRunner for MysqlRunner {
    type Row = Row;

    fn run_query(&self, sql: &str, params: &[SqlParam]) -> PlugResult<Vec<Row>> {
        log::debug!("connecting to mysql at {}:{}", self.config.host, self.config.port);

        let opts: Opts = OptsBuilder::new()
            .ip_or_hostname(Some(self.config.host.clone()))
            .tcp_port(self.config.port)
            .user(Some(self.config.user.clone()))
            .pass(Some(self.config.password.clone()))
            .db_name(Some(self.config.database.clone()))
            .tcp_connect_timeout(self.config.connect_timeout)
            .into();

        let conn = Conn::new(opts).map_err(PlugError::query)?;

        fetch_all_and_close(MysqlConn(conn), sql, params)
    }
}

struct MysqlConn(Conn);

impl DbConn for MysqlConn {
    type Row = Row;

    fn query(&mut self, sql: &str, params: &[SqlParam]) -> PlugResult<Vec<Row>> {
        let params = if params.is_empty() {
            Params::Empty
        } else {
            Params::Positional(params.iter().map(Value::from).collect())
        };

        self.0.exec(sql, params).map_err(PlugError::query)
    }

    fn close(self) -> PlugResult<()> {
        // the driver disconnects on drop
        drop(self.0);

        Ok(())
    }
}

impl From<&SqlParam> for Value {
    fn from(value: &SqlParam) -> Self {
        match value {
            SqlParam::Integer(n) => Value::Int(*n),
            SqlParam::Float(d) => Value::Double(*d),
            SqlParam::Bool(b) => Value::from(*b),
            SqlParam::Text(s) => Value::Bytes(s.clone().into_bytes()),
        }
    }
}

#[cfg(test)]
mod test_mysql {
    use mysql::Value;

    use super::SqlParam;

    #[test]
    fn test_param_conversion() {
        assert_eq!(Value::from(&SqlParam::Integer(123)), Value::Int(123));
        assert_eq!(Value::from(&SqlParam::Float(2.2)), Value::Double(2.2));
        assert_eq!(Value::from(&SqlParam::Text("abc".to_string())), Value::Bytes(b"abc".to_vec()));
    }
}
