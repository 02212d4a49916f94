//! MySQL plugin example: counts open connections per user and prints one
//! line protocol line per user, e.g.
//!
//! ```text
//! mysql_open_connections,host=server123,user=user1 value=2
//! ```
//!
//! Connection settings come from the environment (`MYSQL_HOST`,
//! `MYSQL_PORT`, `MYSQL_USER`, `MYSQL_PASSWORD`), optionally via a `.env`
//! file.

use std::{process::exit, time::Duration};

use telegraf_plug::{
    db::{mysql::MysqlRunner, DbConfig, QueryRunner},
    line::Point,
};

const SQL: &str = "SELECT user, COUNT(*) AS cnt FROM information_schema.PROCESSLIST GROUP BY 1";

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();
    dotenvy::dotenv().ok();

    let port = env_or("MYSQL_PORT", "3306").parse().unwrap_or(3306);
    let config = DbConfig::new(env_or("MYSQL_HOST", "127.0.0.1"), port)
        .user(env_or("MYSQL_USER", "root"))
        .password(env_or("MYSQL_PASSWORD", ""))
        .database("information_schema")
        .connect_timeout(Duration::from_secs(30));

    let host = env_or("HOSTNAME", "localhost");

    let rows = match MysqlRunner::new(config).run_query(SQL, &[]) {
        Ok(rows) => rows,
        Err(error) => {
            eprintln!("Error: {error}");
            exit(1);
        }
    };

    if rows.is_empty() {
        eprintln!("Error: Empty response from DB");
        exit(1);
    }

    for row in rows {
        let user: String = row.get("user").unwrap_or_else(|| "unknown".to_string());
        let count: i64 = row.get("cnt").unwrap_or(0);

        match Point::new("mysql_open_connections")
            .tag("host", host.as_str())
            .tag("user", user.as_str())
            .field_integer("value", count)
            .encode()
        {
            Ok(line) => println!("{line}"),
            Err(error) => {
                eprintln!("Error: {error}");
                exit(1);
            }
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
