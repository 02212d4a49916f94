//! PostgreSQL plugin example: counts open connections per user and prints
//! one line protocol line per user, e.g.
//!
//! ```text
//! postgres_open_connections,host=server123,user=user1 value=2
//! ```
//!
//! Connection settings come from the environment (`POSTGRES_HOST`,
//! `POSTGRES_PORT`, `POSTGRES_USER`, `POSTGRES_PASSWORD`,
//! `POSTGRES_DATABASE`), optionally via a `.env` file.

use std::{process::exit, time::Duration};

use telegraf_plug::{
    db::{postgres::PostgresRunner, DbConfig, QueryRunner},
    line::Point,
};

const SQL: &str = "SELECT usename, count(*) FROM pg_stat_activity WHERE usename IS NOT NULL GROUP BY 1";

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();
    dotenvy::dotenv().ok();

    let port = env_or("POSTGRES_PORT", "5432").parse().unwrap_or(5432);
    let config = DbConfig::new(env_or("POSTGRES_HOST", "127.0.0.1"), port)
        .user(env_or("POSTGRES_USER", "postgres"))
        .password(env_or("POSTGRES_PASSWORD", "postgres"))
        .database(env_or("POSTGRES_DATABASE", "postgres"))
        .connect_timeout(Duration::from_secs(30));

    let host = env_or("HOSTNAME", "localhost");

    let rows = match PostgresRunner::new(config).run_query(SQL, &[]) {
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
        let user: String = row.get("usename");
        let count: i64 = row.get("count");

        match Point::new("postgres_open_connections")
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
