//! Helpers for writing Telegraf `exec` plugins in Rust.
//!
//! Two loosely coupled pieces:
//!
//! - [`line`]: an InfluxDB line protocol encoder (encode-only, no I/O);
//! - [`db`]: small synchronous MySQL/PostgreSQL query helpers that fetch a
//!   whole result set over a single scoped connection.
//!
//! A plugin typically runs a query, maps each row into fields and tags, and
//! prints one encoded line per row to stdout:
//!
//! ```
//! use telegraf_plug::line::Point;
//!
//! let line = Point::new("electricity")
//!     .tag("power_line_no", 123)
//!     .field_integer("voltage_v", 220)
//!     .encode()?;
//! assert_eq!(line, "electricity,power_line_no=123 voltage_v=220");
//! # Ok::<(), telegraf_plug::error::PlugError>(())
//! ```

use error::PlugError;

pub mod db;
pub mod error;
pub mod line;
pub mod util;

pub type PlugResult<T> = Result<T, PlugError>;
