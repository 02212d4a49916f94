//! InfluxDB line protocol encoding.

mod encode;
mod rules;
mod value;

pub use encode::*;
pub use rules::*;
pub use value::*;
