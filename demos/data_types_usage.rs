//! Shows how field and tag values of each supported type are rendered.

use telegraf_plug::{line::Point, PlugResult};

/// Prints:
///
/// ```text
/// multiple_fields field_float=1,field_int=123i,field_str="two",field_bool=true
/// ```
fn multiple_fields() -> PlugResult<()> {
    let line = Point::new("multiple_fields")
        .field_float("field_float", 1.0)
        .field_text("field_int", "123i")
        .field_text("field_str", "two")
        .field_bool("field_bool", true)
        .encode()?;
    println!("{line}");

    Ok(())
}

/// Prints:
///
/// ```text
/// multiple_tags,tag1=1,tag2=two field_name=123
/// ```
fn multiple_tags() -> PlugResult<()> {
    let line = Point::new("multiple_tags")
        .tag("tag1", 1)
        .tag("tag2", "two")
        .field_integer("field_name", 123)
        .encode()?;
    println!("{line}");

    Ok(())
}

fn main() -> PlugResult<()> {
    multiple_fields()?;
    multiple_tags()?;

    Ok(())
}
