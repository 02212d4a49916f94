use crate::{
    error::PlugError,
    util::{Clock, SystemClock},
    PlugResult,
};

use super::{rules::validate_measurement, FieldValue, TagValue};

/// A single line protocol point.
///
/// Tags and fields keep insertion order in the output; nothing is sorted.
/// Encoding is a pure read-only transform of the point, except that
/// [`Point::current_timestamp`] makes the encoder read the clock.
///
/// ```
/// use telegraf_plug::line::Point;
///
/// let line = Point::new("modules_reboots")
///     .tag("reboot_reason", 2)
///     .field_integer("value", 123)
///     .encode()?;
/// assert_eq!(line, "modules_reboots,reboot_reason=2 value=123");
/// # Ok::<(), telegraf_plug::error::PlugError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Point {
    /// Measurement name, emitted verbatim.
    pub measurement: String,

    /// Tag set in insertion order.
    pub tags: Vec<(String, TagValue)>,

    /// Field set in insertion order. At least one field is required.
    pub fields: Vec<(String, FieldValue)>,

    /// Explicit nano unix timestamp. A zero value counts as absent.
    pub nano_timestamp: Option<i64>,

    /// Append the current time when no explicit timestamp is set.
    pub add_timestamp: bool,
}

impl Point {
    pub fn new(measurement: impl Into<String>) -> Self {
        let measurement = measurement.into();

        if !validate_measurement(&measurement) {
            log::debug!("measurement {:?} is outside the recommended [a-z0-9_] charset", measurement);
        }

        Self {
            measurement,
            ..Default::default()
        }
    }

    /// Adds a tag.
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.tags.push((name.into(), value.into()));

        self
    }

    /// Sets all tags.
    pub fn tags(mut self, tags: impl IntoIterator<Item = (impl Into<String>, impl Into<TagValue>)>) -> Self {
        self.tags = tags.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

        self
    }

    /// Adds a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((name.into(), value.into()));

        self
    }

    /// Sets all fields.
    pub fn fields(mut self, fields: impl IntoIterator<Item = (impl Into<String>, impl Into<FieldValue>)>) -> Self {
        self.fields = fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

        self
    }

    /// Adds an integer field.
    pub fn field_integer(mut self, name: &str, value: i64) -> Self {
        self.fields.push((name.to_string(), FieldValue::Integer(value)));

        self
    }

    /// Adds a float field.
    pub fn field_float(mut self, name: &str, value: f64) -> Self {
        self.fields.push((name.to_string(), FieldValue::Float(value)));

        self
    }

    /// Adds a boolean field.
    pub fn field_bool(mut self, name: &str, value: bool) -> Self {
        self.fields.push((name.to_string(), FieldValue::Bool(value)));

        self
    }

    /// Adds a string field, classified by [`FieldValue::from_text`].
    pub fn field_text(mut self, name: &str, value: impl AsRef<str>) -> Self {
        self.fields.push((name.to_string(), FieldValue::from_text(value)));

        self
    }

    /// Sets an explicit timestamp, nanoseconds since the Unix epoch.
    ///
    /// An explicit timestamp wins over [`Point::current_timestamp`]. A zero
    /// value is treated as absent.
    pub fn timestamp_nanos(mut self, nanos: i64) -> Self {
        self.nano_timestamp = Some(nanos);

        self
    }

    /// Appends the current UTC time when no explicit timestamp is set.
    pub fn current_timestamp(mut self) -> Self {
        self.add_timestamp = true;

        self
    }

    /// Encodes the point as one line protocol line, reading the system
    /// clock if a current timestamp was requested.
    ///
    /// The returned line carries no trailing newline; writing one line per
    /// call is the output sink's business. Fails with
    /// [`PlugError::ValidationFailed`] when the point has no fields.
    pub fn encode(&self) -> PlugResult<String> {
        self.encode_with_clock(&SystemClock)
    }

    /// Encodes the point against an injected [`Clock`].
    pub fn encode_with_clock(&self, clock: &impl Clock) -> PlugResult<String> {
        self.validate()?;

        let mut line = self.measurement.clone();

        for (name, value) in &self.tags {
            line.push(',');
            line.push_str(name);
            line.push('=');
            line.push_str(&value.render());
        }

        line.push(' ');
        let fields: Vec<String> = self.fields.iter().map(|(name, value)| format!("{}={}", name, value.render())).collect();
        line.push_str(&fields.join(","));

        match self.nano_timestamp {
            Some(ts) if ts != 0 => {
                line.push(' ');
                line.push_str(&ts.to_string());
            }

            _ if self.add_timestamp => {
                line.push(' ');
                line.push_str(&clock.now_nanos().to_string());
            }

            _ => {}
        }

        Ok(line)
    }

    pub(crate) fn validate(&self) -> PlugResult<()> {
        if self.fields.is_empty() {
            return Err(PlugError::ValidationFailed("at least one field is required".to_string()));
        }

        Ok(())
    }
}
