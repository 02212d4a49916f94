use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlugError {
    /// Any failure reaching or querying a database: connection refused,
    /// authentication, malformed SQL, driver-internal faults. The driver
    /// error is always carried as the cause.
    #[error("database query failed: {0}")]
    Query(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("validation failed: {0}")]
    ValidationFailed(String),
}

impl PlugError {
    pub(crate) fn query(cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        PlugError::Query(Box::new(cause))
    }
}
