use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order {0} not found")]
    NotFound(i64),

    /// The store rejected the data itself (constraint or data exception)
    #[error("Rejected by database: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl OrderError {
    /// Classify a sqlx error: data the database refuses becomes `Constraint`,
    /// everything else stays a `Database` failure.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let rejected = matches!(
                db_err.kind(),
                sqlx::error::ErrorKind::UniqueViolation
                    | sqlx::error::ErrorKind::ForeignKeyViolation
                    | sqlx::error::ErrorKind::NotNullViolation
                    | sqlx::error::ErrorKind::CheckViolation
            ) || db_err.code().is_some_and(|c| is_data_exception(&c));
            if rejected {
                return OrderError::Constraint(db_err.message().to_string());
            }
        }
        OrderError::Database(err)
    }
}

/// SQLSTATE class 22: invalid text encoding, value out of range, ...
fn is_data_exception(sqlstate: &str) -> bool {
    sqlstate.starts_with("22")
}
