use error_stack::Report;
use kernel::KernelError;

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, sqlx::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match &error {
            sqlx::Error::RowNotFound => Report::new(error).change_context(KernelError::NotFound),
            sqlx::Error::PoolTimedOut => Report::new(error).change_context(KernelError::Timeout),
            sqlx::Error::Database(db_error) => {
                let context = match db_error.code().as_deref() {
                    // 23P01: the bookings exclusion constraint rejected a
                    // concurrent overlapping insert.
                    Some("23P01") => KernelError::Unavailable,
                    Some("23505") | Some("23503") | Some("23514") => KernelError::Validation,
                    _ => KernelError::Internal,
                };
                Report::new(error).change_context(context)
            }
            _ => Report::new(error).change_context(KernelError::Internal),
        })
    }
}

impl<T> ConvertError for Result<T, sqlx::migrate::MigrateError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::new(error).change_context(KernelError::Internal))
    }
}
