use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation,
    Unauthorized,
    NotFound,
    Unavailable,
    InvalidTransition,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid request"),
            KernelError::Unauthorized => write!(f, "Unauthorized"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::Unavailable => {
                write!(f, "Car is not available for the requested dates")
            }
            KernelError::InvalidTransition => write!(f, "Invalid booking status transition"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
