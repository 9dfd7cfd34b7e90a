use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::Date;
use vodca::References;

use crate::KernelError;

/// Inclusive date interval of a booking. The return day itself still occupies
/// the car, so a pickup on an existing return day is a conflict.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, References)]
pub struct BookingPeriod {
    pickup_date: Date,
    return_date: Date,
}

impl BookingPeriod {
    pub fn new(pickup_date: Date, return_date: Date) -> error_stack::Result<Self, KernelError> {
        if return_date < pickup_date {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("return date must not be before pickup date"));
        }
        Ok(Self {
            pickup_date,
            return_date,
        })
    }

    pub fn overlaps(&self, other: &BookingPeriod) -> bool {
        self.pickup_date <= other.return_date && self.return_date >= other.pickup_date
    }

    /// Same-day rentals bill a full day.
    pub fn billable_days(&self) -> i64 {
        (self.return_date - self.pickup_date).whole_days().max(1)
    }
}
