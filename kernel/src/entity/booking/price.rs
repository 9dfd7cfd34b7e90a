use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::entity::{BookingPeriod, DailyRate};

/// Fixed at creation time. Status changes never reprice a booking.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct BookingPrice(Decimal);

impl BookingPrice {
    pub fn new(price: impl Into<Decimal>) -> Self {
        Self(price.into())
    }

    pub fn calculate(rate: &DailyRate, period: &BookingPeriod) -> Self {
        Self(*rate.as_ref() * Decimal::from(period.billable_days()))
    }
}
