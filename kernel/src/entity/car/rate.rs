use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct DailyRate(Decimal);

impl DailyRate {
    pub fn new(rate: impl Into<Decimal>) -> Self {
        Self(rate.into())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}
