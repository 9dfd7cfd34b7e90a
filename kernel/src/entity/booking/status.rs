use std::fmt::Display;
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

/// Pending is the only state with outgoing transitions. Confirmed and
/// cancelled are terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn can_transition_to(&self, next: &BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(Report::new(KernelError::Validation)
                .attach_printable(format!("unknown booking status: {other}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::BookingStatus;

    #[test]
    fn only_pending_has_outgoing_transitions() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(&Confirmed));
        assert!(Pending.can_transition_to(&Cancelled));
        assert!(!Pending.can_transition_to(&Pending));
        assert!(!Confirmed.can_transition_to(&Cancelled));
        assert!(!Confirmed.can_transition_to(&Pending));
        assert!(!Cancelled.can_transition_to(&Confirmed));
        assert!(!Cancelled.can_transition_to(&Cancelled));
    }

    #[test]
    fn parses_wire_values() {
        assert_eq!(
            "pending".parse::<BookingStatus>().unwrap(),
            BookingStatus::Pending
        );
        assert_eq!(
            "confirmed".parse::<BookingStatus>().unwrap(),
            BookingStatus::Confirmed
        );
        assert_eq!(
            "cancelled".parse::<BookingStatus>().unwrap(),
            BookingStatus::Cancelled
        );
        assert!("completed".parse::<BookingStatus>().is_err());
    }
}
