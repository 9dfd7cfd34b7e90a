mod id;
mod period;
mod price;
mod status;

pub use self::{id::*, period::*, price::*, status::*};
use crate::entity::common::CreatedAt;
use crate::entity::{CarId, UserId};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct Booking {
    id: BookingId,
    car_id: CarId,
    owner_id: UserId,
    user_id: UserId,
    period: BookingPeriod,
    price: BookingPrice,
    status: BookingStatus,
    created_at: CreatedAt<Booking>,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookingId,
        car_id: CarId,
        owner_id: UserId,
        user_id: UserId,
        period: BookingPeriod,
        price: BookingPrice,
        status: BookingStatus,
        created_at: CreatedAt<Booking>,
    ) -> Self {
        Self {
            id,
            car_id,
            owner_id,
            user_id,
            period,
            price,
            status,
            created_at,
        }
    }
}
