mod id;
mod listed;
mod location;
mod profile;
mod rate;

pub use self::{id::*, listed::*, location::*, profile::*, rate::*};
use crate::entity::common::CreatedAt;
use crate::entity::UserId;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct Car {
    id: CarId,
    owner_id: UserId,
    profile: CarProfile,
    price_per_day: DailyRate,
    location: Location,
    is_listed: IsListed,
    created_at: CreatedAt<Car>,
}

impl Car {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CarId,
        owner_id: UserId,
        profile: CarProfile,
        price_per_day: DailyRate,
        location: Location,
        is_listed: IsListed,
        created_at: CreatedAt<Car>,
    ) -> Self {
        Self {
            id,
            owner_id,
            profile,
            price_per_day,
            location,
            is_listed,
            created_at,
        }
    }
}
