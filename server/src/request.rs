mod booking;
mod car;
mod feedback;
mod user;

pub use self::{booking::*, car::*, feedback::*, user::*};
