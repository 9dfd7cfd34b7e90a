mod booking;
mod feedback;
mod owner;
mod user;

pub use self::{booking::*, feedback::*, owner::*, user::*};
