mod booking;
mod car;
mod common;
mod feedback;
mod user;

pub use self::{booking::*, car::*, common::*, feedback::*, user::*};
