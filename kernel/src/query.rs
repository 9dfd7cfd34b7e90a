mod booking;
mod car;
mod feedback;
mod token;
mod user;

pub use self::{booking::*, car::*, feedback::*, token::*, user::*};
