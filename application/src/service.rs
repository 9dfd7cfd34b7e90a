mod availability;
mod booking;
mod car;
mod feedback;
mod session;
mod user;

pub use self::{availability::*, booking::*, car::*, feedback::*, session::*, user::*};
