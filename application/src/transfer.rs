mod booking;
mod car;
mod feedback;
mod session;
mod user;

pub use self::{booking::*, car::*, feedback::*, session::*, user::*};
