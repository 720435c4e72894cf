//! Value Objects

pub mod pin;
pub mod user_name;

pub use pin::{PIN_LENGTH, Pin, PinError};
pub use user_name::{UserName, UserNameError};
