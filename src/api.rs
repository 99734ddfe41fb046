pub mod session;
pub mod srp;

pub use self::srp::{Client, Credentials};
