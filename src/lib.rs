#![doc = include_str!("../README.md")]

pub mod api;
pub mod prelude;
pub mod quantity;
pub mod tariff;
pub mod usage;
