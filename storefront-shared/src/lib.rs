pub mod money;
pub mod models;

pub use money::{Currency, Price};
