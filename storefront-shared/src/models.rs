pub mod quote;

pub use quote::{ReasonSummary, ServiceQuote};
