//! Business logic services.
//!
//! Services are resolved from the application context through `FromRef`.

mod category;
mod delay;

pub use category::CategoryPageProvider;
pub use delay::{Delay, NoDelay, TokioDelay};
