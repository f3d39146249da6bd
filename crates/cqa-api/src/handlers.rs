//! Request handlers.

pub mod analyze;
pub mod demo;
pub mod health;

pub use analyze::*;
pub use demo::*;
pub use health::*;
