#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod model;
pub mod rng;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::Error;
