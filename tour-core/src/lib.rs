#![allow(clippy::new_without_default)]

pub mod catalog;
pub mod driver;
pub mod error;
pub mod geo;
pub mod map;
pub mod shell;
pub mod sights;

pub use catalog::catalog;
