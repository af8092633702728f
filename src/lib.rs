// ./src/lib.rs
pub mod math;

pub use math::prelude;
