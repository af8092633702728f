pub mod noise;
pub mod seed;

pub use noise::*;
pub use seed::Seed;
