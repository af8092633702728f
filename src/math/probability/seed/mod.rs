pub mod resource;

pub use resource::Seed;
