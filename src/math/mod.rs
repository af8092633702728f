pub mod error;
pub mod probability;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        probability::{noise::*, seed::Seed},
        utils::{angles::*, comparison::*, constants, gamma::*, power_of_two::*},
    };
}
