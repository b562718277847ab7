pub mod burst;
pub mod card;
pub mod constants;
pub mod evade;
pub mod hearts;
pub mod particles;
pub mod spring;

pub use burst::*;
pub use card::*;
pub use evade::*;
pub use hearts::*;
pub use particles::*;
pub use spring::*;
