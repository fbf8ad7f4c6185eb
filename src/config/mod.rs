pub mod loader;
pub mod normalize;
pub mod types;

pub use loader::*;
pub use normalize::*;
pub use types::*;
