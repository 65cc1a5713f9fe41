pub mod config;
pub mod constants;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod loader;
pub mod manifest;
pub mod pool;
pub mod sampler;
pub mod sequencer;
pub mod session;
pub mod style;
pub mod tween;

pub use config::*;
pub use error::*;
pub use interaction::*;
pub use loader::*;
pub use manifest::*;
pub use pool::*;
pub use sampler::*;
pub use sequencer::*;
pub use session::*;
pub use style::*;
pub use tween::*;
