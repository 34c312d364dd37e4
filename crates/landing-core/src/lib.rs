//! Scroll- and pointer-driven animation parameters for the landing page.
//!
//! Nothing in this crate touches platform APIs: the web front-end feeds it
//! scroll offsets, pointer positions and viewport sizes, and applies the
//! resulting [`ParameterBundle`] to the DOM.

pub mod config;
pub mod error;
pub mod input;
pub mod mapper;
pub mod pipeline;
pub mod progress;
pub mod reveal;
pub mod scheduler;
pub mod scramble;
pub mod smooth;
pub mod tilt;

pub use config::*;
pub use error::{ConfigError, Result};
pub use input::*;
pub use mapper::*;
pub use pipeline::*;
pub use progress::*;
pub use reveal::*;
pub use scheduler::*;
pub use scramble::*;
pub use smooth::*;
pub use tilt::*;
