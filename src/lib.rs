//! Conway's Game of Life as a pure action reducer plus a tick-driven step
//! controller.
//!
//! [`transition`] is a pure function over immutable [`GridState`] values;
//! [`Session`] drives it from user actions and a periodic schedule on a
//! single control thread. Rendering is left to the caller, which observes
//! states through [`Session::subscribe`] and feeds clicks back as
//! [`Action::ToggleCell`].

#![warn(clippy::all)]

mod config;
mod controller;
mod error;
mod neighbors;
mod reducer;
mod state;

pub use config::SessionConfig;
pub use controller::{Session, SessionHandle, StepController};
pub use error::EngineError;
pub use neighbors::count_live_neighbors;
pub use reducer::transition;
pub use state::{Action, GridState};
