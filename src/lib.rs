#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod coord;
mod events;
mod fleet;
mod game;
mod input;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod player;
mod player_ai;
mod player_human;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use coord::*;
pub use events::*;
pub use fleet::*;
pub use game::*;
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::*;
pub use player::*;
pub use player_ai::*;
pub use player_human::*;
pub use ship::*;
