//! View state and user interaction.

pub mod action;
pub mod board;
pub mod pagination;

pub use action::Action;
pub use board::{Board, RankedRow};
pub use pagination::{PageControls, DEFAULT_PAGE_SIZE};
