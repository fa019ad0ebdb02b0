//! Implementation of the chess board, its movement rules and the game state.

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
