//! **opgrid-core** — operator grid boards.
//!
//! This crate provides the board model shared across the *opgrid*
//! workspace: geometry primitives, operator tiles, the text board loader,
//! and a random board generator.

pub mod board;
pub mod boardgen;
pub mod geom;

pub use board::{Board, BoardError, Operator, Tile};
pub use boardgen::BoardGen;
pub use geom::{Point, Range};
