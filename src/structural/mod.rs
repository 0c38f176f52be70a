//! Structural patterns: how objects are put together.
//!
//! - **facade**: one call to boot a computer's subsystems
//! - **proxy**: PIN-protected bank account
//! - **adapter**: square pegs in round holes
//! - **bridge**: remotes and devices varying independently
//! - **flyweight**: a forest sharing tree types
//! - **decorator**: coffee with stackable extras
//! - **composite**: files and directories as one tree

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
