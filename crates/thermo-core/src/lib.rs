//! Hardware-independent core library for thermo-rs
//!
//! This crate contains all platform-agnostic logic for the temperature
//! analysis dashboard: the synthetic temperature model, the reducer-style
//! view state, configuration, and the embedded-graphics renderer that turns
//! that state into pixels.
//!
//! It is `no_std` with `extern crate alloc` so the same code drives an
//! embedded display and the desktop simulator. Tests build against `std`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod state;
pub mod ui;

#[cfg(test)]
mod testing;
