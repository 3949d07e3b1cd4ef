//! Domain models for the vet-clinic system.

mod appointment;
mod client;
mod entity;
mod pet;
mod prescription;
mod veterinarian;

pub use appointment::*;
pub use client::*;
pub use entity::*;
pub use pet::*;
pub use prescription::*;
pub use veterinarian::*;
