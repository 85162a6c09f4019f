#![deny(bare_trait_objects)]

pub mod math;
pub mod ray;
pub mod colour;
pub mod materials;
pub mod geometry;
pub mod scene;
pub mod catalogue;
pub mod tracer;
pub mod render;
pub mod ppm;
pub mod config;
pub mod error;

pub use error::{Result, TraceError};
