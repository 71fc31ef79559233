//! Adapters: CSV dialects in and out, console logging and the clock.

pub mod csv;
pub mod services;
