//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the kernel talks to (key source, terminal).
//! - `adapters`: OS specific pieces (settings file, data directories).

pub mod adapters;
pub mod ports;
