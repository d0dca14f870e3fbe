#![no_std] // Shared with the WASM build

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod tags;
pub use tags::*;

pub mod model;
pub use model::*;
