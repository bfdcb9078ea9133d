#[macro_use]
extern crate approx;

mod cutter;
mod physics_sync;
