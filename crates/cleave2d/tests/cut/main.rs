#[macro_use]
extern crate approx;

mod properties;
mod texture_mapping;
