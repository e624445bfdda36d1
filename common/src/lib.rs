#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "logging")]
pub mod logging;
#[cfg(feature = "std")]
pub mod utils;
