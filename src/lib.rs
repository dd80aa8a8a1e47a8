#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod config;
#[cfg(feature = "json")]
pub mod input;
pub mod recovery;
