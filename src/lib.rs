// src/lib.rs

//! pokefeed Library
//!
//! Data and control layer for an infinite-scroll creature browser:
//! a paged fetch client over the PokeAPI, a file-backed favorites
//! store, and a feed controller tying the two together.

pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
