//! Main module for miniwiki library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod grammar;
pub mod peg;
pub mod processor;
pub mod render;
pub mod testing;
