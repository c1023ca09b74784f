#[macro_use]
extern crate log;

pub mod error;
pub mod member;
pub mod service;
pub mod store;
mod tools;
