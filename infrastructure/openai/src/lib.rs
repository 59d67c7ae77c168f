pub mod client;
mod error;
pub mod haiku_generator;
