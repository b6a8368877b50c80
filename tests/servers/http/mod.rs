pub mod client;
pub mod environment;
mod v1;
