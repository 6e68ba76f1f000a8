pub mod client;
pub mod legacy;
pub mod runner;
