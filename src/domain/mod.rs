pub mod account;
pub mod ports;
