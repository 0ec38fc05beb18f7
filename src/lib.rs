pub mod config;
pub mod consultation;
pub mod intelligence;
pub mod models;
pub mod session;
