pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use error::SoapboxError;
