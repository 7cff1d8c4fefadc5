pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
