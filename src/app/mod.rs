mod config;
mod field;
mod state;
mod status;

pub use config::{Config, TableColumn, default_columns};
pub use field::Field;
pub use state::App;
pub use status::{StatusLevel, StatusMessage};
