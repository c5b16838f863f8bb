pub mod authorization;
pub mod commit;
pub mod errors;
pub mod models;
pub mod services;
pub mod settings;
pub mod status;
pub mod transforms;
