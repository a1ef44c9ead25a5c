//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FincalcPaths;
pub use settings::Settings;
