//! Service adapters: OS specific implementations (paths, settings file).

pub mod dirs;
pub mod settings;

pub use dirs::{ensure_log_dir, get_config_dir, get_log_dir};
pub use settings::{get_settings_path, load_settings, parse_key};
