pub mod error;
pub mod load;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use load::{load_global_settings, load_settings_from};
pub use paths::{
    app_index_path, cover_letter_dir, default_global_config_path, default_state_root,
    interaction_log_path, APP_INDEX_FILE_NAME, GLOBAL_SETTINGS_FILE_NAME, GLOBAL_STATE_DIR,
    INTERACTION_LOG_FILE_NAME,
};
pub use settings::Settings;
