//! Configuration module.
//!
//! Settings resolve in layers: hardcoded defaults, then the TOML config file,
//! then `USERDASH_*` environment variables, then command-line flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, validate, CliOverrides,
    ConfigError, ConfigFile, ResolvedConfig,
};
