/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Parley exchange
///
/// This struct contains all configurable values for the Parley exchange,
/// loaded from TOML files in XDG-compliant directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ParleyConfig {
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// Limits and capacity configuration
    pub limits: LimitsConfig,
    /// Behavioral configuration switches
    pub behavior: BehaviorConfig,
}

/// Timeout-related configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Deadline used by `ask_with_default_timeout`, in milliseconds
    pub default_ask_timeout_ms: u64,
}

/// Limits and capacity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Listener count per key above which subscription logs a warning
    pub listener_high_water_mark: usize,
}

/// Behavioral configuration switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Log a warning when an answer cannot be handed to a listener
    pub warn_on_missed_delivery: bool,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            default_ask_timeout_ms: 5_000,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            listener_high_water_mark: 1_024,
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            warn_on_missed_delivery: true,
        }
    }
}

impl ParleyConfig {
    /// Convert the default ask timeout to a Duration
    pub const fn default_ask_timeout(&self) -> Duration {
        Duration::from_millis(self.timeouts.default_ask_timeout_ms)
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// This function attempts to load configuration from the following locations
    /// in order of preference:
    /// 1. `$XDG_CONFIG_HOME/parley/config.toml` (Linux/macOS)
    /// 2. `~/.config/parley/config.toml` (Linux fallback)
    /// 3. `~/Library/Application Support/parley/config.toml` (macOS fallback)
    /// 4. `%APPDATA%/parley/config.toml` (Windows)
    ///
    /// If no configuration file is found, returns the default configuration.
    /// If a configuration file exists but is malformed, logs an error and uses defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        // Get the XDG base directories
        let xdg_dirs = match xdg::BaseDirectories::with_prefix("parley") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        // Try to find the configuration file
        let config_path = xdg_dirs.find_config_file("config.toml");

        if let Some(path) = config_path {
            info!("Loading configuration from: {}", path.display());
            match std::fs::read_to_string(&path) {
                Ok(config_str) => match toml::from_str::<Self>(&config_str) {
                    Ok(config) => {
                        info!("Successfully loaded configuration");
                        config
                    }
                    Err(e) => {
                        error!(
                            "Failed to parse configuration file {}: {}",
                            path.display(),
                            e
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    error!(
                        "Failed to read configuration file {}: {}",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            }
        } else {
            info!("No configuration file found, using defaults");
            Self::default()
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: ParleyConfig = ParleyConfig::load();
}
