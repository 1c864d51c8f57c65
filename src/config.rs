use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    error::{SsError, SsResult},
    utils::net::validate_url,
};

pub static DEFAULT_API_URL: &str = "https://www.onlinekhabar.com/smtm/home/trending";
pub static DEFAULT_DATA_DIR: &str = "data";
pub static DEFAULT_FILE_NAME: &str = "stock_data.xlsx";
pub static DEFAULT_SHEET_NAME: &str = "Stock Data";
pub static DEFAULT_TIMEOUT_SECS: u64 = 30;

pub static CONFIG_KEYS: &[&str] = &[
    "api_url",
    "data_dir",
    "file_name",
    "sheet_name",
    "timeout_secs",
];

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub data_dir: String,
    pub file_name: String,
    pub sheet_name: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: DEFAULT_DATA_DIR.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.file_name)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key.to_lowercase().as_str() {
            "api_url" => Some(self.api_url.to_string()),
            "data_dir" => Some(self.data_dir.to_string()),
            "file_name" => Some(self.file_name.to_string()),
            "sheet_name" => Some(self.sheet_name.to_string()),
            "timeout_secs" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> SsResult<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(SsError::Invalid {
                code: "INVALID_CONFIG_VALUE",
                message: format!("Value of '{key}' cannot be empty"),
            });
        }

        match key.to_lowercase().as_str() {
            "api_url" => {
                validate_url(value)?;
                self.api_url = value.to_string();
            }
            "data_dir" => {
                self.data_dir = value.to_string();
            }
            "file_name" => {
                self.file_name = value.to_string();
            }
            "sheet_name" => {
                self.sheet_name = value.to_string();
            }
            "timeout_secs" => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    self.timeout_secs = secs;
                }
                _ => {
                    return Err(SsError::Invalid {
                        code: "INVALID_CONFIG_VALUE",
                        message: format!("'{value}' is not a positive number of seconds"),
                    });
                }
            },
            _ => {
                return Err(SsError::Invalid {
                    code: "INVALID_CONFIG_KEY",
                    message: format!(
                        "Unknown config '{key}', available: {}",
                        CONFIG_KEYS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}
