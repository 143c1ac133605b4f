use crate::app::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "GUGA_CONFIG";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Option<String>,
}

impl Preferences {
    /// # Errors
    /// 当配置路径解析或配置文件读取/解析失败时返回错误。.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        load_from(&path)
    }

    /// # Errors
    /// 当配置路径解析或配置文件写入失败时返回错误。.
    pub fn save_language(lang: &str) -> Result<()> {
        let path = config_path()?;
        let mut settings = load_from(&path).unwrap_or_default();
        settings.language = Some(lang.to_string());
        settings.save_to(&path)
    }

    /// # Errors
    /// 当配置路径解析或配置文件写入失败时返回错误。.
    pub fn clear_language() -> Result<()> {
        let path = config_path()?;
        let mut settings = load_from(&path).unwrap_or_default();
        settings.language = None;
        settings.save_to(&path)
    }

    /// Internal helper method.
    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }
}

/// Internal helper function.
fn load_from(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(Preferences::default());
    }
    let settings = toml::from_str(&raw)?;
    Ok(settings)
}

/// # Errors
/// 当运行环境缺少必要目录环境变量时返回错误。.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    #[cfg(target_os = "windows")]
    {
        let base = std::env::var_os("LOCALAPPDATA")
            .or_else(|| std::env::var_os("APPDATA"))
            .ok_or_else(|| AppError::Message("LOCALAPPDATA/APPDATA not set".to_string()))?;
        let mut path = PathBuf::from(base);
        path.push("guga");
        path.push("config.toml");
        Ok(path)
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home =
            std::env::var_os("HOME").ok_or_else(|| AppError::Message("HOME not set".to_string()))?;
        let mut path = PathBuf::from(home);
        path.push(".guga");
        path.push("config.toml");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("guga_settings_{}_{name}.toml", std::process::id()))
    }

    #[test]
    fn settings_roundtrip() {
        let temp = temp_path("roundtrip");
        let _ = fs::remove_file(&temp);
        let settings = Preferences {
            language: Some("zh-CN".to_string()),
        };
        let save_result = settings.save_to(&temp);
        assert!(save_result.is_ok());
        let loaded_result = load_from(&temp);
        assert!(loaded_result.is_ok());
        if let Ok(loaded) = loaded_result {
            assert_eq!(loaded.language.as_deref(), Some("zh-CN"));
        }
        let _ = fs::remove_file(&temp);
    }

    #[test]
    fn missing_or_empty_file_is_default() {
        let temp = temp_path("empty");
        let _ = fs::remove_file(&temp);
        assert!(matches!(load_from(&temp), Ok(Preferences { language: None })));

        assert!(fs::write(&temp, "  \n").is_ok());
        assert!(matches!(load_from(&temp), Ok(Preferences { language: None })));
        let _ = fs::remove_file(&temp);
    }

    #[test]
    fn malformed_file_is_error() {
        let temp = temp_path("bad");
        assert!(fs::write(&temp, "language = [").is_ok());
        assert!(matches!(load_from(&temp), Err(AppError::TomlDe(_))));
        let _ = fs::remove_file(&temp);
    }
}
