use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Config;

pub fn load_config(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Load the config file if one was given, otherwise fall back to defaults.
pub fn load_optional(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_config(p),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "mergington-activities-{}-{}.toml",
            std::process::id(),
            name
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_config() {
        let path = write_temp(
            "load",
            r#"
            [server]
            addr = "127.0.0.1:8080"
            static_dir = "public"
            "#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.server.addr.as_deref(), Some("127.0.0.1:8080"));
        assert_eq!(cfg.server.static_dir, Some("public".into()));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/mergington.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let path = write_temp("invalid", "[server\naddr = ");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse"));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_optional_defaults() {
        let cfg = load_optional(None).unwrap();
        assert!(cfg.server.addr.is_none());
        assert!(cfg.activities.is_empty());
    }
}
