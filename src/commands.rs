use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::models::Config;
use crate::web;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";

/// CLI flag, then config file, then the built-in default.
pub fn resolve_addr<'a>(flag: Option<&'a str>, cfg: &'a Config) -> &'a str {
    flag.or(cfg.server.addr.as_deref()).unwrap_or(DEFAULT_ADDR)
}

pub fn resolve_static_dir<'a>(flag: Option<&'a Path>, cfg: &'a Config) -> &'a Path {
    flag.or(cfg.server.static_dir.as_deref())
        .unwrap_or(Path::new(DEFAULT_STATIC_DIR))
}

/// Seed the catalog from the config's `[[activities]]`, or the built-in set
/// when the config defines none.
pub fn build_catalog(cfg: &Config) -> Result<Catalog> {
    if cfg.activities.is_empty() {
        return Catalog::mergington().context("Built-in activity catalog is invalid");
    }
    info!("Seeding {} activities from config", cfg.activities.len());
    Catalog::from_seeds(cfg.activities.iter().cloned()).context("Invalid activity in config")
}

pub async fn run_serve(cfg: &Config, addr: Option<&str>, static_dir: Option<&Path>) -> Result<()> {
    let addr = resolve_addr(addr, cfg);
    let static_dir = resolve_static_dir(static_dir, cfg);
    if !static_dir.is_dir() {
        warn!(
            "Static directory {} does not exist; the landing page will 404",
            static_dir.display()
        );
    }

    let catalog = build_catalog(cfg)?;
    info!("Catalog ready with {} activities", catalog.len());
    for (name, activity) in catalog.list_all().iter() {
        debug!(
            "  {}: {}/{} signed up ({})",
            name,
            activity.participants.len(),
            activity.max_participants,
            activity.schedule
        );
    }
    web::serve(catalog, addr, static_dir).await
}

/// Print the catalog `serve` would start with.
pub fn run_catalog(cfg: &Config) -> Result<()> {
    let catalog = build_catalog(cfg)?;
    println!("{}", serde_json::to_string_pretty(&catalog.list_all())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivitySeed, ServerConfig};

    fn seed(name: &str, max: u32, participants: &[&str]) -> ActivitySeed {
        ActivitySeed {
            name: name.to_string(),
            description: "desc".to_string(),
            schedule: "Mondays".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_resolve_addr_precedence() {
        let mut cfg = Config::default();
        assert_eq!(resolve_addr(None, &cfg), DEFAULT_ADDR);

        cfg.server = ServerConfig {
            addr: Some("127.0.0.1:9000".to_string()),
            static_dir: None,
        };
        assert_eq!(resolve_addr(None, &cfg), "127.0.0.1:9000");
        assert_eq!(resolve_addr(Some("127.0.0.1:7000"), &cfg), "127.0.0.1:7000");
    }

    #[test]
    fn test_resolve_static_dir_precedence() {
        let mut cfg = Config::default();
        assert_eq!(resolve_static_dir(None, &cfg), Path::new("static"));

        cfg.server.static_dir = Some("public".into());
        assert_eq!(resolve_static_dir(None, &cfg), Path::new("public"));
        assert_eq!(
            resolve_static_dir(Some(Path::new("assets")), &cfg),
            Path::new("assets")
        );
    }

    #[test]
    fn test_build_catalog_defaults_to_builtin() {
        let catalog = build_catalog(&Config::default()).unwrap();
        assert!(catalog.get("Chess Club").is_some());
    }

    #[test]
    fn test_build_catalog_from_config_replaces_builtin() {
        let cfg = Config {
            server: ServerConfig::default(),
            activities: vec![seed("Knitting Circle", 6, &["a@mergington.edu"])],
        };
        let catalog = build_catalog(&cfg).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Knitting Circle").is_some());
        assert!(catalog.get("Chess Club").is_none());
    }

    #[test]
    fn test_build_catalog_rejects_invalid_seed() {
        let cfg = Config {
            server: ServerConfig::default(),
            activities: vec![seed("Tiny", 1, &["a@x", "b@x"])],
        };
        let err = build_catalog(&cfg).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid activity in config"));
    }
}
