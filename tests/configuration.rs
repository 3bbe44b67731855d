//! Tests for configuration system

use std::io::Write;

use temp_dir::TempDir;
use viralcarrot::Config;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let config = Config::load(Some("config/default.toml".to_string()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.generation.original_count, 6);
    assert_eq!(config.cache.generate_ttl_secs, 1800);
    assert_eq!(config.cache.external_ttl_secs, 3600);
    assert!(!config.image_search.enabled);
    assert!(!config.sources.mealdb.enabled);
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("custom.toml");
    let mut file = std::fs::File::create(&path)?;
    writeln!(
        file,
        "[server]\nhost = \"127.0.0.1\"\nport = 8080\n\n[generation]\noriginal_count = 4\n\n[sources]\ncatalog = false"
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.generation.original_count, 4);
    assert_eq!(config.generation.page_size, 6);
    assert!(!config.sources.catalog);
    Ok(())
}

#[test]
fn test_missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let config = Config::load(Some("does/not/exist.toml".to_string()))?;

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.image_search.timeout_secs, 5);
    Ok(())
}
