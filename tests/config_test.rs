use std::fs;

use anyhow::Result;
use devref::api::HttpTransport;
use devref::config::{Config, API_TOKEN_ENV, API_URL_ENV, SITE_URL_ENV};
use serial_test::serial;

fn clear_env() {
    for key in [API_URL_ENV, SITE_URL_ENV, API_TOKEN_ENV] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_file() -> Result<()> {
    clear_env();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "")?;

    let config = Config::load(Some(&path))?;
    assert_eq!(config, Config::default());
    assert_eq!(config.related_limit, 6);
    Ok(())
}

#[test]
#[serial]
fn test_load_from_file() -> Result<()> {
    clear_env();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
api_url = "https://api.devref.example/"
site_url = "https://devref.example//"
organization = "Dev Reference"
related_limit = 0
"#,
    )?;

    let config = Config::load(Some(&path))?;
    assert_eq!(config.api_url, "https://api.devref.example");
    assert_eq!(config.site_url, "https://devref.example");
    assert_eq!(config.organization, "Dev Reference");
    assert_eq!(config.related_limit, 6);
    assert_eq!(config.timeout_secs, 30);

    let site = config.site();
    assert_eq!(site.base_url, "https://devref.example");
    assert_eq!(site.organization, "Dev Reference");
    Ok(())
}

#[test]
#[serial]
fn test_env_overrides_file() -> Result<()> {
    clear_env();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "api_url = \"http://from-file\"\n")?;

    std::env::set_var(API_URL_ENV, "http://from-env/");
    std::env::set_var(SITE_URL_ENV, "https://site-from-env");
    std::env::set_var(API_TOKEN_ENV, "secret");
    let config = Config::load(Some(&path));
    clear_env();

    let config = config?;
    assert_eq!(config.api_url, "http://from-env");
    assert_eq!(config.site_url, "https://site-from-env");
    assert_eq!(config.api_token.as_deref(), Some("secret"));

    let transport = HttpTransport::new(&config)?;
    assert_eq!(transport.base_url(), "http://from-env");
    Ok(())
}

#[test]
#[serial]
fn test_blank_env_is_ignored() -> Result<()> {
    clear_env();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    fs::write(&path, "api_url = \"http://from-file\"\n")?;

    std::env::set_var(API_URL_ENV, "  ");
    let config = Config::load(Some(&path));
    clear_env();

    assert_eq!(config?.api_url, "http://from-file");
    Ok(())
}

#[test]
#[serial]
fn test_missing_or_invalid_explicit_file_is_error() -> Result<()> {
    clear_env();
    let dir = tempfile::tempdir()?;
    assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());

    let path = dir.path().join("bad.toml");
    fs::write(&path, "related_limit = \"many\"")?;
    assert!(Config::load(Some(&path)).is_err());
    Ok(())
}

#[test]
fn test_user_agent_names_the_binary() {
    let agent = devref::version::user_agent();
    assert!(agent.starts_with("devref/"));
    assert!(agent.ends_with(devref::VERSION));
}
