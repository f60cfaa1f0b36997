use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::collection::MediaType;
use crate::error::ShelfError;
use crate::organize::{Filter, Sort};
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_mediashelf_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MEDIASHELF_CONFIG_PATH", "/tmp/mediashelf-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/mediashelf-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("mediashelf")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("mediashelf")
            .join("config.toml")
    );
}

#[test]
fn defaults_show_everything_recently_added_first() {
    let s = Settings::default();
    assert_eq!(Filter::from(s.view.filter), Filter::All);
    assert_eq!(Sort::from(s.view.sort), Sort::RecentlyAddedDesc);
    assert!(!s.view.show_empty_sections);
    assert_eq!(
        s.display.fields,
        vec![MediaDisplayField::Artist, MediaDisplayField::Title]
    );
    assert!(s.collection.path.is_none());
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file_and_parse_aliases() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[view]
filter = "cassette"
sort = "oldest"
show_empty_sections = true

[display]
fields = ["title", "year", "condition"]
separator = " | "

[collection]
path = "/srv/shelf/collection.toml"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MEDIASHELF_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MEDIASHELF__VIEW__SORT");

    let s = Settings::load().unwrap();
    assert_eq!(Filter::from(s.view.filter), Filter::Type(MediaType::Cassette));
    assert_eq!(Sort::from(s.view.sort), Sort::RecentlyAddedAsc);
    assert!(s.view.show_empty_sections);
    assert_eq!(
        s.display.fields,
        vec![
            MediaDisplayField::Title,
            MediaDisplayField::Year,
            MediaDisplayField::Condition
        ]
    );
    assert_eq!(s.display.separator, " | ");
    assert_eq!(
        s.collection.path,
        Some(std::path::PathBuf::from("/srv/shelf/collection.toml"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[view]
sort = "title"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MEDIASHELF_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MEDIASHELF__VIEW__SORT", "artist");

    let s = Settings::load().unwrap();
    assert_eq!(Sort::from(s.view.sort), Sort::Artist);
}

#[test]
fn settings_load_rejects_unknown_sort() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[view]\nsort = \"shuffle\"\n").unwrap();

    let _g1 = EnvGuard::set("MEDIASHELF_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MEDIASHELF__VIEW__SORT");

    assert!(Settings::load().is_err());
}

#[test]
fn validate_rejects_empty_separator_and_empty_fields() {
    let mut s = Settings::default();
    s.display.separator.clear();
    assert!(matches!(s.validate(), Err(ShelfError::InvalidSettings(_))));

    let mut s = Settings::default();
    s.display.fields.clear();
    let err = s.validate().unwrap_err();
    assert!(err.to_string().contains("display.fields"));
}

#[test]
fn load_from_without_file_uses_defaults_and_env() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MEDIASHELF__VIEW__FILTER", "wanted");
    let _g2 = EnvGuard::remove("MEDIASHELF__VIEW__SORT");

    let s = Settings::load_from(None).unwrap();
    assert_eq!(Filter::from(s.view.filter), Filter::Wanted);
    assert_eq!(Sort::from(s.view.sort), Sort::RecentlyAddedDesc);

    let missing = std::path::Path::new("/nonexistent/mediashelf/config.toml");
    assert!(Settings::load_from(Some(missing)).is_ok());
}

#[test]
fn settings_load_reports_bad_values_as_config_errors() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(&cfg_path, "[view]\nfilter = \"eight-track\"\n").unwrap();

    let _g1 = EnvGuard::remove("MEDIASHELF__VIEW__FILTER");
    assert!(matches!(
        Settings::load_from(Some(cfg_path.as_path())),
        Err(ShelfError::Config(_))
    ));
}
