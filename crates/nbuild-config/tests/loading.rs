//! Tests for layered configuration loading

use std::fs;

use figment::Jail;
use nbuild_config::{ConfigError, LogFormat, NbuildConfig};
use tempfile::TempDir;

#[test]
fn defaults_without_file() {
    Jail::expect_with(|_jail| {
        let config = NbuildConfig::load(None).unwrap();
        assert_eq!(config, NbuildConfig::default());
        assert_eq!(config.resolver.unit_test_configuration, "unit");
        assert!(
            config
                .resolver
                .is_annotation_processor("org.openide.util.lookup")
        );
        assert_eq!(config.logging.format, LogFormat::Compact);
        Ok(())
    });
}

#[test]
fn file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("nbuild.toml"),
        r#"
[resolver]
unit_test_configuration = "junit"
annotation_processors = ["lombok"]

[logging]
level = "nbuild_graph=debug"
format = "full"
"#,
    )
    .unwrap();

    Jail::expect_with(|_jail| {
        let config = NbuildConfig::discover(dir.path()).unwrap();
        assert_eq!(config.resolver.unit_test_configuration, "junit");
        assert_eq!(config.resolver.annotation_processors.len(), 1);
        assert!(config.resolver.is_annotation_processor("lombok"));
        assert_eq!(config.logging.level.as_deref(), Some("nbuild_graph=debug"));
        assert_eq!(config.logging.format, LogFormat::Full);
        Ok(())
    });
}

#[test]
fn discover_current_reads_working_directory() {
    Jail::expect_with(|jail| {
        assert_eq!(NbuildConfig::discover_current().unwrap(), NbuildConfig::default());

        jail.create_file(
            "nbuild.toml",
            r#"
[resolver]
unit_test_configuration = "cwd"
"#,
        )?;
        let config = NbuildConfig::discover_current().unwrap();
        assert_eq!(config.resolver.unit_test_configuration, "cwd");
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "nbuild.toml",
            r#"
[resolver]
unit_test_configuration = "junit"
"#,
        )?;
        jail.set_env("NBUILD_RESOLVER__UNIT_TEST_CONFIGURATION", "qa");
        jail.set_env("NBUILD_LOGGING__COLOR", "true");

        let config = NbuildConfig::discover(jail.directory()).unwrap();
        assert_eq!(config.resolver.unit_test_configuration, "qa");
        assert!(config.logging.color);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = NbuildConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(p) if p == path));
}

#[test]
fn discover_without_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    Jail::expect_with(|_jail| {
        let config = NbuildConfig::discover(dir.path()).unwrap();
        assert_eq!(config, NbuildConfig::default());
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_load_error() {
    Jail::expect_with(|jail| {
        jail.create_file("nbuild.toml", "[logging]\nformat = 42\n")?;
        let err = NbuildConfig::discover(jail.directory()).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)), "got {err:?}");
        Ok(())
    });
}

#[test]
fn empty_unit_configuration_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("nbuild.toml", "[resolver]\nunit_test_configuration = \"\"\n")?;
        let err = NbuildConfig::discover(jail.directory()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "resolver.unit_test_configuration"
        ));
        Ok(())
    });
}

#[test]
fn serialized_config_round_trips_through_file() {
    let mut config = NbuildConfig::default();
    config.resolver.unit_test_configuration = "integration".to_string();
    config.logging.target = true;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

    Jail::expect_with(|_jail| {
        let loaded = NbuildConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
        Ok(())
    });
}
