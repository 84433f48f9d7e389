//! Integration tests for loading directive files from disk.

use optfile_core::{Error, OptionRegistry, OptionValue, Schema, Status, Strategy};
use optfile_source::LineSourceConfig;
use optfile_test_utils::ConfigDir;
use pretty_assertions::assert_eq;

fn dns_registry() -> OptionRegistry {
    let mut registry = OptionRegistry::new();
    registry.add_integer("UDPPort", Strategy::Replace, 53).unwrap();
    registry.add_integer("CacheSize", Strategy::Append, 1024).unwrap();
    registry
        .add_string("UDPServer", Strategy::AppendDiscardDefault, Some("1.2.4.8"))
        .unwrap();
    registry.add_boolean("UseCache", Strategy::Default, true).unwrap();
    registry.add_path("HostsFile", Some("/etc/hosts")).unwrap();
    registry.add_alias("UDPGroup", "UDPServer", None).unwrap();
    registry
}

#[test]
fn test_load_file_applies_directives() {
    let dir = ConfigDir::new();
    let path = dir.write_lines(
        "dns.conf",
        &[
            "UDPPort 5353",
            "",
            "CacheSize=100",
            "UDPServer 8.8.8.8,\\",
            "  9.9.9.9",
            "UDPGroup\t1.1.1.1",
            "UseCache no",
            "HostsFile=\"/srv/hosts\"",
            "Unknown 12",
            "no separator here",
        ],
    );

    let mut registry = dns_registry();
    let applied = registry
        .load_file(&path, &LineSourceConfig::default())
        .unwrap();

    assert_eq!(applied, 6);
    assert_eq!(registry.get_integer("UDPPort"), 5353);
    assert_eq!(registry.get_integer("CacheSize"), 1124);
    assert_eq!(
        registry.get_string_list("UDPServer").unwrap().as_slice(),
        &["8.8.8.8", "9.9.9.9", "1.1.1.1"]
    );
    assert!(!registry.get_boolean("UseCache"));
    assert_eq!(registry.get_raw_string("HostsFile"), Some("/srv/hosts"));
}

#[test]
fn test_load_missing_file() {
    let dir = ConfigDir::new();
    let mut registry = dns_registry();

    let err = registry
        .load_file(dir.path("absent.conf"), &LineSourceConfig::default())
        .unwrap_err();
    assert!(matches!(err, Error::Source(_)));
    assert_eq!(err.code(), -56);
    assert_eq!(registry.get_integer("UDPPort"), 53);
}

#[test]
fn test_load_rejects_invalid_config() {
    let dir = ConfigDir::new();
    let path = dir.write("dns.conf", "UDPPort 1\n");
    let config = LineSourceConfig {
        max_line_len: 0,
        ..Default::default()
    };

    let err = dns_registry().load_file(&path, &config).unwrap_err();
    assert_eq!(err.code(), -150);
}

#[test]
fn test_unterminated_path_keeps_value() {
    let dir = ConfigDir::new();
    let path = dir.write("dns.conf", "HostsFile = \"/etc/x\n");

    let mut registry = dns_registry();
    registry
        .load_file(&path, &LineSourceConfig::default())
        .unwrap();

    assert_eq!(registry.get_raw_string("HostsFile"), Some("/etc/hosts"));
    assert_eq!(
        registry.entry("HostsFile").unwrap().status(),
        Status::DefaultValue
    );
}

#[test]
fn test_path_expands_environment() {
    // Any variable the test process already carries will do
    let Some((name, value)) = std::env::vars().find(|(name, value)| {
        !name.is_empty()
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !value.is_empty()
            && !value.contains([',', '"', '$'])
            && value.trim() == value
    }) else {
        return;
    };

    let dir = ConfigDir::new();
    let path = dir.write("dns.conf", &format!("HostsFile \"${{{}}}/hosts\"\n", name));

    let mut registry = dns_registry();
    registry
        .load_file(&path, &LineSourceConfig::default())
        .unwrap();
    assert_eq!(
        registry.get_raw_string("HostsFile"),
        Some(format!("{}/hosts", value).as_str())
    );
}

#[test]
fn test_long_string_line_keeps_addresses_whole() {
    let dir = ConfigDir::new();
    let servers: Vec<String> = (0..40).map(|i| format!("10.0.0.{}", i)).collect();
    let path = dir.write("dns.conf", &format!("UDPServer {}\nUDPPort 5300\n", servers.join(",")));

    let config = LineSourceConfig {
        max_line_len: 64,
        ..Default::default()
    };
    let mut registry = dns_registry();
    assert_eq!(registry.load_file(&path, &config).unwrap(), 2);

    assert_eq!(
        registry.get_string_list("UDPServer").unwrap().as_slice(),
        servers.as_slice()
    );
    assert_eq!(registry.get_integer("UDPPort"), 5300);
}

#[test]
fn test_schema_driven_load() {
    let dir = ConfigDir::new();
    let schema_path = dir.write(
        "schema.toml",
        r#"
[[option]]
key = "Server"
type = "string"
strategy = "append"
default = "base"
delimiters = " "

[[option]]
key = "Verbose"
type = "boolean"

[[alias]]
key = "Loud"
target = "Verbose"
prepend = "yes"
"#,
    );
    let conf_path = dir.write_lines("app.conf", &["Server a b", "Loud whatever"]);

    let mut registry = Schema::load(&schema_path).unwrap().build().unwrap();
    let applied = registry
        .load_file(&conf_path, &LineSourceConfig::default())
        .unwrap();

    assert_eq!(applied, 2);
    assert_eq!(
        registry.get_value("Server"),
        Some(&OptionValue::Strings(["base", "a", "b"].into_iter().collect()))
    );
    // Prepend sets true, then "whatever" replaces it with false
    assert!(!registry.get_boolean("Loud"));
    assert_eq!(registry.snapshot()["Verbose"].status, Status::Specialized);
}

#[test]
fn test_schema_load_missing_file() {
    let dir = ConfigDir::new();
    let err = Schema::load(dir.path("schema.toml")).unwrap_err();
    assert_eq!(err.code(), -56);
}

#[test]
fn test_schema_load_reports_path() {
    let dir = ConfigDir::new();
    let path = dir.write("schema.toml", "[[option]]\nkey = 1\n");
    let err = Schema::load(&path).unwrap_err();
    assert!(err.to_string().contains("schema.toml"));
}
