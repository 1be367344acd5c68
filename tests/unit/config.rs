use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[]));
    assert_eq!(config.server_port, 4010);
    assert_eq!(config.fs.root_path, "/opt/schemio/");
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn environment_values_win() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("SERVER_PORT", "8080"),
        ("FS_ROOT_PATH", "/srv/schemes"),
    ]));
    assert_eq!(config.server_port, 8080);
    assert_eq!(config.fs.root_path, "/srv/schemes");
}

#[test]
fn unparsable_port_falls_back() {
    let config = ServerConfig::from_lookup(lookup_from(&[("SERVER_PORT", "http")]));
    assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = serde_json::to_value(ServerConfig::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"fs": {"rootPath": "/opt/schemio/"}, "serverPort": 4010})
    );
}

#[test]
fn process_lookup_reads_present_variables() {
    assert_eq!(
        env_lookup("CARGO_MANIFEST_DIR").as_deref(),
        Some(env!("CARGO_MANIFEST_DIR"))
    );
    assert_eq!(env_lookup("SCHEMIO_TEST_SURELY_UNSET_VARIABLE"), None);
}
