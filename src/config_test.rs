use super::*;

#[test]
fn default_config_matches_web_client() {
    let config = SessionConfig::default();
    assert_eq!(config.data_dir, PathBuf::from("."));
    assert_eq!(config.verify_delay, Duration::from_millis(1000));
}

#[test]
fn env_parse_missing_key_falls_back() {
    assert_eq!(env_parse("ASME_TEST_KEY_THAT_IS_NEVER_SET", 42_u64), 42);
}

#[test]
fn env_parse_unparseable_value_falls_back() {
    // PATH is always set and never parses as a number.
    assert_eq!(env_parse("PATH", 7_u64), 7);
}

#[test]
fn env_parse_reads_valid_value() {
    // set_var is unsafe in edition 2024; the key is unique to this test so
    // no other test can observe the mutation.
    unsafe { std::env::set_var("ASME_TEST_ENV_PARSE_VALID", "250") };
    assert_eq!(env_parse("ASME_TEST_ENV_PARSE_VALID", 1_u64), 250);
}
