use super::*;

#[test]
fn api_base_drops_trailing_slashes() {
    assert_eq!(normalize_api_base("https://api.market.test/v1//"), "https://api.market.test/v1");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    assert_eq!(normalize_api_base("  "), "/api");
    assert_eq!(normalize_api_base("/"), "/api");
}

#[test]
fn session_defaults_poll_every_minute() {
    let config = ClientConfig::from_build_env();
    assert_eq!(config.session.poll_interval, std::time::Duration::from_secs(60));
    assert_eq!(config.session.token_key, "token");
    assert!(!config.api_base.ends_with('/'));
}
