use super::*;

#[test]
fn default_points_at_local_api() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "http://localhost:5000");
    assert_eq!(config.timeout_secs(), 15);
}

#[test]
fn from_parts_uses_supplied_values() {
    let config = ApiConfig::from_parts(Some("https://api.sportsid.test/"), Some("30"));
    assert_eq!(config.base_url, "https://api.sportsid.test");
    assert_eq!(config.timeout_secs(), 30);
}

#[test]
fn from_parts_falls_back_on_blank_or_invalid() {
    let config = ApiConfig::from_parts(Some("   "), Some("soon"));
    assert_eq!(config, ApiConfig::default());
}

#[test]
fn zero_timeout_is_clamped_to_one_second() {
    assert_eq!(ApiConfig::new("http://x", 0).timeout_secs(), 1);
}

#[test]
fn url_joins_without_double_slash() {
    let config = ApiConfig::new("http://localhost:5000/", 5);
    assert_eq!(config.url("/api/family"), "http://localhost:5000/api/family");
    assert_eq!(config.url("api/programs"), "http://localhost:5000/api/programs");
}
