#[test]
fn config_env_defaults_are_stable() {
    let cfg = rewards_optimizer::config::AppConfig::from_env();
    assert!(!cfg.database_url.is_empty());
    assert!(!cfg.bind_addr.is_empty());
    assert!(!cfg.backend_url.is_empty());
}

#[test]
fn api_endpoints_exist_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("/health"));
    assert!(readme.contains("/simulate"));
    assert!(readme.contains("/predict"));
    assert!(readme.contains("/simulations"));
    assert!(readme.contains("/ops/readiness"));
}
