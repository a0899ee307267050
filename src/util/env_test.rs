use super::*;

#[test]
fn localhost_resolves_to_development() {
    let config = EnvConfig::from_origin("http://localhost:3000").unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.api_host, "http://localhost:4000/graphql");
}

#[test]
fn branch_deployment_resolves_to_staging() {
    let config = EnvConfig::from_origin("https://budgie-web-feature-login.vercel.app").unwrap();
    assert_eq!(config.environment, Environment::Test);
    assert_eq!(config.api_host, "https://api-budgie-staging.vercel/graphql");
}

#[test]
fn production_origin_resolves_to_production() {
    let config = EnvConfig::from_origin("https://budgie-web.vercel.app").unwrap();
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.api_host, "https://api-budgie.vercel.app/graphql");
}

#[test]
fn unknown_origin_is_fatal() {
    assert_eq!(
        EnvConfig::from_origin("http://localhost:8080"),
        Err(ConfigError::UnknownOrigin("http://localhost:8080".to_owned()))
    );
    assert!(EnvConfig::from_origin("").is_err());
}

#[test]
fn staging_match_requires_vercel_suffix() {
    assert!(EnvConfig::from_origin("https://budgie-web-branch.example.com").is_err());
    assert!(EnvConfig::from_origin("http://budgie-web-branch.vercel.app").is_err());
}
