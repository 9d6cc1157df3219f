use super::*;

fn company(name: &str, symbol: &str, variations: &[&str]) -> Company {
    Company {
        name: name.to_string(),
        symbol: symbol.to_string(),
        variations: variations.iter().map(|v| (*v).to_string()).collect(),
    }
}

fn sample_registry() -> CompanyRegistry {
    CompanyRegistry::from_companies(vec![
        company("Apple", "AAPL", &["Apple Inc", "iPhone maker"]),
        company("Microsoft", "MSFT", &["MSFT", "Redmond"]),
        company("Tesla", "TSLA", &[]),
    ])
    .unwrap()
}

#[test]
fn resolve_is_case_insensitive() {
    let registry = sample_registry();
    let c = registry.resolve("aPpLe").unwrap();
    assert_eq!(c.name, "Apple");
    assert_eq!(c.symbol, "AAPL");
}

#[test]
fn resolve_trims_whitespace() {
    let registry = sample_registry();
    assert_eq!(registry.resolve("  tesla ").unwrap().name, "Tesla");
}

#[test]
fn resolve_unknown_company_fails() {
    let registry = sample_registry();
    let err = registry.resolve("Enron").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownCompany(ref n) if n == "Enron"));
}

#[test]
fn mention_terms_include_canonical_name_and_variations() {
    let registry = sample_registry();
    let terms = registry.resolve("Apple").unwrap().mention_terms();
    assert!(terms.contains(&"apple".to_string()));
    assert!(terms.contains(&"apple inc".to_string()));
    assert!(terms.contains(&"iphone maker".to_string()));
}

#[test]
fn mention_terms_deduplicate_case_variants() {
    let c = company("Tesla", "TSLA", &["TESLA", "tesla"]);
    assert_eq!(c.mention_terms(), vec!["tesla".to_string()]);
}

#[test]
fn other_mention_terms_exclude_target() {
    let registry = sample_registry();
    let others = registry.other_mention_terms("Apple");
    assert!(!others.contains(&"apple".to_string()));
    assert!(!others.contains(&"apple inc".to_string()));
    assert!(others.contains(&"microsoft".to_string()));
    assert!(others.contains(&"tesla".to_string()));
}

#[test]
fn validation_rejects_duplicate_name_case_insensitive() {
    let result = CompanyRegistry::from_companies(vec![
        company("Apple", "AAPL", &[]),
        company("APPLE", "APPL2", &[]),
    ]);
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn validation_rejects_duplicate_symbol() {
    let result = CompanyRegistry::from_companies(vec![
        company("Apple", "AAPL", &[]),
        company("Apple Computer", "aapl", &[]),
    ]);
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn validation_rejects_empty_name() {
    let result = CompanyRegistry::from_companies(vec![company("  ", "AAPL", &[])]);
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn yaml_file_parses() {
    let yaml = r"
companies:
  - name: Apple
    symbol: AAPL
    variations: [Apple Inc]
  - name: Nvidia
    symbol: NVDA
";
    let dir = std::env::temp_dir().join("newsift-companies-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("companies.yaml");
    std::fs::write(&path, yaml).unwrap();

    let registry = CompanyRegistry::load(&path).unwrap();
    assert_eq!(registry.names(), vec!["Apple", "Nvidia"]);
    assert!(registry.resolve("nvidia").unwrap().variations.is_empty());
}
