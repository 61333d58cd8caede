// Domain module tests.

use super::*;

#[test]
fn test_normalize_domain_basic() {
    assert_eq!(normalize_domain("example.com").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_case_and_whitespace() {
    assert_eq!(normalize_domain("  Example.COM \n").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_trailing_dot() {
    // Fully-qualified input should be accepted
    assert_eq!(normalize_domain("example.com.").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_single_label() {
    assert_eq!(normalize_domain("localhost").unwrap(), "localhost");
}

#[test]
fn test_normalize_domain_underscore_allowed() {
    assert_eq!(
        normalize_domain("_dmarc.example.com").unwrap(),
        "_dmarc.example.com"
    );
}

#[test]
fn test_normalize_domain_empty() {
    assert_eq!(normalize_domain(""), Err(DomainError::Empty));
    assert_eq!(normalize_domain("   "), Err(DomainError::Empty));
    assert_eq!(normalize_domain("."), Err(DomainError::Empty));
}

#[test]
fn test_normalize_domain_invalid_characters() {
    match normalize_domain("exa mple.com") {
        Err(DomainError::InvalidCharacter { ch, .. }) => assert_eq!(ch, ' '),
        other => panic!("Expected InvalidCharacter, got {:?}", other),
    }
    assert!(normalize_domain("https://example.com").is_err());
    assert!(normalize_domain("example.com;rm").is_err());
}

#[test]
fn test_normalize_domain_empty_label() {
    assert_eq!(
        normalize_domain("example..com"),
        Err(DomainError::EmptyLabel("example..com".to_string()))
    );
    assert!(normalize_domain(".example.com").is_err());
}

#[test]
fn test_normalize_domain_rejects_option_like_names() {
    // A leading hyphen would otherwise reach dig as an option
    for input in ["-h", "-x", "-p53", "-fexample.com"] {
        assert_eq!(
            normalize_domain(input),
            Err(DomainError::HyphenatedLabel(input.to_lowercase())),
            "input: {input}"
        );
    }
}

#[test]
fn test_normalize_domain_hyphen_placement() {
    assert_eq!(
        normalize_domain("my-site.example.com").unwrap(),
        "my-site.example.com"
    );
    assert!(matches!(
        normalize_domain("example-.com"),
        Err(DomainError::HyphenatedLabel(_))
    ));
    assert!(matches!(
        normalize_domain("mail.-example.com"),
        Err(DomainError::HyphenatedLabel(_))
    ));
}

#[test]
fn test_normalize_domain_punycode() {
    assert_eq!(normalize_domain("Bücher.de").unwrap(), "xn--bcher-kva.de");
    assert_eq!(normalize_domain("bücher.de.").unwrap(), "xn--bcher-kva.de");
    // Already-encoded names pass through unchanged
    assert_eq!(
        normalize_domain("xn--bcher-kva.de").unwrap(),
        "xn--bcher-kva.de"
    );
}

#[test]
fn test_normalize_domain_invalid_international_name() {
    assert!(matches!(
        normalize_domain("bü cher.de"),
        Err(DomainError::InvalidInternationalName { .. })
    ));
}
