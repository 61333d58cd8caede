//! Domain name normalization.
//!
//! Every check works on the same normalized name: trimmed, lowercased,
//! without the trailing root dot, and in ASCII form.

use crate::error_handling::DomainError;

/// Normalizes a user-supplied domain name.
///
/// # Arguments
///
/// * `input` - The domain as typed (e.g. `" Example.COM. "` or `"Bücher.de"`)
///
/// # Returns
///
/// The normalized ASCII name (e.g. `"example.com"`, `"xn--bcher-kva.de"`).
///
/// # Errors
///
/// Returns a `DomainError` if the name is empty, contains an empty label, has
/// a label starting or ending with `-`, contains characters that cannot appear
/// in a DNS name, or is an internationalized name that cannot be converted to
/// punycode. Underscores are accepted since they are common in service labels.
pub fn normalize_domain(input: &str) -> Result<String, DomainError> {
    let domain = input.trim().to_lowercase();
    let domain = domain.strip_suffix('.').unwrap_or(&domain);

    if domain.is_empty() {
        return Err(DomainError::Empty);
    }

    let domain = if domain.is_ascii() {
        domain.to_string()
    } else {
        to_punycode(domain)?
    };

    if let Some(ch) = domain
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(DomainError::InvalidCharacter { domain, ch });
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.iter().any(|label| label.is_empty()) {
        return Err(DomainError::EmptyLabel(domain));
    }

    // LDH rule: hyphens only inside a label
    if labels
        .iter()
        .any(|label| label.starts_with('-') || label.ends_with('-'))
    {
        return Err(DomainError::HyphenatedLabel(domain));
    }

    Ok(domain)
}

/// Converts an internationalized name to its ASCII (punycode) form.
fn to_punycode(domain: &str) -> Result<String, DomainError> {
    let invalid = |reason: String| DomainError::InvalidInternationalName {
        domain: domain.to_string(),
        reason,
    };

    match url::Host::parse(domain) {
        Ok(url::Host::Domain(ascii)) => {
            log::debug!("Converted '{domain}' to '{ascii}'");
            Ok(ascii)
        }
        Ok(_) => Err(invalid("not a domain name".to_string())),
        Err(e) => Err(invalid(e.to_string())),
    }
}
