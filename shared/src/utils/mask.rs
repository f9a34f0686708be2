//! Masking helpers for personal data written to logs

/// Mask an email address for display (e.g., jo***@example.com)
///
/// Keeps the first two characters of the local part and the full domain.
/// Strings without an `@` are masked entirely.
pub fn mask_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        _ => "***".to_string(),
    }
}

/// Mask an account identifier that may be a username or an email
pub fn mask_account(account: &str) -> String {
    if account.contains('@') {
        return mask_email(account);
    }
    let visible: String = account.chars().take(2).collect();
    format!("{}***", visible)
}
