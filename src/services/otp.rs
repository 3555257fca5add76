use chrono::{DateTime, Duration, Utc};
use rand::Rng;

pub const OTP_TTL_MINUTES: i64 = 5;

/// Six-digit numeric code, uniform over 000000..=999999.
pub fn generate() -> String {
    format!("{:06}", rand::rng().random_range(0..1_000_000u32))
}

pub fn expiry_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(OTP_TTL_MINUTES)
}

/// A code is accepted only if one is stored, it matches, and it has not expired.
pub fn is_valid(
    stored: Option<&str>,
    expiry: Option<DateTime<Utc>>,
    supplied: &str,
    now: DateTime<Utc>,
) -> bool {
    match (stored, expiry) {
        (Some(code), Some(expiry)) => !code.is_empty() && code == supplied && now <= expiry,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_six_digits() {
        for _ in 0..50 {
            let code = generate();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_matching_unexpired_code() {
        let now = Utc::now();
        assert!(is_valid(Some("123456"), Some(expiry_from(now)), "123456", now));
    }

    #[test]
    fn test_mismatch_fails() {
        let now = Utc::now();
        assert!(!is_valid(Some("123456"), Some(expiry_from(now)), "654321", now));
    }

    #[test]
    fn test_expired_code_fails() {
        let issued = Utc::now() - Duration::minutes(6);
        assert!(!is_valid(Some("123456"), Some(expiry_from(issued)), "123456", Utc::now()));
    }

    #[test]
    fn test_cleared_code_fails() {
        let now = Utc::now();
        assert!(!is_valid(None, None, "123456", now));
        assert!(!is_valid(Some(""), Some(expiry_from(now)), "", now));
    }
}
