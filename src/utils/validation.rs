use crate::utils::error::{LuckyError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    if addr.trim().is_empty() {
        return Err(LuckyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Address cannot be empty".to_string(),
        });
    }

    addr.parse::<SocketAddr>()
        .map_err(|e| LuckyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(LuckyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(LuckyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Returns the trimmed value, or `None` when it is absent or blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Counts characters, not bytes, so "Đô" has length 2.
pub fn validate_min_chars(field_name: &str, value: &str, min: usize, message: &str) -> Result<()> {
    if value.trim().chars().count() < min {
        return Err(LuckyError::validation(field_name, message));
    }
    Ok(())
}
