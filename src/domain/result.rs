//! Result type alias for ipanon

use super::errors::IpAnonError;

/// Result type alias for ipanon operations
///
/// # Examples
///
/// ```
/// use ipanon::domain::result::Result;
/// use ipanon::domain::errors::IpAnonError;
///
/// fn failing_function() -> Result<()> {
///     Err(IpAnonError::Validation("Invalid input".to_string()))
/// }
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, IpAnonError>;
