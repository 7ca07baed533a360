//! Result type alias for the supplier feed
//!
//! This module provides a convenient Result type alias that uses FeedError
//! as the error type.

use super::errors::FeedError;

/// Result type alias for supplier feed operations
///
/// # Examples
///
/// ```
/// use supplier_feed::domain::result::Result;
/// use supplier_feed::domain::errors::FeedError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(FeedError::InvalidArgument("page_size must be >= 1".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, FeedError>;
