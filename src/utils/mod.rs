/// Utility modules for common functionality
pub mod datetime;
pub mod listing;
pub mod string_utils;
pub mod timezone;
