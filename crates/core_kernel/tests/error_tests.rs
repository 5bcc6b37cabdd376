//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::PortError;

#[test]
fn test_core_error_configuration() {
    let CoreError::Configuration(msg) = CoreError::configuration("Missing config");
    assert_eq!(msg, "Missing config");
}

#[test]
fn test_core_error_display() {
    let display = format!("{}", CoreError::configuration("Port must be non-zero"));
    assert_eq!(display, "Configuration error: Port must be non-zero");
}

#[test]
fn test_port_error_internal_display() {
    let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "row decode failed");
    let error = PortError::internal(cause);
    assert!(!error.is_not_found());
    assert_eq!(error.to_string(), "Internal error: row decode failed");
}
