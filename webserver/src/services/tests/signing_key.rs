use crate::error::WebServerError;
use crate::services::RealSigningKeySource;
use crate::traits::SigningKeySource;

// Each test reads its own variable so they can run in parallel.

#[test]
fn test_key_read_from_environment() {
    std::env::set_var("SWIPE_TEST_KEY_PRESENT", "s3cret");
    let source = RealSigningKeySource::from_var("SWIPE_TEST_KEY_PRESENT");
    assert_eq!(source.signing_key().unwrap(), "s3cret");
}

#[test]
fn test_missing_key_is_config_error() {
    let source = RealSigningKeySource::from_var("SWIPE_TEST_KEY_NEVER_SET");
    let err = source.signing_key().unwrap_err();
    assert!(matches!(err, WebServerError::Config(_)));
    assert!(err.to_string().contains("SWIPE_TEST_KEY_NEVER_SET"));
}

#[test]
fn test_blank_key_is_config_error() {
    std::env::set_var("SWIPE_TEST_KEY_BLANK", "   ");
    let source = RealSigningKeySource::from_var("SWIPE_TEST_KEY_BLANK");
    assert!(matches!(source.signing_key(), Err(WebServerError::Config(_))));
}
