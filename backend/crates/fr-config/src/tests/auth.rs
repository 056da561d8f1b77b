use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, setup_required_env};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_jwt_secret_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = setup_required_env();
    let _secret = EnvGuard::remove("JWT_SECRET_KEY");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("JWT_SECRET_KEY"));
}

#[test]
#[serial]
fn given_jwt_secret_too_short_when_validate_then_error_mentions_32_chars() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = setup_required_env();
    let _secret = EnvGuard::set("JWT_SECRET_KEY", "tooshort");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32 characters"));
}

#[test]
#[serial]
fn given_jwt_secret_exactly_32_chars_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = setup_required_env();
    let _secret = EnvGuard::set("JWT_SECRET_KEY", "12345678901234567890123456789012"); // 32 chars

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_session_ttl_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = setup_required_env();
    let _ttl = EnvGuard::set("FR_AUTH_SESSION_TTL_HOURS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("session_ttl_hours"));
}

#[test]
#[serial]
fn given_session_ttl_above_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = setup_required_env();
    let _ttl = EnvGuard::set("FR_AUTH_SESSION_TTL_HOURS", "721");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_no_google_client_id_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = setup_required_env();
    let _client = EnvGuard::remove("GOOGLE_CLIENT_ID");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("GOOGLE_CLIENT_ID"));
}

#[test]
#[serial]
fn given_blank_google_client_id_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _required = setup_required_env();
    let _client = EnvGuard::set("GOOGLE_CLIENT_ID", "   ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
