use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/api", "auth/login"), "/api/auth/login");
    assert_eq!(endpoint("/api/", "/users/me"), "/api/users/me");
    assert_eq!(endpoint("http://127.0.0.1:8006/api", "users/me"), "http://127.0.0.1:8006/api/users/me");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("t1"), "Bearer t1");
}

#[test]
fn from_status_maps_auth_failures() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403), ApiError::Forbidden);
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed: 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available outside the browser");
}

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@b.com ", "secret"),
        Ok(LoginRequest { email: "a@b.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_register_input_blank_group_becomes_none() {
    let body = validate_register_input("a@b.com", "pw", " Ana ", "  ").unwrap();
    assert_eq!(body.full_name, "Ana");
    assert_eq!(body.group, None);

    let body = validate_register_input("a@b.com", "pw", "Ana", " 1F1 ").unwrap();
    assert_eq!(body.group.as_deref(), Some("1F1"));
}

#[test]
fn validate_register_input_requires_name() {
    assert_eq!(
        validate_register_input("a@b.com", "pw", " ", "1F1"),
        Err("Enter email, password and full name.")
    );
}

#[test]
fn validate_admin_register_input_requires_secret() {
    assert_eq!(
        validate_admin_register_input("a@b.com", "pw", "Ana", "  "),
        Err("Enter the admin secret key.")
    );
    let body = validate_admin_register_input("a@b.com", "pw", "Ana", " k3y ").unwrap();
    assert_eq!(body.secret_key, "k3y");
}

#[cfg(not(feature = "csr"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let body = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let fut = login("/api", &body);
    assert_eq!(block_on(fut), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_current_user("/api", "t1")), Err(ApiError::Unavailable));
}

#[cfg(not(feature = "csr"))]
/// Drive a future that never pends to completion.
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future pended"),
    }
}
