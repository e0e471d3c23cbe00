use axum::http::StatusCode;

use gatekeeper::middleware::auth::AuthUser;
use gatekeeper::middleware::role::check_any_role;
use gatekeeper_auth::Claims;
use gatekeeper_models::UserRole;

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
const REPORT_READERS: &[UserRole] = &[UserRole::Admin, UserRole::Manager];

fn create_test_auth_user(role: &str) -> AuthUser {
    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        email: "test@example.com".to_string(),
        role: role.to_string(),
        exp: 9999999999,
        iat: 1234567890,
    };
    AuthUser(claims)
}

#[test]
fn test_admin_only_accepts_admin() {
    assert!(check_any_role(&create_test_auth_user("ADMIN"), ADMIN_ONLY).is_ok());
}

#[test]
fn test_admin_only_rejects_lower_roles() {
    for role in ["MANAGER", "USER"] {
        let err = check_any_role(&create_test_auth_user(role), ADMIN_ONLY).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN, "role {}", role);
    }
}

#[test]
fn test_report_readers() {
    assert!(check_any_role(&create_test_auth_user("ADMIN"), REPORT_READERS).is_ok());
    assert!(check_any_role(&create_test_auth_user("MANAGER"), REPORT_READERS).is_ok());
    assert!(check_any_role(&create_test_auth_user("USER"), REPORT_READERS).is_err());
}

#[test]
fn test_non_canonical_role_in_token_is_unauthorized() {
    let err = check_any_role(&create_test_auth_user("admin"), ADMIN_ONLY).unwrap_err();
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[test]
fn test_empty_allow_list_rejects_everyone() {
    assert!(check_any_role(&create_test_auth_user("ADMIN"), &[]).is_err());
}

#[test]
fn test_auth_user_principal() {
    let principal = create_test_auth_user("MANAGER").principal().unwrap();

    assert_eq!(principal.user_id, uuid::Uuid::nil());
    assert_eq!(principal.email, "test@example.com");
    assert_eq!(principal.role, UserRole::Manager);
}
