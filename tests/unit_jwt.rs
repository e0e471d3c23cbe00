use uuid::Uuid;

use gatekeeper_auth::{
    Claims, JwtTokenIssuer, Principal, TokenIssuer, create_access_token, verify_token,
};
use gatekeeper_config::JwtConfig;
use gatekeeper_models::UserRole;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
    }
}

fn principal(role: UserRole) -> Principal {
    Principal::new(Uuid::new_v4(), "test@example.com", role)
}

#[test]
fn test_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let principal = principal(UserRole::User);

    let token = create_access_token(&principal, &jwt_config).unwrap();
    assert!(!token.is_empty());

    let claims = verify_token(&token, &jwt_config).unwrap();
    assert_eq!(claims.sub, principal.user_id.to_string());
    assert_eq!(claims.email, principal.email);
    assert_eq!(claims.role, "USER");
}

#[test]
fn test_token_carries_canonical_role_name() {
    let jwt_config = get_test_jwt_config();

    for (role, expected) in [
        (UserRole::Admin, "ADMIN"),
        (UserRole::Manager, "MANAGER"),
        (UserRole::User, "USER"),
    ] {
        let token = create_access_token(&principal(role), &jwt_config).unwrap();
        let claims = verify_token(&token, &jwt_config).unwrap();
        assert_eq!(claims.role, expected);
    }
}

#[test]
fn test_claims_convert_back_to_principal() {
    let jwt_config = get_test_jwt_config();
    let original = principal(UserRole::Manager);

    let token = create_access_token(&original, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(Principal::try_from(&claims).unwrap(), original);
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();

    let token = create_access_token(&principal(UserRole::User), &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn test_verify_token_wrong_secret() {
    let token = create_access_token(&principal(UserRole::Admin), &get_test_jwt_config()).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
    };

    assert!(verify_token(&token, &wrong_jwt_config).is_err());
}

#[test]
fn test_non_positive_lifetime_is_an_error() {
    for expiry in [0, -3600] {
        let jwt_config = JwtConfig {
            access_token_expiry: expiry,
            ..get_test_jwt_config()
        };

        let err = create_access_token(&principal(UserRole::User), &jwt_config).unwrap_err();
        assert!(err.status.is_server_error(), "expiry {}", expiry);
    }
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();

    for token in [
        "",
        "invalid.token.here",
        "too.many.parts.here.extra",
        "header.payload.",
        ".payload.signature",
    ] {
        assert!(verify_token(token, &jwt_config).is_err(), "token {:?}", token);
    }
}

#[test]
fn test_issuer_tokens_verify_with_config() {
    let jwt_config = get_test_jwt_config();
    let issuer = JwtTokenIssuer::new(jwt_config.clone());
    let principal = principal(UserRole::Admin);

    let token = issuer.issue(&principal).unwrap();
    let claims: Claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, principal.user_id.to_string());
    assert_eq!(claims.role, "ADMIN");
}
