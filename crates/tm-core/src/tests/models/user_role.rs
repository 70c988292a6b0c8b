use crate::{CoreError, UserRole};

use std::str::FromStr;

#[test]
fn given_email_containing_admin_when_role_for_email_then_admin() {
    assert_eq!(UserRole::for_email("admin@example.com"), UserRole::Admin);
    assert_eq!(UserRole::for_email("ops-admin@corp.io"), UserRole::Admin);
}

#[test]
fn given_regular_email_when_role_for_email_then_member() {
    assert_eq!(UserRole::for_email("maria@example.com"), UserRole::Member);
}

#[test]
fn given_unknown_role_when_parsed_then_invalid_user_role_error() {
    let result = UserRole::from_str("owner");

    assert!(matches!(result, Err(CoreError::InvalidUserRole { .. })));
}
