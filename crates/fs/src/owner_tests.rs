use std::io::ErrorKind;

use super::{resolve_group, resolve_user};

#[test]
fn numeric_tokens_pass_through() {
    assert_eq!(resolve_user("0").expect("uid"), 0);
    assert_eq!(resolve_user("1234").expect("uid"), 1234);
    assert_eq!(resolve_group("0").expect("gid"), 0);
    assert_eq!(resolve_group("4321").expect("gid"), 4321);
}

#[test]
fn unknown_names_are_not_found() {
    let err = resolve_user("no-such-user-mktree").expect_err("lookup should fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = resolve_group("no-such-group-mktree").expect_err("lookup should fail");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn root_resolves_to_uid_zero() {
    assert_eq!(resolve_user("root").expect("root uid"), 0);
}
