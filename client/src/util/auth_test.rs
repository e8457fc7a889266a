use super::*;
use crate::net::api::SessionApi;
use crate::net::error::ApiError;
use crate::state::session::{Phase, SessionStore};

use futures::executor::block_on;

fn user(is_privileged: bool) -> UserIdentity {
    UserIdentity {
        id: 1,
        username: if is_privileged { "root" } else { "alice" }.to_owned(),
        email: "user@example.com".to_owned(),
        is_privileged,
    }
}

const REQUIREMENTS: [Requirement; 2] = [Requirement::Authenticated, Requirement::Privileged];

/// Anonymous at bootstrap; `login` accepts any password except "wrong".
struct LoginOnly {
    identity: UserIdentity,
}

impl SessionApi for LoginOnly {
    async fn current_user(&self) -> Result<Option<UserIdentity>, ApiError> {
        Ok(None)
    }

    async fn login(&self, _username: &str, password: &str) -> Result<UserIdentity, ApiError> {
        if password == "wrong" {
            return Err(ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() });
        }
        Ok(self.identity.clone())
    }

    async fn register(&self, _username: &str, _email: &str, _password: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn every_guard_waits_while_bootstrapping() {
    for identity in [None, Some(user(false)), Some(user(true))] {
        let session = Session::from_parts(identity, Phase::Bootstrapping);
        for requirement in REQUIREMENTS {
            assert_eq!(guard_decision(&session, requirement, "/admin/users"), GuardDecision::Loading);
        }
    }
}

#[test]
fn anonymous_ready_session_is_sent_to_login_by_every_guard() {
    let session = Session::ready(None);
    for requirement in REQUIREMENTS {
        assert_eq!(
            guard_decision(&session, requirement, "/admin/users"),
            GuardDecision::Redirect("/login?redirect=%2Fadmin%2Fusers".to_owned())
        );
    }
}

#[test]
fn unprivileged_user_is_sent_home_from_admin_views() {
    let session = Session::ready(Some(user(false)));
    assert_eq!(
        guard_decision(&session, Requirement::Privileged, "/admin/dashboard"),
        GuardDecision::Redirect(HOME_ROUTE.to_owned())
    );
}

#[test]
fn unprivileged_user_renders_plain_protected_views() {
    let session = Session::ready(Some(user(false)));
    assert_eq!(guard_decision(&session, Requirement::Authenticated, "/user/history"), GuardDecision::Render);
}

#[test]
fn privileged_user_renders_every_guard() {
    let session = Session::ready(Some(user(true)));
    for requirement in REQUIREMENTS {
        assert_eq!(guard_decision(&session, requirement, "/admin/model-info"), GuardDecision::Render);
    }
}

#[test]
fn null_bootstrap_redirects_plain_guard_with_return_target() {
    let store = SessionStore::new(LoginOnly { identity: user(false) });
    block_on(store.bootstrap());
    assert_eq!(
        guard_decision(&store.snapshot(), Requirement::Authenticated, "/user/history"),
        GuardDecision::Redirect("/login?redirect=%2Fuser%2Fhistory".to_owned())
    );
}

#[test]
fn login_then_privileged_guard_never_redirects_to_login() {
    for is_privileged in [true, false] {
        let store = SessionStore::new(LoginOnly { identity: user(is_privileged) });
        block_on(store.bootstrap());
        block_on(store.login("someone", "pw")).unwrap();
        let decision = guard_decision(&store.snapshot(), Requirement::Privileged, "/admin/dashboard");
        let expected =
            if is_privileged { GuardDecision::Render } else { GuardDecision::Redirect(HOME_ROUTE.to_owned()) };
        assert_eq!(decision, expected);
    }
}

#[test]
fn logout_flips_mounted_guards_back_to_login() {
    let store = SessionStore::new(LoginOnly { identity: user(true) });
    block_on(store.bootstrap());
    block_on(store.login("root", "pw")).unwrap();
    block_on(store.logout());
    let session = store.snapshot();
    assert_eq!(
        guard_decision(&session, Requirement::Privileged, "/admin/users"),
        GuardDecision::Redirect(login_redirect_path("/admin/users"))
    );
    assert_eq!(
        guard_decision(&session, Requirement::Authenticated, "/user/history"),
        GuardDecision::Redirect(login_redirect_path("/user/history"))
    );
}

#[test]
fn requirement_from_privileged_flag() {
    assert_eq!(Requirement::from_privileged(true), Requirement::Privileged);
    assert_eq!(Requirement::from_privileged(false), Requirement::Authenticated);
}

// =============================================================
// Return targets
// =============================================================

#[test]
fn login_redirect_path_encodes_query_characters() {
    assert_eq!(login_redirect_path("/detect?x=1&y=2"), "/login?redirect=%2Fdetect%3Fx%3D1%26y%3D2");
}

#[test]
fn sanitize_return_target_accepts_local_paths() {
    assert_eq!(sanitize_return_target(Some("/user/history")), "/user/history");
}

#[test]
fn sanitize_return_target_rejects_external_and_missing_targets() {
    for raw in [None, Some(""), Some("https://evil.example"), Some("//evil.example"), Some("/\\evil.example")] {
        assert_eq!(sanitize_return_target(raw), HOME_ROUTE, "{raw:?}");
    }
}

// =============================================================
// Post-login navigation
// =============================================================

#[test]
fn privileged_login_always_lands_on_admin_dashboard() {
    for origin in ["/", "/user/history", "/detect"] {
        assert_eq!(post_login_target(&user(true), origin), ADMIN_LANDING_ROUTE);
    }
}

#[test]
fn unprivileged_login_returns_to_origin() {
    assert_eq!(post_login_target(&user(false), "/user/history"), "/user/history");
    assert_eq!(post_login_target(&user(false), HOME_ROUTE), HOME_ROUTE);
}

#[test]
fn already_authenticated_target_branches_by_privilege() {
    assert_eq!(already_authenticated_target(&Session::ready(None), "/detect"), None);
    assert_eq!(
        already_authenticated_target(&Session::ready(Some(user(true))), "/detect"),
        Some(ADMIN_LANDING_ROUTE.to_owned())
    );
    assert_eq!(
        already_authenticated_target(&Session::ready(Some(user(false))), "/detect"),
        Some("/detect".to_owned())
    );
}

#[test]
fn failed_login_leaves_guards_redirecting_to_login() {
    let store = SessionStore::new(LoginOnly { identity: user(true) });
    block_on(store.bootstrap());
    let err = block_on(store.login("alice", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(matches!(
        guard_decision(&store.snapshot(), Requirement::Authenticated, "/"),
        GuardDecision::Redirect(_)
    ));
}

// =============================================================
// Requested path
// =============================================================

#[test]
fn requested_path_without_query_is_the_pathname() {
    assert_eq!(requested_path("/user/history", ""), "/user/history");
    assert_eq!(requested_path("/user/history", "?"), "/user/history");
}

#[test]
fn requested_path_keeps_query_with_or_without_leading_marker() {
    assert_eq!(requested_path("/admin/detection-logs", "page=2"), "/admin/detection-logs?page=2");
    assert_eq!(requested_path("/admin/detection-logs", "?page=2"), "/admin/detection-logs?page=2");
}

#[test]
fn query_survives_the_login_round_trip() {
    let requested = requested_path("/admin/detection-logs", "page=2&sort=desc");
    let decision = guard_decision(&Session::ready(None), Requirement::Privileged, &requested);
    assert_eq!(
        decision,
        GuardDecision::Redirect("/login?redirect=%2Fadmin%2Fdetection-logs%3Fpage%3D2%26sort%3Ddesc".to_owned())
    );

    // The login page reads the decoded `redirect` value back.
    let decoded = urlencoding::decode("%2Fadmin%2Fdetection-logs%3Fpage%3D2%26sort%3Ddesc").unwrap();
    let target = sanitize_return_target(Some(decoded.as_ref()));
    assert_eq!(target, "/admin/detection-logs?page=2&sort=desc");
    assert_eq!(post_login_target(&user(false), &target), "/admin/detection-logs?page=2&sort=desc");
}
