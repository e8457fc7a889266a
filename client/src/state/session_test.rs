use super::*;

use std::sync::Mutex;

use futures::channel::oneshot;
use futures::executor::block_on;

// =============================================================
// Scripted API
// =============================================================

#[derive(Default)]
struct FakeApi {
    /// Reply for `current_user`; `None` scripts a transport failure.
    session: Option<Option<UserIdentity>>,
    /// (username, password, identity) triples the fake accepts.
    accounts: Vec<(&'static str, &'static str, UserIdentity)>,
    register_error: Option<ApiError>,
    logout_error: Option<ApiError>,
    /// When set, `current_user` waits on this before replying.
    bootstrap_gate: Mutex<Option<oneshot::Receiver<()>>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl FakeApi {
    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SessionApi for FakeApi {
    async fn current_user(&self) -> Result<Option<UserIdentity>, ApiError> {
        self.record("current_user");
        let gate = self.bootstrap_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.session
            .clone()
            .ok_or_else(|| ApiError::Transport("Failed to fetch".to_owned()))
    }

    async fn login(&self, username: &str, password: &str) -> Result<UserIdentity, ApiError> {
        self.record("login");
        self.accounts
            .iter()
            .find(|(u, p, _)| *u == username && *p == password)
            .map(|(_, _, identity)| identity.clone())
            .ok_or_else(|| ApiError::Rejected { status: 401, message: "Invalid credentials".to_owned() })
    }

    async fn register(&self, _username: &str, _email: &str, _password: &str) -> Result<(), ApiError> {
        self.record("register");
        self.register_error.clone().map_or(Ok(()), Err)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        self.logout_error.clone().map_or(Ok(()), Err)
    }
}

fn alice() -> UserIdentity {
    UserIdentity { id: 1, username: "alice".to_owned(), email: "alice@example.com".to_owned(), is_privileged: false }
}

fn root() -> UserIdentity {
    UserIdentity { id: 2, username: "root".to_owned(), email: "root@example.com".to_owned(), is_privileged: true }
}

fn with_accounts() -> FakeApi {
    FakeApi {
        session: Some(None),
        accounts: vec![("alice", "secret1", alice()), ("root", "hunter22", root())],
        ..FakeApi::default()
    }
}

fn assert_privilege_consistent(session: &Session) {
    assert_eq!(
        session.is_privileged(),
        session.identity().is_some_and(|u| u.is_privileged),
        "privilege flag diverged from identity: {session:?}"
    );
}

// =============================================================
// Session accessors
// =============================================================

#[test]
fn default_session_is_bootstrapping_and_anonymous() {
    let session = Session::default();
    assert_eq!(session.phase(), Phase::Bootstrapping);
    assert!(!session.is_ready());
    assert!(!session.is_authenticated());
    assert!(!session.is_privileged());
}

#[test]
fn privilege_is_read_from_identity() {
    assert!(Session::ready(Some(root())).is_privileged());
    assert!(!Session::ready(Some(alice())).is_privileged());
    assert!(!Session::ready(None).is_privileged());
}

// =============================================================
// bootstrap
// =============================================================

#[test]
fn bootstrap_publishes_existing_session() {
    let store = SessionStore::new(FakeApi { session: Some(Some(root())), ..FakeApi::default() });
    block_on(store.bootstrap());
    let session = store.snapshot();
    assert!(session.is_ready());
    assert_eq!(session.identity(), Some(&root()));
    assert!(session.is_privileged());
}

#[test]
fn bootstrap_with_null_user_is_ready_and_anonymous() {
    let store = SessionStore::new(FakeApi { session: Some(None), ..FakeApi::default() });
    block_on(store.bootstrap());
    assert_eq!(store.snapshot(), Session::ready(None));
}

#[test]
fn bootstrap_transport_failure_degrades_to_no_session() {
    let store = SessionStore::new(FakeApi { session: None, ..FakeApi::default() });
    block_on(store.bootstrap());
    let session = store.snapshot();
    assert!(session.is_ready());
    assert!(!session.is_authenticated());
}

#[test]
fn bootstrap_fetches_only_once() {
    let api = with_accounts();
    let calls = Arc::clone(&api.calls);
    let store = SessionStore::new(api);
    block_on(store.bootstrap());
    block_on(store.bootstrap());
    assert_eq!(*calls.lock().unwrap(), vec!["current_user"]);
}

#[test]
fn late_bootstrap_reply_does_not_overwrite_login() {
    let (release, gate) = oneshot::channel();
    let api = with_accounts();
    *api.bootstrap_gate.lock().unwrap() = Some(gate);
    let store = SessionStore::new(api);

    block_on(async {
        let boot = store.bootstrap();
        let login = async {
            let result = store.login("alice", "secret1").await;
            let _ = release.send(());
            result
        };
        let ((), login_result) = futures::join!(boot, login);
        assert_eq!(login_result, Ok(alice()));
    });

    let session = store.snapshot();
    assert!(session.is_ready());
    assert_eq!(session.identity(), Some(&alice()));
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_publishes_and_returns_identity() {
    let store = SessionStore::new(with_accounts());
    block_on(store.bootstrap());
    let identity = block_on(store.login("root", "hunter22")).unwrap();
    assert_eq!(identity, root());
    assert_eq!(store.snapshot().identity(), Some(&root()));
    assert!(store.snapshot().is_privileged());
}

#[test]
fn login_with_wrong_password_fails_and_keeps_session_absent() {
    let store = SessionStore::new(with_accounts());
    block_on(store.bootstrap());
    let err = block_on(store.login("alice", "wrong")).unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(store.snapshot().identity(), None);
}

#[test]
fn failed_login_keeps_previous_identity() {
    let store = SessionStore::new(with_accounts());
    block_on(store.bootstrap());
    block_on(store.login("alice", "secret1")).unwrap();
    assert!(block_on(store.login("root", "nope")).is_err());
    assert_eq!(store.snapshot().identity(), Some(&alice()));
}

#[test]
fn login_before_bootstrap_settles_does_not_mark_ready() {
    let store = SessionStore::new(with_accounts());
    block_on(store.login("alice", "secret1")).unwrap();
    let session = store.snapshot();
    assert_eq!(session.phase(), Phase::Bootstrapping);
    assert!(session.is_authenticated());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_success_does_not_establish_session() {
    let store = SessionStore::new(with_accounts());
    block_on(store.bootstrap());
    assert_eq!(block_on(store.register("carol", "carol@example.com", "secret1")), Ok(()));
    assert!(!store.snapshot().is_authenticated());
}

#[test]
fn register_failure_surfaces_reason() {
    let store = SessionStore::new(FakeApi {
        register_error: Some(ApiError::Rejected { status: 400, message: "Username already exists".to_owned() }),
        ..with_accounts()
    });
    let err = block_on(store.register("alice", "alice@example.com", "secret1")).unwrap_err();
    assert_eq!(err.to_string(), "Username already exists");
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_after_success_response_clears_identity() {
    let store = SessionStore::new(FakeApi { session: Some(Some(root())), ..FakeApi::default() });
    block_on(store.bootstrap());
    block_on(store.logout());
    let session = store.snapshot();
    assert_eq!(session.identity(), None);
    assert!(session.is_ready());
}

#[test]
fn logout_after_network_failure_still_clears_identity() {
    let store = SessionStore::new(FakeApi {
        session: Some(Some(root())),
        logout_error: Some(ApiError::Transport("Failed to fetch".to_owned())),
        ..FakeApi::default()
    });
    block_on(store.bootstrap());
    block_on(store.logout());
    let session = store.snapshot();
    assert_eq!(session.identity(), None);
    assert!(!session.is_privileged());
    assert!(session.is_ready());
}

#[test]
fn logout_when_anonymous_is_harmless() {
    let store = SessionStore::new(with_accounts());
    block_on(store.bootstrap());
    block_on(store.logout());
    block_on(store.logout());
    assert_eq!(store.snapshot().identity(), None);
}

// =============================================================
// Shared state
// =============================================================

#[test]
fn clones_share_one_session() {
    let store = SessionStore::new(with_accounts());
    let other = store.clone();
    block_on(store.bootstrap());
    block_on(other.login("alice", "secret1")).unwrap();
    assert_eq!(store.snapshot().identity(), Some(&alice()));
    block_on(store.logout());
    assert_eq!(other.snapshot().identity(), None);
}

#[test]
fn privilege_tracks_identity_across_transitions() {
    let store = SessionStore::new(with_accounts());
    assert_privilege_consistent(&store.snapshot());
    block_on(store.bootstrap());
    assert_privilege_consistent(&store.snapshot());

    let steps: [(&str, &str); 5] =
        [("root", "hunter22"), ("alice", "secret1"), ("root", "bad"), ("", ""), ("root", "hunter22")];
    for (username, password) in steps {
        let _ = block_on(store.login(username, password));
        assert_privilege_consistent(&store.snapshot());
        block_on(store.logout());
        assert_privilege_consistent(&store.snapshot());
        let _ = block_on(store.login(username, password));
        assert_privilege_consistent(&store.snapshot());
    }
    assert!(store.snapshot().is_privileged());
}
