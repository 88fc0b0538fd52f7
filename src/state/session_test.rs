use super::*;

fn alice() -> Credentials {
    Credentials::new("Alice Smith", "alice@example.com", "hunter2")
}

// =============================================================
// Credentials validation
// =============================================================

#[test]
fn validate_trims_name_and_email() {
    let creds = Credentials::new("  Alice Smith ", " alice@example.com ", "pw");
    assert_eq!(
        creds.validate(),
        Ok(SessionUser { name: "Alice Smith".to_owned(), email: "alice@example.com".to_owned() })
    );
}

#[test]
fn validate_requires_name() {
    let creds = Credentials::new("   ", "alice@example.com", "pw");
    assert_eq!(creds.validate(), Err(LoginError::MissingName));
}

#[test]
fn validate_rejects_malformed_email() {
    for bad in ["", "alice", "@example.com", "alice@", "a@b@c", "al ice@example.com"] {
        let creds = Credentials::new("Alice", bad, "pw");
        assert!(
            matches!(creds.validate(), Err(LoginError::InvalidEmail(_))),
            "expected '{bad}' to be rejected"
        );
    }
}

#[test]
fn validate_requires_password() {
    let creds = Credentials::new("Alice", "alice@example.com", "");
    assert_eq!(creds.validate(), Err(LoginError::MissingPassword));
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_default_is_unauthenticated() {
    let store = SessionStore::default();
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
    assert!(store.session().is_none());
}

#[test]
fn login_holds_the_provided_user() {
    let mut store = SessionStore::default();
    let user = store.login(&alice()).unwrap();
    assert_eq!(user.name, "Alice Smith");
    assert!(store.is_authenticated());
    assert_eq!(store.current_user(), Some(user));
}

#[test]
fn failed_login_leaves_existing_session_untouched() {
    let mut store = SessionStore::default();
    store.login(&alice()).unwrap();
    let before = store.session().cloned();

    let err = store.login(&Credentials::new("Bob", "not-an-email", "pw"));
    assert!(err.is_err());
    assert_eq!(store.session().cloned(), before);
}

#[test]
fn second_login_replaces_the_session() {
    let mut store = SessionStore::default();
    store.login(&alice()).unwrap();
    let first_id = store.session().map(|s| s.id);

    store.login(&Credentials::new("Bob", "bob@example.com", "pw")).unwrap();
    assert_eq!(store.current_user().map(|u| u.name), Some("Bob".to_owned()));
    assert_ne!(store.session().map(|s| s.id), first_id);
}

#[test]
fn logout_clears_the_session() {
    let mut store = SessionStore::default();
    store.login(&alice()).unwrap();
    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
}

#[test]
fn logout_when_signed_out_is_a_no_op() {
    let mut store = SessionStore::default();
    store.logout();
    assert_eq!(store, SessionStore::default());
}

// =============================================================
// SessionContext
// =============================================================

#[test]
fn context_reads_and_writes_through_the_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let mut session = SessionContext::new(SessionStore::default());
        assert!(!session.is_authenticated());

        session.login(&alice()).unwrap();
        assert_eq!(session.current_user().map(|u| u.email), Some("alice@example.com".to_owned()));

        // Copies share the same underlying store.
        let mut other = session;
        other.logout();
        assert!(!session.is_authenticated());
    });
}
