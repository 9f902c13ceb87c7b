//! Use case tests against an in-memory store

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use platform::password::CredentialHasher;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, LogInInput, LogInUseCase, LogOutUseCase};
use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{user_id::UserId, user_name::UserName, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
struct MemStore {
    users: Arc<Mutex<Vec<User>>>,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl MemStore {
    fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn insert_session(&self, session: Session) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.token_id.clone(), session);
    }
}

impl UserRepository for MemStore {
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == *username).cloned())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.user_id == *user_id).cloned())
    }
}

impl SessionRepository for MemStore {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.insert_session(session.clone());
        Ok(())
    }

    async fn find_by_token(&self, token_id: &str) -> AuthResult<Option<Session>> {
        Ok(self.sessions.lock().unwrap().get(token_id).cloned())
    }

    async fn find_latest_by_user(&self, user_id: &UserId) -> AuthResult<Option<Session>> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .values()
            .filter(|s| s.user_id == *user_id)
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    async fn delete(&self, token_id: &str) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(token_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

fn hasher() -> Arc<CredentialHasher> {
    Arc::new(CredentialHasher::new())
}

fn seed_user(
    store: &MemStore,
    hasher: &CredentialHasher,
    username: &str,
    password: &str,
    role: UserRole,
    archived: bool,
) -> User {
    let clear = platform::password::ClearTextPassword::new(password.to_string()).unwrap();
    let salt = hasher.generate_salt();
    let digest = hasher.hash(&clear, &salt).unwrap();

    let mut user = User::new(UserName::new(username).unwrap(), digest, salt, role);
    user.archived = archived;

    store.users.lock().unwrap().push(user.clone());
    user
}

fn log_in_use_case(store: &MemStore, hasher: Arc<CredentialHasher>) -> LogInUseCase<MemStore, MemStore> {
    LogInUseCase::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        hasher,
        Arc::new(AuthConfig::default()),
    )
}

fn input(username: &str, password: &str) -> LogInInput {
    LogInInput {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_log_in_creates_session() {
    let store = MemStore::default();
    let hasher = hasher();
    seed_user(&store, &hasher, "123456789012", "tamang password", UserRole::Student, false);

    let use_case = log_in_use_case(&store, hasher);
    let output = use_case.execute(input("123456789012", "tamang password")).await.unwrap();

    assert_eq!(output.token.len(), 43);
    assert_eq!(output.username, "123456789012");
    assert!(output.expires_at > Utc::now());
    assert_eq!(store.session_count(), 1);
}

#[tokio::test]
async fn test_log_in_unknown_user() {
    let store = MemStore::default();
    let use_case = log_in_use_case(&store, hasher());

    let err = use_case.execute(input("999999999999", "whatever")).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(store.session_count(), 0);
}

#[tokio::test]
async fn test_log_in_wrong_password() {
    let store = MemStore::default();
    let hasher = hasher();
    seed_user(&store, &hasher, "123456789012", "tamang password", UserRole::Student, false);

    let use_case = log_in_use_case(&store, hasher);
    let err = use_case.execute(input("123456789012", "maling password")).await.unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(store.session_count(), 0);
}

#[tokio::test]
async fn test_log_in_missing_credentials() {
    let store = MemStore::default();
    let use_case = log_in_use_case(&store, hasher());

    let err = use_case.execute(input("", "pw")).await.unwrap_err();
    assert!(matches!(err, AuthError::MissingCredentials));

    let err = use_case.execute(input("user", "")).await.unwrap_err();
    assert!(matches!(err, AuthError::MissingCredentials));
}

#[tokio::test]
async fn test_log_in_rejects_non_student() {
    let store = MemStore::default();
    let hasher = hasher();
    seed_user(&store, &hasher, "guro01", "guro password", UserRole::Teacher, false);

    let use_case = log_in_use_case(&store, hasher);
    let err = use_case.execute(input("guro01", "guro password")).await.unwrap_err();

    assert!(matches!(err, AuthError::StudentOnly));
}

#[tokio::test]
async fn test_log_in_rejects_archived_account() {
    let store = MemStore::default();
    let hasher = hasher();
    seed_user(&store, &hasher, "123456789012", "tamang password", UserRole::Student, true);

    let use_case = log_in_use_case(&store, hasher);
    let err = use_case.execute(input("123456789012", "tamang password")).await.unwrap_err();

    assert!(matches!(err, AuthError::AccountDisabled));
}

#[tokio::test]
async fn test_second_log_in_conflicts_while_session_live() {
    let store = MemStore::default();
    let hasher = hasher();
    seed_user(&store, &hasher, "123456789012", "tamang password", UserRole::Student, false);

    let use_case = log_in_use_case(&store, hasher);
    use_case.execute(input("123456789012", "tamang password")).await.unwrap();

    let err = use_case.execute(input("123456789012", "tamang password")).await.unwrap_err();
    assert!(matches!(err, AuthError::AlreadyLoggedIn));
    assert_eq!(store.session_count(), 1);
}

#[tokio::test]
async fn test_log_in_succeeds_after_leftover_session_expired() {
    let store = MemStore::default();
    let hasher = hasher();
    let user = seed_user(&store, &hasher, "123456789012", "tamang password", UserRole::Student, false);

    let mut stale = Session::new(user.user_id, StdDuration::from_secs(60));
    stale.expires_at = Utc::now() - Duration::seconds(5);
    let stale_token = stale.token_id.clone();
    store.insert_session(stale);

    let use_case = log_in_use_case(&store, hasher);
    let output = use_case.execute(input("123456789012", "tamang password")).await.unwrap();

    // Fresh session replaces the stale row
    assert_ne!(output.token, stale_token);
    assert_eq!(store.session_count(), 1);
    assert!(store.sessions.lock().unwrap().contains_key(&output.token));
}

#[tokio::test]
async fn test_check_session_resolves_identity() {
    let store = MemStore::default();
    let hasher = hasher();
    let user = seed_user(&store, &hasher, "123456789012", "tamang password", UserRole::Student, false);

    let session = Session::new(user.user_id, StdDuration::from_secs(7200));
    let token = session.token_id.clone();
    store.insert_session(session);

    let use_case = CheckSessionUseCase::new(Arc::new(store.clone()), Arc::new(store.clone()));
    let identity = use_case.execute(&token).await.unwrap();

    assert_eq!(identity.user_id, user.user_id);
    assert_eq!(identity.username, "123456789012");
    assert_eq!(identity.role, UserRole::Student);
}

#[tokio::test]
async fn test_check_session_unknown_token() {
    let store = MemStore::default();
    let use_case = CheckSessionUseCase::new(Arc::new(store.clone()), Arc::new(store.clone()));

    let err = use_case.execute("hindi-totoo").await.unwrap_err();
    assert!(matches!(err, AuthError::SessionInvalid));
    assert!(!use_case.is_valid("hindi-totoo").await.unwrap());
}

#[tokio::test]
async fn test_check_session_deletes_expired_row() {
    let store = MemStore::default();
    let hasher = hasher();
    let user = seed_user(&store, &hasher, "123456789012", "tamang password", UserRole::Student, false);

    let mut session = Session::new(user.user_id, StdDuration::from_secs(60));
    session.expires_at = Utc::now() - Duration::seconds(1);
    let token = session.token_id.clone();
    store.insert_session(session);

    let use_case = CheckSessionUseCase::new(Arc::new(store.clone()), Arc::new(store.clone()));
    let err = use_case.execute(&token).await.unwrap_err();

    assert!(matches!(err, AuthError::SessionInvalid));
    // Lazy deletion removed the row
    assert_eq!(store.session_count(), 0);
}

#[tokio::test]
async fn test_check_session_deletes_orphaned_row() {
    let store = MemStore::default();

    let session = Session::new(UserId::new(), StdDuration::from_secs(7200));
    let token = session.token_id.clone();
    store.insert_session(session);

    let use_case = CheckSessionUseCase::new(Arc::new(store.clone()), Arc::new(store.clone()));
    let err = use_case.execute(&token).await.unwrap_err();

    assert!(matches!(err, AuthError::SessionInvalid));
    assert_eq!(store.session_count(), 0);
}

#[tokio::test]
async fn test_log_out_removes_session() {
    let store = MemStore::default();
    let session = Session::new(UserId::new(), StdDuration::from_secs(7200));
    let token = session.token_id.clone();
    store.insert_session(session);

    let use_case = LogOutUseCase::new(Arc::new(store.clone()));
    use_case.execute(&token).await.unwrap();

    assert_eq!(store.session_count(), 0);

    // The same token a second time is unknown
    let err = use_case.execute(&token).await.unwrap_err();
    assert!(matches!(err, AuthError::UnknownSession));
}

#[tokio::test]
async fn test_cleanup_expired_sweep() {
    let store = MemStore::default();

    let live = Session::new(UserId::new(), StdDuration::from_secs(7200));
    let mut stale = Session::new(UserId::new(), StdDuration::from_secs(60));
    stale.expires_at = Utc::now() - Duration::seconds(10);

    store.insert_session(live);
    store.insert_session(stale);

    let removed = store.cleanup_expired().await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(store.session_count(), 1);
}
