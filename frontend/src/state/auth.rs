use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    session::{Session, SessionManager},
};
use leptos::*;

/// Signal payload: `user` plus `loading`, which stays true until the first
/// bootstrap settles.
pub type AuthState = Session;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

fn create_auth_context(sessions: SessionManager) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    spawn_local(async move {
        bootstrap_session(&sessions, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_api_client();
    provide_context(api.clone());
    let ctx = create_auth_context(SessionManager::new(api));
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

pub fn use_session_manager() -> SessionManager {
    SessionManager::new(use_api_client())
}

pub async fn bootstrap_session(sessions: &SessionManager, set_auth_state: WriteSignal<AuthState>) {
    let session = sessions.bootstrap().await;
    log::debug!("Session restored, authenticated: {}", session.is_authenticated());
    set_auth_state.set(session);
}

pub async fn login_request(
    request: LoginRequest,
    sessions: &SessionManager,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match sessions.login(&request).await {
        Ok(user) => {
            set_auth_state.set(Session::resolved(Some(user)));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(sessions: &SessionManager, set_auth_state: WriteSignal<AuthState>) {
    sessions.logout();
    set_auth_state.set(Session::resolved(None));
}

pub async fn refresh_session(sessions: &SessionManager, set_auth_state: WriteSignal<AuthState>) {
    let user = sessions.refresh().await;
    set_auth_state.set(Session::resolved(user));
}

pub async fn reload_profile(sessions: &SessionManager, set_auth_state: WriteSignal<AuthState>) {
    let user = sessions.fetch_profile().await;
    set_auth_state.set(Session::resolved(user));
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let sessions = use_session_manager();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let sessions = sessions.clone();
        async move { login_request(payload, &sessions, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let sessions = use_session_manager();

    create_action(move |_: &()| {
        let sessions = sessions.clone();
        async move { logout(&sessions, set_auth) }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{fixtures::*, mock::*};
    use crate::api::{LOGIN_PATH, PROFILE_PATH, TOKEN_REFRESH_PATH};
    use crate::utils::storage::MemoryTokenStore;
    use serde_json::json;
    use std::rc::Rc;

    fn sessions(server: &MockServer, store: Rc<MemoryTokenStore>) -> SessionManager {
        SessionManager::new(ApiClient::new_with_base_url(server.base_url()).with_token_store(store))
    }

    #[tokio::test]
    async fn bootstrap_without_tokens_settles_logged_out() {
        let server = MockServer::start_async().await;
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        assert!(state.get().loading);

        bootstrap_session(&sessions(&server, Rc::new(MemoryTokenStore::new())), set_state).await;

        assert_eq!(state.get(), Session::resolved(None));
        assert!(server.requests().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn bootstrap_with_live_token_loads_user() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path(PROFILE_PATH);
            then.status(200).json_body(profile_json());
        });
        let access = access_token_expiring_in(3_600);
        let store = Rc::new(MemoryTokenStore::with_tokens(Some(&access), Some("R1")));
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());

        bootstrap_session(&sessions(&server, store), set_state).await;

        let snapshot = state.get();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.user, Some(profile()));
        assert_eq!(server.hits(POST, TOKEN_REFRESH_PATH), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(200)
                .json_body(json!({ "access": "A1", "refresh": "R1" }));
        });
        server.mock(|when, then| {
            when.method(GET).path(PROFILE_PATH);
            then.status(200).json_body(profile_json());
        });
        let store = Rc::new(MemoryTokenStore::new());
        let sessions = sessions(&server, store.clone());
        let runtime = create_runtime();
        let (state, set_state) = create_signal(Session::resolved(None));

        login_request(
            LoginRequest {
                email: "owner@garage1.np".into(),
                password: "secret-pass".into(),
            },
            &sessions,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated());
        assert!(!snapshot.loading);

        logout(&sessions, set_state);
        assert_eq!(state.get(), Session::resolved(None));
        assert!(store.is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_keeps_user_logged_out() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(401).json_body(json!({
                "detail": "No active account found with the given credentials"
            }));
        });
        let runtime = create_runtime();
        let (state, set_state) = create_signal(Session::resolved(None));

        let err = login_request(
            LoginRequest {
                email: "owner@garage1.np".into(),
                password: "wrong-pass".into(),
            },
            &sessions(&server, Rc::new(MemoryTokenStore::new())),
            set_state,
        )
        .await
        .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(state.get(), Session::resolved(None));
        assert_eq!(server.hits(GET, PROFILE_PATH), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_session_and_reload_profile_write_user() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path(TOKEN_REFRESH_PATH);
            then.status(200).json_body(json!({ "access": "T2" }));
        });
        server.mock(|when, then| {
            when.method(GET).path(PROFILE_PATH);
            then.status(200).json_body(profile_json());
        });
        let store = Rc::new(MemoryTokenStore::with_tokens(Some("T1"), Some("R1")));
        let sessions = sessions(&server, store);
        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());

        refresh_session(&sessions, set_state).await;
        assert_eq!(state.get().user, Some(profile()));

        set_state.set(Session::resolved(None));
        reload_profile(&sessions, set_state).await;
        assert_eq!(state.get().user, Some(profile()));
        assert_eq!(
            server.requests().last().and_then(|r| r.authorization.clone()).as_deref(),
            Some("Bearer T2")
        );
        runtime.dispose();
    }
}
