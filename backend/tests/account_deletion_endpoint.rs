//! End-to-end coverage of `POST /api/v1/account/delete` through the Actix
//! stack, with in-memory doubles recording every adapter call.

use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use unishare::Trace;
use unishare::domain::ports::{
    AuthAdminApi, AuthAdminError, AuthProcedureError, AuthProcedureGateway, AuthRecordStore,
    AuthRecordStoreError, AuthUserLookup, AvatarStore, AvatarStoreError, DependentRowsRepository,
    DependentRowsRepositoryError, FIXTURE_LOGIN_EMAIL, FIXTURE_LOGIN_PASSWORD,
    FIXTURE_LOGIN_USER_ID, FixtureLoginService, ProfileRepository, ProfileRepositoryError,
    SessionRevoker, SessionRevokerError,
};
use unishare::domain::{
    AccountDeletionAdapters, AccountDeletionService, DeletionProcedure, DependentTable, Profile,
    ProfileQueryService, UserId,
};
use unishare::inbound::http::account::delete_account;
use unishare::inbound::http::error::json_error_handler;
use unishare::inbound::http::session_config::{SESSION_COOKIE_NAME, SessionSettings};
use unishare::inbound::http::state::HttpState;
use unishare::inbound::http::users::{current_user, login};

/// How the auth record responds to each eradication strategy.
#[derive(Clone, Copy)]
enum AuthBehaviour {
    /// The first procedure deletes the record.
    Cooperative,
    /// Procedures and the admin API refuse; direct SQL is rejected too.
    Locked,
}

/// Shared in-memory backend implementing every driven port.
struct RecordingBackend {
    calls: Mutex<Vec<String>>,
    auth: AuthBehaviour,
    profile: Mutex<Option<Profile>>,
}

impl RecordingBackend {
    fn new(auth: AuthBehaviour) -> Arc<Self> {
        let id = UserId::new(FIXTURE_LOGIN_USER_ID).expect("fixture id");
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            auth,
            profile: Mutex::new(Some(Profile::new(
                id,
                Some("Ada Lovelace".to_owned()),
                Some("https://project.example/storage/v1/object/public/avatars/ada.png".to_owned()),
            ))),
        })
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().expect("calls lock").push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl ProfileRepository for RecordingBackend {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self
            .profile
            .lock()
            .expect("profile lock")
            .clone()
            .filter(|profile| profile.id() == id))
    }
}

#[async_trait]
impl DependentRowsRepository for RecordingBackend {
    async fn delete_owned_rows(
        &self,
        table: DependentTable,
        _user_id: &UserId,
    ) -> Result<u64, DependentRowsRepositoryError> {
        self.record(table.step_name());
        if table == DependentTable::Profiles {
            self.profile.lock().expect("profile lock").take();
        }
        Ok(1)
    }
}

#[async_trait]
impl AvatarStore for RecordingBackend {
    async fn remove(&self, key: &str) -> Result<(), AvatarStoreError> {
        self.record(format!("remove_avatar:{key}"));
        Ok(())
    }
}

#[async_trait]
impl SessionRevoker for RecordingBackend {
    async fn revoke_sessions(&self, _user_id: &UserId) -> Result<u64, SessionRevokerError> {
        self.record("revoke_sessions");
        Ok(2)
    }
}

#[async_trait]
impl AuthProcedureGateway for RecordingBackend {
    async fn invoke(
        &self,
        procedure: DeletionProcedure,
        _user_id: &UserId,
    ) -> Result<bool, AuthProcedureError> {
        self.record(procedure.step());
        match self.auth {
            AuthBehaviour::Cooperative => Ok(true),
            AuthBehaviour::Locked => Err(AuthProcedureError::query("permission denied")),
        }
    }
}

#[async_trait]
impl AuthAdminApi for RecordingBackend {
    async fn find_user(&self, _user_id: &UserId) -> Result<AuthUserLookup, AuthAdminError> {
        self.record("admin_get_user");
        Err(AuthAdminError::rejected(403_u16, "status 403: not allowed"))
    }

    async fn delete_user(&self, _user_id: &UserId) -> Result<(), AuthAdminError> {
        self.record("admin_delete_user");
        Err(AuthAdminError::rejected(403_u16, "status 403: not allowed"))
    }
}

#[async_trait]
impl AuthRecordStore for RecordingBackend {
    async fn exists(&self, _user_id: &UserId) -> Result<bool, AuthRecordStoreError> {
        self.record("sql_check_user");
        Ok(true)
    }

    async fn delete(&self, _user_id: &UserId) -> Result<u64, AuthRecordStoreError> {
        self.record("sql_delete_user");
        Err(AuthRecordStoreError::query("must be owner of table users"))
    }
}

fn http_state(backend: &Arc<RecordingBackend>) -> HttpState {
    let deletion = AccountDeletionService::new(AccountDeletionAdapters {
        profiles: backend.clone(),
        dependent_rows: backend.clone(),
        avatars: backend.clone(),
        sessions: backend.clone(),
        procedures: backend.clone(),
        auth_admin: backend.clone(),
        auth_store: backend.clone(),
    });
    HttpState::new(
        Arc::new(FixtureLoginService),
        Arc::new(ProfileQueryService::new(backend.clone())),
        Arc::new(deletion),
    )
}

async fn init_app(
    backend: &Arc<RecordingBackend>,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let session = SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    };
    test::init_service(
        App::new()
            .app_data(web::Data::new(http_state(backend)))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .wrap(session.middleware())
                    .service(login)
                    .service(current_user)
                    .service(delete_account),
            ),
    )
    .await
}

fn session_cookie(response: &ServiceResponse) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
}

async fn log_in<S>(app: &S) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "email": FIXTURE_LOGIN_EMAIL, "password": FIXTURE_LOGIN_PASSWORD }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    session_cookie(&response).expect("session cookie")
}

async fn delete<S>(app: &S, cookie: Cookie<'static>) -> (StatusCode, Value, Option<Cookie<'static>>)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/account/delete")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let status = response.status();
    let cookie = session_cookie(&response);
    let body = test::read_body(response).await;
    (
        status,
        serde_json::from_slice(&body).expect("JSON body"),
        cookie,
    )
}

#[actix_web::test]
async fn deletion_runs_every_step_in_order_and_ends_the_session() {
    let backend = RecordingBackend::new(AuthBehaviour::Cooperative);
    let app = init_app(&backend).await;
    let cookie = log_in(&app).await;

    let (status, body, removal) = delete(&app, cookie.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Account deleted successfully" })
    );
    assert_eq!(removal.expect("removal cookie").value(), "");
    assert_eq!(
        backend.calls(),
        vec![
            "delete_resources",
            "delete_study_group_members",
            "delete_user_follows",
            "delete_notifications",
            "delete_group_invitations",
            "delete_user_settings",
            "delete_profiles",
            "remove_avatar:ada.png",
            "revoke_sessions",
            "rpc_delete_user_by_id",
        ]
    );
}

#[actix_web::test]
async fn the_old_cookie_no_longer_reaches_the_profile() {
    let backend = RecordingBackend::new(AuthBehaviour::Cooperative);
    let app = init_app(&backend).await;
    let cookie = log_in(&app).await;
    let _ = delete(&app, cookie.clone()).await;

    // The cookie itself still decodes; the profile row is gone.
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn locked_auth_record_exhausts_the_fallback_chain() {
    let backend = RecordingBackend::new(AuthBehaviour::Locked);
    let app = init_app(&backend).await;
    let cookie = log_in(&app).await;

    let (status, body, removal) = delete(&app, cookie).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Failed to delete user account after multiple attempts"
    );
    let steps: Vec<&str> = body["details"]
        .as_array()
        .expect("details array")
        .iter()
        .filter_map(|error| error["step"].as_str())
        .collect();
    assert_eq!(
        steps,
        vec![
            "rpc_delete_user_by_id",
            "rpc_force_delete_user",
            "admin_get_user",
            "sql_delete_user",
        ]
    );
    assert!(removal.is_none());
    assert!(!backend.calls().contains(&"admin_delete_user".to_owned()));
}

#[actix_web::test]
async fn anonymous_requests_touch_nothing() {
    let backend = RecordingBackend::new(AuthBehaviour::Cooperative);
    let app = init_app(&backend).await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/account/delete")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(backend.calls().is_empty());
}
