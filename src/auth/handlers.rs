use crate::{
    auth::jwt::TokenIssuer,
    error::ApiError,
    model::{NewUser, User},
    models::{Envelope, LoginReqDto, LoginResponse},
    store::{Filter, Store, StoreError},
};
use actix_web::{HttpResponse, web};
use tracing::{debug, error, info, instrument};

/// User registration handler
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = NewUser,
    responses(
        (status = 200, description = "User registered", body = Object, example = json!({
            "message": "Successfully Registered"
        })),
        (status = 400, description = "Store failure", body = Object, example = json!({
            "message": "could not register the user"
        })),
        (status = 422, description = "Malformed body", body = Object, example = json!({
            "message": "request failed"
        }))
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_register", skip_all)]
pub async fn register<S: Store>(
    store: web::Data<S>,
    user: web::Json<NewUser>,
) -> Result<HttpResponse, ApiError> {
    store.create::<User>(&user.into_inner()).await.map_err(|e| {
        error!(error = %e, "Failed to register user");
        ApiError::Store("could not register the user")
    })?;

    info!("User registered");
    Ok(HttpResponse::Ok().json(Envelope::message("Successfully Registered")))
}

/// Login handler
///
/// Credentials are compared as stored, without hashing.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginReqDto,
    responses(
        (status = 200, description = "Login successful", body = Object, example = json!({
            "message": "login successful",
            "token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9..."
        })),
        (status = 401, description = "Invalid credentials", body = Object, example = json!({
            "message": "invalid email or password"
        })),
        (status = 422, description = "Malformed body"),
        (status = 500, description = "Token could not be signed")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip_all,
    fields(email = user.email.as_deref().unwrap_or_default())
)]
pub async fn login<S: Store>(
    store: web::Data<S>,
    tokens: web::Data<TokenIssuer>,
    user: web::Json<LoginReqDto>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");

    let LoginReqDto { email, password } = user.into_inner();
    let filter = Filter::Columns(vec![("email", email), ("password", password)]);

    let db_user = match store.find_one::<User>(filter).await {
        Ok(user) => user,
        Err(StoreError::NotFound) => {
            info!("Invalid credentials");
            return Err(ApiError::Unauthorized);
        }
        Err(e) => {
            error!(error = %e, "Database error while fetching user");
            return Err(ApiError::Unauthorized);
        }
    };

    debug!(user_id = db_user.id, "Generating token");

    let token = tokens.issue(db_user.id).map_err(|e| {
        error!(error = %e, user_id = db_user.id, "Failed to sign token");
        ApiError::Token
    })?;

    info!("Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "login successful".to_string(),
        token,
    }))
}

#[cfg(test)]
mod tests {
    use crate::models::Claims;
    use crate::store::memory::MemoryStore;
    use crate::test_utils::{TEST_SECRET, post_json, test_app};
    use actix_web::{http::StatusCode, test, web::Data};
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
    use serde_json::{Value, json};
    use tracing_test::traced_test;

    #[actix_web::test]
    async fn register_confirms_without_echoing_the_record() {
        let store = Data::new(MemoryStore::default());
        let app = test::init_service(test_app(store.clone())).await;

        let resp = post_json(
            &app,
            "/api/register",
            json!({ "username": "a", "email": "a@x.com", "password": "p" }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Successfully Registered" }));

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["data"],
            json!([{ "id": 1, "username": "a", "email": "a@x.com", "password": "p" }])
        );
    }

    #[actix_web::test]
    async fn register_accepts_missing_fields() {
        let store = Data::new(MemoryStore::default());
        let app = test::init_service(test_app(store.clone())).await;

        let resp = post_json(&app, "/api/register", json!({})).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn register_reports_store_failure() {
        let store = Data::new(MemoryStore::default());
        store.fail();
        let app = test::init_service(test_app(store.clone())).await;

        let resp = post_json(&app, "/api/register", json!({ "username": "a" })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "could not register the user" }));
    }

    #[actix_web::test]
    async fn malformed_body_is_unprocessable() {
        let store = Data::new(MemoryStore::default());
        let app = test::init_service(test_app(store.clone())).await;

        let req = test::TestRequest::post()
            .uri("/api/register")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "request failed" }));
        assert_eq!(store.calls(), 0);

        let resp = post_json(&app, "/api/login", json!({ "email": 5 })).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn login_issues_token_for_exact_credentials() {
        let store = Data::new(MemoryStore::default());
        let app = test::init_service(test_app(store.clone())).await;

        post_json(&app, "/api/register", json!({ "username": "b", "email": "b@x.com", "password": "q" })).await;
        post_json(&app, "/api/register", json!({ "username": "a", "email": "a@x.com", "password": "p" })).await;

        let resp = post_json(&app, "/api/login", json!({ "email": "a@x.com", "password": "p" })).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "login successful");

        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        let claims = decode::<Claims>(
            body["token"].as_str().unwrap(),
            &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;
        assert_eq!(claims, Claims { user_id: 2 });
    }

    #[actix_web::test]
    async fn login_rejects_any_mismatch() {
        let store = Data::new(MemoryStore::default());
        let app = test::init_service(test_app(store.clone())).await;

        post_json(&app, "/api/register", json!({ "email": "a@x.com", "password": "p" })).await;

        for attempt in [
            json!({ "email": "a@x.com", "password": "wrong" }),
            json!({ "email": "a@x.com", "password": "P" }),
            json!({ "email": "A@x.com", "password": "p" }),
            json!({ "email": "a@x.com" }),
            json!({}),
        ] {
            let resp = post_json(&app, "/api/login", attempt).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "message": "invalid email or password" }));
        }
    }

    #[actix_web::test]
    async fn login_never_matches_a_user_without_password() {
        let store = Data::new(MemoryStore::default());
        let app = test::init_service(test_app(store.clone())).await;

        post_json(&app, "/api/register", json!({ "email": "a@x.com" })).await;

        let resp = post_json(&app, "/api/login", json!({ "email": "a@x.com" })).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    // duplicate emails are accepted, login picks the oldest account
    #[actix_web::test]
    async fn duplicate_email_is_not_rejected() {
        let store = Data::new(MemoryStore::default());
        let app = test::init_service(test_app(store.clone())).await;

        for _ in 0..2 {
            let resp = post_json(&app, "/api/register", json!({ "email": "a@x.com", "password": "p" })).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    #[traced_test]
    async fn login_logs_store_outage_as_error() {
        let store = Data::new(MemoryStore::default());
        store.fail();
        let app = test::init_service(test_app(store.clone())).await;

        let resp = post_json(&app, "/api/login", json!({ "email": "a@x.com", "password": "p" })).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        assert!(logs_contain("Database error while fetching user"));
        assert!(!logs_contain("Invalid credentials"));
    }

    #[actix_web::test]
    #[traced_test]
    async fn login_logs_unknown_credentials_as_info() {
        let store = Data::new(MemoryStore::default());
        let app = test::init_service(test_app(store.clone())).await;

        let resp = post_json(&app, "/api/login", json!({ "email": "a@x.com", "password": "p" })).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        assert!(logs_contain("Invalid credentials"));
        assert!(!logs_contain("Database error while fetching user"));
    }
}
