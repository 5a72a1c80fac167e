//! Integration tests for API endpoints.
//!
//! The router runs against in-memory repositories, so no database is needed.
//! Real hashing (at minimum bcrypt cost) and real token signing are used.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use tower::ServiceExt;

use wedding_api::api::{cors_layer, create_router, AppState};
use wedding_api::domain::{Gift, NewGift, NewUser, PasswordHasher, Rsvp, User, UserId};
use wedding_api::errors::{AppError, AppResult};
use wedding_api::infra::{Database, GiftRepository, GuestRepository, UserRepository};
use wedding_api::services::{Authenticator, GiftManager, GuestManager, Services, TokenIssuer};

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> AppResult<UserId> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == user.email) {
            return Err(AppError::Database(DbErr::Custom(format!(
                "Duplicate entry '{}' for key 'email'",
                user.email
            ))));
        }

        let id = rows.len() as UserId + 1;
        rows.push(User {
            id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        });
        Ok(id)
    }
}

#[derive(Default)]
struct InMemoryGuests {
    rows: Mutex<Vec<Rsvp>>,
}

#[async_trait]
impl GuestRepository for InMemoryGuests {
    async fn create(&self, rsvp: Rsvp) -> AppResult<i32> {
        let mut rows = self.rows.lock().unwrap();
        rows.push(rsvp);
        Ok(rows.len() as i32)
    }
}

#[derive(Default)]
struct InMemoryGifts {
    rows: Mutex<Vec<Gift>>,
}

#[async_trait]
impl GiftRepository for InMemoryGifts {
    async fn create(&self, gift: NewGift) -> AppResult<i32> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(Gift {
            id,
            name: gift.name,
            image: gift.image,
            link: gift.link,
        });
        Ok(id)
    }

    async fn list(&self) -> AppResult<Vec<Gift>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

struct TestApp {
    router: Router,
    state: AppState,
    guests: Arc<InMemoryGuests>,
}

fn test_app() -> TestApp {
    let guests = Arc::new(InMemoryGuests::default());

    let auth = Authenticator::new(
        Arc::new(InMemoryUsers::default()),
        PasswordHasher::new(4),
        TokenIssuer::new(b"test-secret-key-for-testing-only", 3600),
    )
    .unwrap();

    let services = Services::new(
        Arc::new(auth),
        Arc::new(GuestManager::new(guests.clone())),
        Arc::new(GiftManager::new(Arc::new(InMemoryGifts::default()))),
    );

    let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));
    let state = AppState::new(services, database);

    TestApp {
        router: create_router(state.clone()),
        state,
        guests,
    }
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn register(router: &Router, body: Value) -> (StatusCode, Value) {
    send(router, json_request(Method::POST, "/register", body)).await
}

async fn login(router: &Router, body: Value) -> (StatusCode, Value) {
    send(router, json_request(Method::POST, "/login", body)).await
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_register_then_login() {
    let app = test_app();

    let (status, body) = register(
        &app.router,
        json!({ "nome": "Ana", "email": "ana@x.com", "senha": " secret1 " }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mensagem"], "Usuário cadastrado com sucesso!");
    assert!(body["usuarioId"].is_i64());

    let (status, body) = login(
        &app.router,
        json!({ "email": "ana@x.com", "senha": "secret1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensagem"], "Login bem-sucedido");
    assert_eq!(body["user"]["email"], "ana@x.com");
    assert_eq!(body["user"]["nome"], "Ana");
    assert!(body["user"].get("senha").is_none());
    assert!(!body.to_string().contains("$2b$"));

    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());

    let claims = app.state.auth_service.verify_token(token).unwrap();
    assert_eq!(claims.email, "ana@x.com");
    assert_eq!(Value::from(claims.id), body["user"]["id"]);
}

#[tokio::test]
async fn test_login_with_padded_password() {
    let app = test_app();

    register(
        &app.router,
        json!({ "nome": "Ana", "email": "ana@x.com", "senha": "secret1" }),
    )
    .await;

    let (status, _) = login(
        &app.router,
        json!({ "email": "ana@x.com", "senha": "  secret1\n" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_unknown_email_is_generic_401() {
    let app = test_app();

    let (status, body) = login(
        &app.router,
        json!({ "email": "ghost@x.com", "senha": "whatever" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "mensagem": "Email ou senha inválidos" }));
}

#[tokio::test]
async fn test_wrong_password_matches_unknown_email_response() {
    let app = test_app();

    register(
        &app.router,
        json!({ "nome": "Ana", "email": "ana@x.com", "senha": "secret1" }),
    )
    .await;

    let wrong = login(
        &app.router,
        json!({ "email": "ana@x.com", "senha": "secret2" }),
    )
    .await;
    let unknown = login(
        &app.router,
        json!({ "email": "ghost@x.com", "senha": "secret2" }),
    )
    .await;

    assert_eq!(wrong.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, unknown);
}

#[tokio::test]
async fn test_login_unreadable_fields_are_generic_401() {
    let app = test_app();

    for body in [
        json!({ "email": null, "senha": "x" }),
        json!({ "email": "ana@x.com", "senha": 123 }),
        json!({ "email": ["ana@x.com"], "senha": "x" }),
        json!({}),
    ] {
        let (status, response) = login(&app.router, body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(response, json!({ "mensagem": "Email ou senha inválidos" }));
    }
}

#[tokio::test]
async fn test_login_malformed_json_is_generic_401() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "mensagem": "Email ou senha inválidos" }));
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = test_app();

    for body in [
        json!({ "email": "ana@x.com", "senha": "secret1" }),
        json!({ "nome": "Ana", "senha": "secret1" }),
        json!({ "nome": "Ana", "email": "ana@x.com" }),
        json!({ "nome": "Ana", "email": "ana@x.com", "senha": "   " }),
        json!({ "nome": "Ana", "email": "ana@x.com", "senha": null }),
        json!({ "nome": null, "email": "ana@x.com", "senha": "secret1" }),
        json!({ "nome": "Ana", "email": null, "senha": "secret1" }),
        json!({}),
    ] {
        let (status, response) = register(&app.router, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["mensagem"], "Nome, email e senha são obrigatórios.");
    }
}

#[tokio::test]
async fn test_register_duplicate_email_is_generic_500() {
    let app = test_app();
    let body = json!({ "nome": "Ana", "email": "ana@x.com", "senha": "secret1" });

    let (first, _) = register(&app.router, body.clone()).await;
    assert_eq!(first, StatusCode::CREATED);

    let (status, response) = register(&app.router, body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response, json!({ "mensagem": "Erro interno do servidor" }));
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["mensagem"].is_string());
}

// =============================================================================
// Guests and gifts
// =============================================================================

#[tokio::test]
async fn test_confirm_presence() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/confirmar-presenca",
            json!({
                "nome": "Bia",
                "levarAcompanhante": true,
                "acompanhantes": [{ "nome": "Caio" }],
                "temRestricao": false,
                "restricao": ""
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensagem"], "Confirmação de presença salva com sucesso!");
    assert_eq!(body["id"], 1);

    let saved = app.guests.rows.lock().unwrap()[0].clone();
    assert!(saved.bringing_companion);
    assert_eq!(saved.companions, Some(json!([{ "nome": "Caio" }])));
    assert_eq!(saved.restriction, None);
}

#[tokio::test]
async fn test_confirm_presence_requires_name() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(Method::POST, "/confirmar-presenca", json!({ "levarAcompanhante": false })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "O nome é obrigatório.");

    let (status, body) = send(
        &app.router,
        json_request(Method::POST, "/confirmar-presenca", json!({ "nome": null })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "mensagem": "O nome é obrigatório." }));
}

#[tokio::test]
async fn test_create_and_list_gifts() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        json_request(
            Method::POST,
            "/presentes",
            json!({
                "nomePresente": "Jogo de panelas",
                "imagemPresente": "https://example.com/panelas.jpg",
                "linkPresente": "https://loja.example.com/panelas"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mensagem"], "Presente cadastrado com sucesso!");
    assert_eq!(body["id"], 1);

    let request = Request::builder()
        .uri("/presentes")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "nomePresente": "Jogo de panelas",
            "imagemPresente": "https://example.com/panelas.jpg",
            "linkPresente": "https://loja.example.com/panelas"
        }])
    );
}

#[tokio::test]
async fn test_create_gift_requires_name_and_link() {
    let app = test_app();

    for gift in [
        json!({ "nomePresente": "Cafeteira" }),
        json!({ "nomePresente": "Cafeteira", "linkPresente": null }),
        json!({ "nomePresente": null, "linkPresente": "https://loja.example.com/cafeteira" }),
    ] {
        let (status, body) = send(
            &app.router,
            json_request(Method::POST, "/presentes", gift),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "mensagem": "Nome e link são obrigatórios." }));
    }
}

// =============================================================================
// Cross-cutting
// =============================================================================

#[tokio::test]
async fn test_cors_preflight_allows_frontend_origin() {
    let app = test_app();
    let router = app
        .router
        .clone()
        .layer(cors_layer("http://localhost:5173").unwrap());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/login")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let app = test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "unhealthy");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app();

    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    for path in ["/register", "/login", "/confirmar-presenca", "/presentes"] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }
}
