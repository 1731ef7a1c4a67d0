use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use serde_json::{json, Value};
use service::cliente::repository::mock::InMemoryClienteRepository;
use tower::ServiceExt;
use uuid::Uuid;

use server::routes;
use server::state::ServerState;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

/// App over a migrated in-memory SQLite database.
async fn build_app() -> anyhow::Result<Router> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(routes::build_router(ServerState::from_db(db), cors()))
}

fn daniel() -> Value {
    json!({
        "nome": "Daniel Kiffer",
        "email": "daniel@email.com",
        "telefone": "12345678",
        "endereco": {"rua": "Rua X", "numero": "99", "cidade": "Cidade Y", "estado": "Estado Z", "cep": "00000-000"}
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?)
}

fn empty_request(method: &str, uri: &str) -> anyhow::Result<Request<Body>> {
    Ok(Request::builder().method(method).uri(uri).body(Body::empty())?)
}

async fn body_json(resp: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn create(app: &Router, body: &Value) -> anyhow::Result<Value> {
    let resp = app.clone().oneshot(json_request("POST", "/api/v1/clientes", body)?).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

#[tokio::test]
async fn create_then_duplicate_is_conflict() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = app.clone().oneshot(json_request("POST", "/api/v1/clientes", &daniel())?).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()).map(str::to_string);
    let body = body_json(resp).await?;
    assert_eq!(body["email"], "daniel@email.com");
    let id = body["id"].as_str().expect("id in body");
    assert_eq!(location.as_deref(), Some(format!("/api/v1/clientes/{id}").as_str()));

    let resp = app.clone().oneshot(json_request("POST", "/api/v1/clientes", &daniel())?).await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await?;
    assert_eq!(body["mensagem"], "Email já cadastrado.");
    Ok(())
}

#[tokio::test]
async fn location_header_resolves_to_created_cliente() -> anyhow::Result<()> {
    let app = build_app().await?;
    let resp = app.clone().oneshot(json_request("POST", "/api/v1/clientes", &daniel())?).await?;
    let location = resp.headers()[header::LOCATION].to_str()?.to_string();

    let resp = app.clone().oneshot(empty_request("GET", &location)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert_eq!(body["nome"], "Daniel Kiffer");
    assert_eq!(body["endereco"]["cidade"], "Cidade Y");
    Ok(())
}

#[tokio::test]
async fn list_returns_created_clientes() -> anyhow::Result<()> {
    let app = build_app().await?;
    let resp = app.clone().oneshot(empty_request("GET", "/api/v1/clientes")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?, json!([]));

    create(&app, &daniel()).await?;
    let mut other = daniel();
    other["email"] = json!("outro@email.com");
    create(&app, &other).await?;

    let resp = app.clone().oneshot(empty_request("GET", "/api/v1/clientes")?).await?;
    let body = body_json(resp).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn get_missing_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let uri = format!("/api/v1/clientes/{}", Uuid::new_v4());
    let resp = app.clone().oneshot(empty_request("GET", &uri)?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn non_uuid_id_is_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;
    for (method, body) in [("GET", None), ("PUT", Some(daniel())), ("DELETE", None)] {
        let req = match &body {
            Some(b) => json_request(method, "/api/v1/clientes/abc", b)?,
            None => empty_request(method, "/api/v1/clientes/abc")?,
        };
        let resp = app.clone().oneshot(req).await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method}");
        let err = body_json(resp).await?;
        assert_eq!(err["error"], "Bad Request");
        assert!(err["mensagem"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn unsupported_content_type_keeps_its_status() -> anyhow::Result<()> {
    let app = build_app().await?;
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/clientes")
        .header("content-type", "text/plain")
        .body(Body::from(serde_json::to_vec(&daniel())?))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(body_json(resp).await?["mensagem"].is_string());
    Ok(())
}

#[tokio::test]
async fn malformed_create_bodies_are_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;

    let mut bad_email = daniel();
    bad_email["email"] = json!("not-an-email");
    let mut no_endereco = daniel();
    no_endereco.as_object_mut().unwrap().remove("endereco");
    let mut blank_cep = daniel();
    blank_cep["endereco"]["cep"] = json!("");
    let mut no_nome = daniel();
    no_nome.as_object_mut().unwrap().remove("nome");

    for body in [bad_email, no_endereco, blank_cep, no_nome] {
        let resp = app.clone().oneshot(json_request("POST", "/api/v1/clientes", &body)?).await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/clientes")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.clone().oneshot(empty_request("GET", "/api/v1/clientes")?).await?;
    assert_eq!(body_json(resp).await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn long_free_text_fields_are_stored_verbatim() -> anyhow::Result<()> {
    let app = build_app().await?;
    let mut body = daniel();
    body["telefone"] = json!("+55 (21) 99999-9999 ramal 1234 / recado 5678");
    body["endereco"]["rua"] = json!("Avenida ".repeat(40));
    let created = create(&app, &body).await?;

    let uri = format!("/api/v1/clientes/{}", created["id"].as_str().unwrap_or_default());
    let fetched = body_json(app.clone().oneshot(empty_request("GET", &uri)?).await?).await?;
    assert_eq!(fetched["telefone"], body["telefone"]);
    assert_eq!(fetched["endereco"]["rua"], body["endereco"]["rua"]);
    Ok(())
}

#[tokio::test]
async fn whitespace_only_field_is_rejected_by_service_rules() -> anyhow::Result<()> {
    let app = build_app().await?;
    let mut body = daniel();
    body["endereco"]["rua"] = json!("   ");
    let resp = app.clone().oneshot(json_request("POST", "/api/v1/clientes", &body)?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await?["mensagem"], "Dados inválidos.");
    Ok(())
}

#[tokio::test]
async fn update_replaces_fields_and_returns_no_content() -> anyhow::Result<()> {
    let app = build_app().await?;
    let created = create(&app, &daniel()).await?;
    let id = created["id"].as_str().expect("id").to_string();
    let uri = format!("/api/v1/clientes/{id}");

    let update = json!({
        "id": Uuid::new_v4(),
        "nome": "Daniel K.",
        "email": "daniel.k@email.com",
        "telefone": null,
        "endereco": {"rua": "Rua W", "numero": "7", "cidade": "Cidade Y", "estado": "Estado Z", "cep": "11111-111"}
    });
    let resp = app.clone().oneshot(json_request("PUT", &uri, &update)?).await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.clone().oneshot(empty_request("GET", &uri)?).await?;
    let body = body_json(resp).await?;
    let mut expected = update.clone();
    expected["id"] = json!(id);
    assert_eq!(body, expected);
    Ok(())
}

#[tokio::test]
async fn update_missing_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let uri = format!("/api/v1/clientes/{}", Uuid::new_v4());
    let resp = app.clone().oneshot(json_request("PUT", &uri, &daniel())?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_malformed_is_bad_request() -> anyhow::Result<()> {
    let app = build_app().await?;
    let created = create(&app, &daniel()).await?;
    let uri = format!("/api/v1/clientes/{}", created["id"].as_str().expect("id"));

    let mut body = daniel();
    body["email"] = json!("nope");
    let resp = app.clone().oneshot(json_request("PUT", &uri, &body)?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

// The service does not re-check uniqueness on update; the unique index does.
#[tokio::test]
async fn update_to_taken_email_is_conflict() -> anyhow::Result<()> {
    let app = build_app().await?;
    create(&app, &daniel()).await?;
    let mut other = daniel();
    other["email"] = json!("outro@email.com");
    let second = create(&app, &other).await?;

    let uri = format!("/api/v1/clientes/{}", second["id"].as_str().expect("id"));
    let resp = app.clone().oneshot(json_request("PUT", &uri, &daniel())?).await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn delete_then_get_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let created = create(&app, &daniel()).await?;
    let uri = format!("/api/v1/clientes/{}", created["id"].as_str().expect("id"));

    let resp = app.clone().oneshot(empty_request("DELETE", &uri)?).await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = app.clone().oneshot(empty_request("GET", &uri)?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = app.clone().oneshot(empty_request("DELETE", &uri)?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn version_alias_serves_same_api() -> anyhow::Result<()> {
    let app = build_app().await?;
    let created = create(&app, &daniel()).await?;
    let uri = format!("/api/v1.0/clientes/{}", created["id"].as_str().expect("id"));
    let resp = app.clone().oneshot(empty_request("GET", &uri)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn storage_failure_is_internal_error() -> anyhow::Result<()> {
    let repo = Arc::new(InMemoryClienteRepository::default());
    let app = routes::build_router(ServerState::new(repo.clone()), cors());
    repo.set_unavailable(true);

    let resp = app.clone().oneshot(empty_request("GET", "/api/v1/clientes")?).await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let resp = app.clone().oneshot(json_request("POST", "/api/v1/clientes", &daniel())?).await?;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await?;
    assert_eq!(body["mensagem"], "Erro interno.");
    assert!(!body.to_string().contains("unavailable"), "{body}");
    Ok(())
}

#[tokio::test]
async fn health_and_openapi_are_public() -> anyhow::Result<()> {
    let app = build_app().await?;
    let resp = app.clone().oneshot(empty_request("GET", "/health")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?["status"], "ok");

    let resp = app.clone().oneshot(empty_request("GET", "/api-docs/openapi.json")?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await?;
    assert!(doc["paths"].get("/api/v1/clientes").is_some());
    Ok(())
}
