//! An in-memory stand-in for the storefront authentication backend.

use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use payloads::{AuthEndpoint, AuthResponse, Credentials};
use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Mutex;
use uuid::Uuid;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const EMAIL_TAKEN: &str = "Existing user found with same email address";

/// A request body as received by the stub, kept as raw JSON so tests can
/// check which keys were actually sent.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub endpoint: AuthEndpoint,
    pub body: serde_json::Value,
}

/// A canned reply that replaces the stub's normal behaviour for an endpoint.
#[derive(Debug, Clone)]
pub enum StubReply {
    Json(StatusCode, serde_json::Value),
    Text(StatusCode, String),
}

#[derive(Debug, Clone)]
struct Account {
    username: Option<String>,
    password: String,
}

#[derive(Default)]
pub struct StubBackend {
    accounts: Mutex<HashMap<String, Account>>,
    overrides: Mutex<HashMap<AuthEndpoint, StubReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl StubBackend {
    pub fn set_reply(&self, endpoint: AuthEndpoint, reply: StubReply) {
        self.overrides.lock().unwrap().insert(endpoint, reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn username_of(&self, email: &str) -> Option<String> {
        self.accounts
            .lock()
            .unwrap()
            .get(email)
            .and_then(|a| a.username.clone())
    }

    fn handle(&self, endpoint: AuthEndpoint, body: web::Bytes) -> HttpResponse {
        let raw = serde_json::from_slice::<serde_json::Value>(&body)
            .unwrap_or(serde_json::Value::Null);
        self.requests.lock().unwrap().push(RecordedRequest {
            endpoint,
            body: raw.clone(),
        });

        if let Some(reply) = self.overrides.lock().unwrap().get(&endpoint) {
            return match reply {
                StubReply::Json(status, value) => {
                    HttpResponse::build(*status).json(value)
                }
                StubReply::Text(status, text) => {
                    HttpResponse::build(*status).body(text.clone())
                }
            };
        }

        let credentials = match serde_json::from_value::<Credentials>(raw) {
            Ok(credentials) => credentials,
            Err(e) => {
                return HttpResponse::BadRequest().body(e.to_string());
            }
        };

        let response = match endpoint {
            AuthEndpoint::Login => self.login(credentials),
            AuthEndpoint::Signup => self.signup(credentials),
        };
        HttpResponse::Ok().json(response)
    }

    fn login(&self, credentials: Credentials) -> AuthResponse {
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(&credentials.email) {
            Some(account) if account.password == credentials.password => {
                AuthResponse::authenticated(Uuid::new_v4().to_string())
            }
            _ => AuthResponse::rejected(INVALID_CREDENTIALS),
        }
    }

    fn signup(&self, credentials: Credentials) -> AuthResponse {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&credentials.email) {
            return AuthResponse::rejected(EMAIL_TAKEN);
        }
        accounts.insert(
            credentials.email,
            Account {
                username: credentials.username,
                password: credentials.password,
            },
        );
        AuthResponse::authenticated(Uuid::new_v4().to_string())
    }
}

async fn login(
    backend: web::Data<StubBackend>,
    body: web::Bytes,
) -> HttpResponse {
    backend.handle(AuthEndpoint::Login, body)
}

async fn signup(
    backend: web::Data<StubBackend>,
    body: web::Bytes,
) -> HttpResponse {
    backend.handle(AuthEndpoint::Signup, body)
}

/// Build the stub server on an OS-assigned port, but not await it.
pub fn build(
    backend: web::Data<StubBackend>,
) -> std::io::Result<(Server, u16)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(backend.clone())
            .route("/login", web::post().to(login))
            .route("/signup", web::post().to(signup))
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok((server, port))
}
