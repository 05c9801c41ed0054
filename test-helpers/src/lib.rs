pub mod stub;

use actix_web::web;
use payloads::{APIClient, AuthEndpoint, AuthOutcome, ClientError, Credentials};
use std::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

pub use stub::{RecordedRequest, StubBackend, StubReply};

pub struct TestApp {
    pub client: APIClient,
    pub backend: web::Data<StubBackend>,
}

impl TestApp {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.backend.requests()
    }

    /// Make every following call to `endpoint` answer with `reply`.
    pub fn respond_with(&self, endpoint: AuthEndpoint, reply: StubReply) {
        self.backend.set_reply(endpoint, reply);
    }

    pub async fn create_alice_user(&self) -> anyhow::Result<String> {
        match self.client.signup(&alice_signup()).await? {
            AuthOutcome::Authenticated { token } => Ok(token),
            AuthOutcome::Rejected { errors } => {
                anyhow::bail!("signup refused: {errors}")
            }
        }
    }
}

/// Route logs (including `log` records, via the builder's log bridge)
/// through the test harness's captured output. `RUST_LOG` overrides the
/// default of errors only. Repeated calls are harmless.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_test_writer()
        .compact()
        .try_init();
}

/// Start a stub backend on an OS-assigned port so tests can run in parallel.
pub async fn spawn_app() -> TestApp {
    init_test_logging();

    let backend = web::Data::new(StubBackend::default());
    let (server, port) = stub::build(backend.clone()).unwrap();
    tokio::spawn(server);
    tracing::info!(port, "stub auth backend listening");

    TestApp {
        client: APIClient::new(format!("http://127.0.0.1:{port}")),
        backend,
    }
}

/// A client pointed at a port nothing is listening on.
pub fn unreachable_client() -> APIClient {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap()
        .port();
    APIClient::new(format!("http://127.0.0.1:{port}"))
}

pub fn alice_signup() -> Credentials {
    Credentials {
        username: Some("alice".into()),
        email: "alice@example.com".into(),
        password: "supersecret".into(),
    }
}

pub fn alice_login() -> Credentials {
    Credentials {
        username: None,
        email: "alice@example.com".into(),
        password: "supersecret".into(),
    }
}

/// Assert that an authentication attempt was refused with `expected`.
pub fn assert_rejected(
    result: Result<AuthOutcome, ClientError>,
    expected: &str,
) {
    match result {
        Ok(AuthOutcome::Rejected { errors }) => assert_eq!(errors, expected),
        other => panic!("Expected rejection, got {other:?}"),
    }
}
