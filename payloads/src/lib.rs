mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::*;
pub use requests::Credentials;
pub use responses::{AuthOutcome, AuthResponse};
