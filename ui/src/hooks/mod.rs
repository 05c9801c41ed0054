pub mod use_logout;
pub mod use_session;

pub use use_logout::use_logout;
pub use use_session::use_session;
