//! Grid session map: session registration unit.
//!
//! A [`RegistrationHandler`] owns `POST /se/grid/session`. Callers ask it
//! whether it owns a request ([`routing::Matcher`]) and then ask it to
//! execute ([`http::CommandHandler`]), which decodes the session, adds it
//! to a [`SessionRegistry`] and answers `{"value":true}`.
//!
//! ```text
//! request → RequestGate::matches → RegistrationHandler::execute
//!         → JsonCodec::decode_session → SessionRegistry::add
//!         → JsonCodec::encode_value(true) → response
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod sessionmap;

pub use config::SessionMapConfig;
pub use http::{CommandHandler, HttpServer, Routable};
pub use lifecycle::Shutdown;
pub use routing::{Matcher, RequestGate, UrlTemplate};
pub use sessionmap::{
    JsonCodec, RegistrationHandler, RegistryError, Session, SessionId, SessionMapError,
    SessionRegistry,
};
