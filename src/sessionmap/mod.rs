//! Session map admission subsystem.
//!
//! # Data Flow
//! ```text
//! Request (POST /se/grid/session)
//!     → add.rs (RegistrationHandler: gate re-check)
//!     → codec.rs (UTF-8 body → Session, field validation)
//!     → registry.rs (SessionRegistry::add, external store)
//!     → codec.rs ({"value": true} envelope)
//! ```
//!
//! # Design Decisions
//! - Storage is an external collaborator behind `SessionRegistry`
//! - Typed failures only; HTTP formatting lives in `http::response`

pub mod add;
pub mod codec;
pub mod error;
pub mod registry;
pub mod session;

pub use add::{RegistrationHandler, SESSION_PATH};
pub use codec::JsonCodec;
pub use error::{SessionMapError, SessionMapResult};
pub use registry::{RegistryError, SessionRegistry};
pub use session::{InvalidSessionId, Session, SessionId};
