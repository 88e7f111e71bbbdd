//! HTTP layer for the presigned URL signer.
//!
//! This crate exposes the [`presign_core::Signer`] contract behind a small
//! JSON-over-HTTP surface:
//!
//! - **Routing** ([`router`]): `POST /presign/upload`, `POST /presign/read`,
//!   and a `GET /health` probe.
//!
//! - **Responses** ([`response`]): JSON success and `{"error": ...}` bodies,
//!   permissive CORS on every response, preflight handling.
//!
//! - **Service** ([`service`]): the [`PresignHttpService`](service::PresignHttpService)
//!   hyper `Service` tying routing, body collection, JSON decoding, signing,
//!   and error mapping together.
//!
//! - **Body** ([`body`]): the [`JsonBody`](body::JsonBody) response body type.
//!
//! # Architecture
//!
//! ```text
//! HTTP Request
//!   -> PresignHttpService (hyper Service)
//!     -> Health check / CORS preflight interception
//!     -> Operation routing
//!     -> Body collection + JSON decode
//!     -> Signer::presign (pure, clock injected as Utc::now())
//!     -> Error mapping (InvalidInput -> 400, MissingConfig -> 500)
//!     -> Common response headers (x-request-id, CORS)
//!   <- HTTP Response
//! ```

pub mod body;
pub mod response;
pub mod router;
pub mod service;

pub use body::JsonBody;
pub use router::Operation;
pub use service::{PresignHttpConfig, PresignHttpService};
