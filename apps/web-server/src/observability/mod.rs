//! Observability - request IDs on every span.

mod request_id;

pub use request_id::RequestIdMiddleware;
