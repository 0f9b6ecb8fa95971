// The infra module contains implementations of core traits.
// - `http/` sends API requests with reqwest.
// - `surface/` provides the pages toasts and job rows are rendered onto.

#[path = "http/mod.rs"]
pub mod http;

#[path = "surface/mod.rs"]
pub mod surface;
