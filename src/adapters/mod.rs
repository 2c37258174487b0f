// Adapters layer: concrete implementations of the domain ports (http, randomness, documents).

pub mod document;
pub mod http;
pub mod random;
