//! Infrastructure layer

pub mod email;
pub mod http;
