//! Request/response DTOs and validation for the Warren API.

pub mod request;
pub mod response;
pub mod validation;

pub use request::*;
pub use response::*;
pub use validation::*;
