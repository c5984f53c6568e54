//! # Módulo HTTP
//!
//! Implementa la mínima porción de HTTP/1.0 que necesita el servidor:
//!
//! - Parsing de la request line (sin headers ni body)
//! - Separación de query parameters, sin URL decoding
//! - Construcción de la response (status line, un header, body HTML)
//!
//! ### Formato consumido
//!
//! ```text
//! GET /?rolls=3&sides=6 HTTP/1.1\r\n
//! ```
//!
//! ### Formato producido
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <html>...
//! ```

pub mod query;     // Query string y coerción a enteros
pub mod request;   // Parsing de la request line
pub mod response;  // Construcción de la response

pub use query::leading_int;
pub use request::RequestLine;
pub use response::Response;
