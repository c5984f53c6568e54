//! # Construcción de Respuestas HTTP
//!
//! El servidor solo produce un tipo de respuesta:
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: text/html\r\n
//! \r\n
//! <html>...
//! ```
//!
//! No hay otros códigos de estado: cualquier entrada, por malformada que
//! sea, se contesta con 200.

use std::io::Write;

/// Status line fija de todas las respuestas
pub const STATUS_LINE: &str = "HTTP/1.0 200 OK";

/// Respuesta HTTP/1.0 lista para escribir en el socket
#[derive(Debug, Clone)]
pub struct Response {
    /// Headers en orden de inserción
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta HTML con `Content-Type: text/html`
    ///
    /// # Ejemplo
    /// ```
    /// use roll_server::http::Response;
    ///
    /// let response = Response::html("<html></html>");
    /// let text = String::from_utf8(response.to_bytes()).unwrap();
    ///
    /// assert!(text.starts_with("HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n"));
    /// ```
    pub fn html(body: &str) -> Self {
        Self {
            headers: vec![("Content-Type".to_string(), "text/html".to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    /// Convierte la respuesta a bytes
    ///
    /// - Status line: `HTTP/1.0 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        result.extend_from_slice(STATUS_LINE.as_bytes());
        result.extend_from_slice(b"\r\n");

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Escribe la respuesta completa y hace flush; retorna los bytes escritos
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<usize> {
        let bytes = self.to_bytes();
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(bytes.len())
    }

    /// Obtiene los headers
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene el body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
