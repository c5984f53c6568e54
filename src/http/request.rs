//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! El servidor solo consume la primera línea del request:
//!
//! ```text
//! METHOD /path?param1=value1&param2=value2 HTTP/VERSION\r\n
//! ```
//!
//! Headers y body nunca se leen. El parsing nunca falla: los tokens que
//! faltan quedan como strings vacíos y el método y la versión no se validan.

use super::query::parse_query_string;
use serde::Serialize;
use std::collections::HashMap;

/// Request line parseada
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestLine {
    /// Método HTTP tal cual llegó (ej: "GET")
    method: String,

    /// Path sin la query string (ej: "/")
    path: String,

    /// Query parameters (ej: {"rolls": "3", "sides": "6"})
    query_params: HashMap<String, String>,

    /// Versión HTTP tal cual llegó (ej: "HTTP/1.1"), vacía si falta
    version: String,
}

impl RequestLine {
    /// Parsea una request line
    ///
    /// Se divide por whitespace en tres tokens; los que faltan quedan vacíos
    /// y los que sobran se ignoran.
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use roll_server::http::RequestLine;
    ///
    /// let request = RequestLine::parse("GET /?rolls=3&sides=6 HTTP/1.1\r\n");
    ///
    /// assert_eq!(request.method(), "GET");
    /// assert_eq!(request.path(), "/");
    /// assert_eq!(request.query_param("rolls"), Some("3"));
    /// assert_eq!(request.version(), "HTTP/1.1");
    /// ```
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let method = tokens.next().unwrap_or_default();
        let target = tokens.next().unwrap_or_default();
        let version = tokens.next().unwrap_or_default();

        let (path, query_params) = Self::parse_path_and_query(target);

        RequestLine {
            method: method.to_string(),
            path,
            query_params,
            version: version.to_string(),
        }
    }

    /// Separa el path de los query parameters en el primer '?'
    ///
    /// Ejemplo: "/?rolls=3&sides=6"
    /// Retorna: ("/", {"rolls": "3", "sides": "6"})
    fn parse_path_and_query(target: &str) -> (String, HashMap<String, String>) {
        match target.split_once('?') {
            Some((path, query)) => (path.to_string(), parse_query_string(query)),
            None => (target.to_string(), HashMap::new()),
        }
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene el path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Obtiene todos los query parameters
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }

    /// Obtiene un query parameter específico
    ///
    /// # Ejemplo
    /// ```
    /// use roll_server::http::RequestLine;
    ///
    /// let request = RequestLine::parse("GET /?number=42&flag HTTP/1.0");
    ///
    /// assert_eq!(request.query_param("number"), Some("42"));
    /// assert_eq!(request.query_param("flag"), Some(""));
    /// assert_eq!(request.query_param("missing"), None);
    /// ```
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(|s| s.as_str())
    }

    /// Obtiene un query parameter solo si está presente y no vacío
    pub fn non_empty_param(&self, name: &str) -> Option<&str> {
        self.query_param(name).filter(|value| !value.is_empty())
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_query_params() {
        let request = RequestLine::parse("GET /path?k1=v1&k2=v2 HTTP/1.1");

        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "/path");
        assert_eq!(request.query_params().len(), 2);
        assert_eq!(request.query_param("k1"), Some("v1"));
        assert_eq!(request.query_param("k2"), Some("v2"));
        assert_eq!(request.version(), "HTTP/1.1");
    }

    #[test]
    fn test_parse_without_query() {
        let request = RequestLine::parse("GET /path HTTP/1.1");

        assert_eq!(request.path(), "/path");
        assert!(request.query_params().is_empty());
    }

    #[test]
    fn test_valueless_key() {
        // Política fija: key presente con valor vacío
        let request = RequestLine::parse("GET /p?flag HTTP/1.1");

        assert_eq!(request.path(), "/p");
        assert_eq!(request.query_param("flag"), Some(""));
        assert_eq!(request.non_empty_param("flag"), None);
    }

    #[test]
    fn test_trailing_crlf_is_ignored() {
        let request = RequestLine::parse("GET /?number=5 HTTP/1.1\r\n");

        assert_eq!(request.query_param("number"), Some("5"));
        assert_eq!(request.version(), "HTTP/1.1");
    }

    #[test]
    fn test_missing_version() {
        let request = RequestLine::parse("GET /only-path");

        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "/only-path");
        assert_eq!(request.version(), "");
    }

    #[test]
    fn test_method_only() {
        let request = RequestLine::parse("GET");

        assert_eq!(request.method(), "GET");
        assert_eq!(request.path(), "");
        assert!(request.query_params().is_empty());
        assert_eq!(request.version(), "");
    }

    #[test]
    fn test_blank_line() {
        let request = RequestLine::parse("   \r\n");

        assert_eq!(request.method(), "");
        assert_eq!(request.path(), "");
        assert_eq!(request.version(), "");
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let request = RequestLine::parse("GET / HTTP/1.1 trailing junk");

        assert_eq!(request.version(), "HTTP/1.1");
    }

    #[test]
    fn test_method_not_validated() {
        let request = RequestLine::parse("BREW /pot HTTP/9.9");

        assert_eq!(request.method(), "BREW");
        assert_eq!(request.version(), "HTTP/9.9");
    }

    #[test]
    fn test_split_on_first_question_mark() {
        let request = RequestLine::parse("GET /a?b=1?c HTTP/1.0");

        assert_eq!(request.path(), "/a");
        assert_eq!(request.query_param("b"), Some("1?c"));
    }

    #[test]
    fn test_empty_query_after_question_mark() {
        let request = RequestLine::parse("GET /a? HTTP/1.0");

        assert_eq!(request.path(), "/a");
        assert!(request.query_params().is_empty());
    }

    #[test]
    fn test_no_url_decoding() {
        let request = RequestLine::parse("GET /a%20b?text=hello%20world+x HTTP/1.0");

        assert_eq!(request.path(), "/a%20b");
        assert_eq!(request.query_param("text"), Some("hello%20world+x"));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let line = "GET /?rolls=3&sides=6&rolls=4 HTTP/1.1\r\n";
        assert_eq!(RequestLine::parse(line), RequestLine::parse(line));
    }
}
