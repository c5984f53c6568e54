//! # Páginas HTML
//! src/pages/mod.rs
//!
//! Cada variante del servidor genera un documento HTML a partir de la
//! request line parseada:
//!
//! - `dice`: lanza `rolls` dados de `sides` caras
//! - `counter`: muestra un número y links para sumar/restar uno
//!
//! Ambas empiezan con un bloque `<pre>` de diagnóstico con el método,
//! el path y los params recibidos.

pub mod counter;
pub mod dice;

use crate::http::RequestLine;
use clap::ValueEnum;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Variante de página que sirve el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Page {
    /// Lanzador de dados (`?rolls=N&sides=M`)
    Dice,

    /// Contador (`?number=N`)
    Counter,
}

impl Page {
    /// Genera el body HTML para el request
    ///
    /// `max_rolls` acota la cantidad de dados emitidos por la página `dice`.
    pub fn render<R: Rng>(&self, request: &RequestLine, rng: &mut R, max_rolls: u64) -> String {
        match self {
            Page::Dice => dice::render(request, rng, max_rolls),
            Page::Counter => counter::render(request),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dice => "dice",
            Page::Counter => "counter",
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escribe el bloque `<pre>` con método, path y params
///
/// Los params se muestran como objeto JSON con las keys ordenadas.
pub(crate) fn write_diagnostics(out: &mut String, request: &RequestLine) {
    let sorted: BTreeMap<&str, &str> = request
        .query_params()
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    let params = serde_json::to_string(&sorted).unwrap_or_default();

    let _ = writeln!(out, "<pre>");
    let _ = writeln!(out, "method: {}", escape_html(request.method()));
    let _ = writeln!(out, "path: {}", escape_html(request.path()));
    let _ = writeln!(out, "params: {}", escape_html(&params));
    let _ = writeln!(out, "</pre>");
}

/// Escapa los caracteres con significado en HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
