//! # Página de Contador
//! src/pages/counter.rs
//!
//! `GET /?number=5` muestra "The current number is 5." y links a
//! `?number=6` y `?number=4`. Sin `number` (o no numérico) se parte de 0.

use super::write_diagnostics;
use crate::http::{leading_int, RequestLine};
use std::fmt::Write;

/// Genera el documento HTML del contador
pub fn render(request: &RequestLine) -> String {
    let number = request.query_param("number").map(leading_int).unwrap_or(0);

    let mut out = String::from("<html>\n<body>\n");
    write_diagnostics(&mut out, request);

    out.push_str("<h1>Counter</h1>\n");
    let _ = writeln!(out, "<p>The current number is {}.</p>", number);
    let _ = writeln!(out, "<a href='?number={}'>Add one</a>", number.saturating_add(1));
    let _ = writeln!(out, "<a href='?number={}'>Subtract one</a>", number.saturating_sub(1));

    out.push_str("</body>\n</html>\n");
    out
}
