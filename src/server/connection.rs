//! # Ciclo de una Conexión
//! src/server/connection.rs
//!
//! Cada conexión pasa por:
//!
//! ```text
//! leer request line → filtrar → parsear → renderizar → escribir → cerrar
//! ```
//!
//! Solo se lee la primera línea. Si está vacía, no se puede leer o coincide
//! con el patrón de descarte (favicon), la conexión se cierra sin escribir
//! nada. El stream se consume y se cierra al salir en todos los casos.

use crate::error::Result;
use crate::http::{RequestLine, Response};
use crate::pages::Page;
use rand::Rng;
use regex::Regex;
use std::io::{BufRead, BufReader, Read, Write};
use tracing::{debug, info};

/// Lo que necesita el handler para atender una conexión
#[derive(Debug, Clone)]
pub struct ConnectionContext {
    pub page: Page,
    pub skip: Regex,
    pub max_line_bytes: usize,
    pub max_rolls: u64,
}

/// Motivo por el que una conexión se cerró sin responder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// EOF antes de recibir datos o línea en blanco
    Empty,

    /// Bytes que no son UTF-8 o error/timeout de lectura
    Unreadable,

    /// La línea coincide con el patrón de descarte
    Filtered,
}

/// Resultado de atender una conexión
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Se escribió una respuesta de `bytes` bytes
    Served { path: String, bytes: usize },

    /// Se cerró sin escribir nada
    Dropped(DropReason),
}

/// Atiende una conexión completa
///
/// Los errores de lectura se tratan como línea ilegible y cierran la
/// conexión sin respuesta; los errores al escribir se propagan.
pub fn handle_connection<S, R>(stream: S, ctx: &ConnectionContext, rng: &mut R) -> Result<Outcome>
where
    S: Read + Write,
    R: Rng,
{
    let mut reader = BufReader::new(stream);

    let line = match read_request_line(&mut reader, ctx.max_line_bytes) {
        Ok(Some(line)) => line,
        Ok(None) => {
            debug!("empty request line, closing");
            return Ok(Outcome::Dropped(DropReason::Empty));
        }
        Err(e) => {
            debug!(error = %e, "unreadable request line, closing");
            return Ok(Outcome::Dropped(DropReason::Unreadable));
        }
    };

    if ctx.skip.is_match(&line) {
        debug!(line = line.trim_end(), "request line filtered, closing");
        return Ok(Outcome::Dropped(DropReason::Filtered));
    }

    info!("{}", line.trim_end());

    let request = RequestLine::parse(&line);
    debug!(
        request = %serde_json::to_string(&request).unwrap_or_default(),
        "parsed request line"
    );

    let body = ctx.page.render(&request, rng, ctx.max_rolls);
    let response = Response::html(&body);

    let bytes = response.write_to(reader.get_mut())?;

    Ok(Outcome::Served {
        path: request.path().to_string(),
        bytes,
    })
}

/// Lee una sola línea, como máximo `limit` bytes
///
/// Retorna `None` si no llegó nada o la línea está en blanco.
fn read_request_line<B: BufRead>(reader: &mut B, limit: usize) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    let limit = u64::try_from(limit).unwrap_or(u64::MAX);

    let read = reader.by_ref().take(limit).read_line(&mut line)?;
    if read == 0 || line.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(line))
}
