//! # Errores del Servidor
//! src/error.rs

use thiserror::Error;

/// Errores que pueden ocurrir al levantar el servidor o atender una conexión
#[derive(Debug, Error)]
pub enum ServerError {
    /// No se pudo hacer bind del listener
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Error de I/O sobre una conexión o el listener
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// El patrón de líneas ignoradas no es una regex válida
    #[error("invalid skip pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
