//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto
//! 2. Acepta conexiones entrantes
//! 3. Lee y parsea la request line
//! 4. Genera y envía la response HTML
//! 5. Cierra la conexión

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{handle_connection, ConnectionContext, DropReason, Outcome};
pub use tcp::Server;
