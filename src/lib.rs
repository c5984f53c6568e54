//! # Roll Server
//! src/lib.rs
//!
//! Servidor HTTP/1.0 mínimo implementado directamente sobre TCP. Lee solo
//! la request line de cada conexión, la parsea y responde siempre con un
//! `200 OK` y una página HTML (lanzador de dados o contador).
//!
//! ## Arquitectura
//!
//! - `http`: Parsing de la request line, query params y construcción de la response
//! - `pages`: Cuerpos HTML de cada variante (`dice`, `counter`)
//! - `server`: Listener TCP y ciclo de cada conexión
//! - `config`: Configuración por CLI y variables de entorno
//! - `error`: Errores del servidor
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use roll_server::config::Config;
//! use roll_server::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config).expect("configuración inválida");
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod pages;
pub mod server;
