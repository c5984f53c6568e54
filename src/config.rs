//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración por argumentos CLI con fallback a variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./roll_server --port 3003 --page counter --mode threaded
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=3003 HTTP_HOST=0.0.0.0 PAGE=dice ./roll_server
//! ```

use crate::pages::Page;
use clap::{Parser, ValueEnum};
use regex::Regex;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// Cómo se atienden las conexiones aceptadas
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServeMode {
    /// Una conexión a la vez en el thread del listener
    Sequential,

    /// Un thread por conexión
    Threaded,
}

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "roll_server")]
#[command(about = "Servidor HTTP/1.0 mínimo sobre TCP: lanzador de dados y contador")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "3003", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "localhost", env = "HTTP_HOST")]
    pub host: String,

    /// Página que se sirve
    #[arg(long, value_enum, default_value = "dice", env = "PAGE")]
    pub page: Page,

    /// Secuencial (una conexión a la vez) o un thread por conexión
    #[arg(long, value_enum, default_value = "sequential", env = "SERVE_MODE")]
    pub mode: ServeMode,

    /// Timeout de lectura de la request line en milisegundos (0 = sin timeout)
    #[arg(long = "read-timeout-ms", default_value = "0", env = "READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,

    /// Máximo de bytes leídos de la request line
    #[arg(long = "max-line-bytes", default_value = "8192", env = "MAX_LINE_BYTES")]
    pub max_line_bytes: usize,

    /// Regex de request lines que se descartan sin responder
    #[arg(long = "skip-pattern", default_value = "favicon", env = "SKIP_PATTERN")]
    pub skip_pattern: String,

    /// Máximo de dados por request
    #[arg(long = "max-rolls", default_value = "10000", env = "MAX_ROLLS")]
    pub max_rolls: u64,

    /// Semilla fija para el generador de números aleatorios
    #[arg(long, env = "ROLL_SEED")]
    pub seed: Option<u64>,

    /// Nivel de log (trace, debug, info, warn, error)
    #[arg(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use roll_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "localhost:3003");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Timeout de lectura, `None` si está deshabilitado
    pub fn read_timeout(&self) -> Option<Duration> {
        match self.read_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Nivel de log parseado; `info` si no es válido
    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.max_line_bytes == 0 {
            return Err("Max line bytes must be >= 1".to_string());
        }

        if self.max_rolls == 0 {
            return Err("Max rolls must be >= 1".to_string());
        }

        if let Err(e) = Regex::new(&self.skip_pattern) {
            return Err(format!("Skip pattern is not a valid regex: {}", e));
        }

        if Level::from_str(&self.log_level).is_err() {
            return Err(format!("Unknown log level: {}", self.log_level));
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║              Roll Server HTTP/1.0 Configuration              ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!("   Mode:         {:?}", self.mode);
        match self.read_timeout() {
            Some(timeout) => println!("   Read timeout: {} ms", timeout.as_millis()),
            None => println!("   Read timeout: disabled"),
        }
        println!("   Max line:     {} bytes", self.max_line_bytes);
        println!();
        println!("🎲 Page:");
        println!("   Variant:      {}", self.page);
        println!("   Skip pattern: /{}/", self.skip_pattern);
        println!("   Max rolls:    {}", self.max_rolls);
        match self.seed {
            Some(seed) => println!("   Seed:         {}", seed),
            None => println!("   Seed:         entropy"),
        }
        println!();
        println!("═══════════════════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: 3003,
            host: "localhost".to_string(),
            page: Page::Dice,
            mode: ServeMode::Sequential,
            read_timeout_ms: 0,
            max_line_bytes: 8192,
            skip_pattern: "favicon".to_string(),
            max_rolls: 10_000,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}
