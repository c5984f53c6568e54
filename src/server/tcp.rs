//! # Servidor TCP
//! src/server/tcp.rs
//!
//! El listener acepta una conexión, la atiende completa y vuelve a aceptar.
//! En modo `threaded` cada conexión se atiende en su propio thread.
//!
//! El listener y el generador de números aleatorios son parte del
//! `Server`; el handler los recibe explícitamente.

use super::connection::{handle_connection, ConnectionContext, Outcome};
use crate::config::{Config, ServeMode};
use crate::error::{Result, ServerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Servidor HTTP/1.0 de una sola request line
pub struct Server {
    config: Config,
    context: ConnectionContext,
    rng: StdRng,
    listener: Option<TcpListener>,
}

impl Server {
    /// Construye el servidor; falla si el patrón de descarte no es una regex válida
    pub fn new(config: Config) -> Result<Self> {
        let context = ConnectionContext {
            page: config.page,
            skip: Regex::new(&config.skip_pattern)?,
            max_line_bytes: config.max_line_bytes,
            max_rolls: config.max_rolls,
        };

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            context,
            rng,
            listener: None,
        })
    }

    /// Hace bind del listener y retorna la dirección local
    ///
    /// Con puerto 0 el sistema operativo asigna uno libre.
    pub fn bind(&mut self) -> Result<SocketAddr> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address).map_err(|source| ServerError::Bind {
            addr: address.clone(),
            source,
        })?;
        let local = listener.local_addr()?;

        info!("listening on {} (requested {})", local, address);
        self.listener = Some(listener);
        Ok(local)
    }

    /// Dirección local si ya se hizo bind
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Acepta conexiones para siempre
    ///
    /// Hace bind si todavía no se hizo. Los errores de una conexión se
    /// registran y el loop sigue con la siguiente.
    pub fn run(&mut self) -> Result<()> {
        if self.listener.is_none() {
            self.bind()?;
        }
        let Some(listener) = self.listener.as_ref() else {
            return Ok(());
        };

        info!(page = %self.context.page, mode = ?self.config.mode, "serving");

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(e) = stream.set_read_timeout(self.config.read_timeout()) {
                        warn!("could not set read timeout: {}", e);
                    }

                    match self.config.mode {
                        ServeMode::Sequential => {
                            serve_stream(stream, &self.context, &mut self.rng);
                        }
                        ServeMode::Threaded => {
                            let context = self.context.clone();
                            let mut rng = StdRng::seed_from_u64(self.rng.gen());
                            thread::spawn(move || serve_stream(stream, &context, &mut rng));
                        }
                    }
                }
                Err(e) => {
                    error!("failed to accept connection: {}", e);
                }
            }
        }

        Ok(())
    }
}

/// Atiende un `TcpStream` y registra el resultado
///
/// El stream se cierra al retornar, haya o no respuesta.
pub fn serve_stream<R: Rng>(stream: TcpStream, context: &ConnectionContext, rng: &mut R) {
    let start = Instant::now();
    let peer = stream
        .peer_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    debug!(%peer, "accepted connection");

    match handle_connection(&stream, context, rng) {
        Ok(Outcome::Served { path, bytes }) => {
            info!(
                %peer,
                %path,
                bytes,
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "served"
            );
        }
        Ok(Outcome::Dropped(reason)) => {
            debug!(%peer, ?reason, "dropped without response");
        }
        Err(e) => {
            warn!(%peer, "connection failed: {}", e);
        }
    }
}
