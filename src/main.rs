//! # Roll Server - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, instala el subscriber de logs y arranca el
//! servidor.

use roll_server::config::Config;
use roll_server::server::Server;
use tracing_subscriber::FmtSubscriber;

fn main() {
    println!("=================================");
    println!("  Roll Server HTTP/1.0");
    println!("=================================\n");

    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(2);
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("⚠️  No se pudo instalar el logger: {}", e);
    }

    config.print_summary();

    let mut server = match Server::new(config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("💥 Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        tracing::error!("server stopped: {}", e);
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
