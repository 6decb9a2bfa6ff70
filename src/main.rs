mod config;
mod db;
mod handlers;
mod models;
mod repository;
mod routes;
mod services;
mod state;

use std::{net::SocketAddr, process::ExitCode};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tower_http::cors::{Any, CorsLayer};

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuración inválida: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let pool = match db::init_db(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Error al conectar a la Base de Datos: {:?}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(max_connections = config.max_connections, "✅ Conexión a Postgres exitosa");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_routes(AppState::new(pool)).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Servidor Trokazz corriendo en http://{}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Fallo al enlazar el puerto {}: {:?}", config.port, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("El servidor terminó con error: {:?}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
