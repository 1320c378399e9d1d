mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🚕 Ride Pricing - Motor de tarifas dinámicas");
    info!("============================================");

    // Inicializar base de datos
    let pool = match database::connection::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Loop de fondo del SurgeTracker
    let surge_pool = pool.clone();
    let surge_interval = config.surge_recompute_secs;
    tokio::spawn(async move {
        services::surge_tracker::run(surge_pool, surge_interval).await;
    });
    info!("🌊 SurgeTracker corriendo cada {} segundos", surge_interval);

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .nest("/pricing", routes::pricing_routes::create_pricing_router())
        .nest("/api/zone", routes::zone_routes::create_zone_router())
        .nest("/api/promo", routes::promo_routes::create_promo_router())
        .nest("/api/surge", routes::surge_routes::create_surge_router())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST /pricing/quote - Calcular quote de viaje");
    info!("   GET  /pricing/health - Health check");
    info!("📍 Endpoints de administración - Zonas:");
    info!("   POST /api/zone - Crear zona de precios");
    info!("   GET  /api/zone - Listar zonas");
    info!("   GET  /api/zone/:id - Obtener zona");
    info!("   DELETE /api/zone/:id - Eliminar zona");
    info!("🎟️ Endpoints de administración - Promos:");
    info!("   POST /api/promo - Crear código promocional");
    info!("   GET  /api/promo - Listar códigos");
    info!("   GET  /api/promo/:code - Obtener código");
    info!("🌊 Endpoints internos - Surge:");
    info!("   GET  /api/surge/:zone_id - Estado de surge");
    info!("   POST /api/surge/:zone_id/supply - Contador de oferta");
    info!("   POST /api/surge/:zone_id/demand - Contador de demanda");
    info!("   POST /api/surge/:zone_id/recompute - Recalcular zona");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
