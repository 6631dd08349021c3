use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use vvs_motors_api::config::environment::EnvironmentConfig;
use vvs_motors_api::controllers::auth_controller::AuthController;
use vvs_motors_api::create_app;
use vvs_motors_api::database::{run_migrations, DatabaseConnection};
use vvs_motors_api::state::AppState;
use vvs_motors_api::utils::jwt::JwtConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 VVS Motors - API del concesionario");
    info!("=====================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    run_migrations(&pool).await?;

    // Crear la cuenta admin inicial si la tabla está vacía
    let auth_controller = AuthController::new(pool.clone(), JwtConfig::from(&config));
    auth_controller.ensure_bootstrap_admin(&config).await?;

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());
    let app = create_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("🚗 Endpoints públicos - Catálogo:");
    info!("   GET  /api/cars - Buscar vehículos disponibles");
    info!("   GET  /api/cars/featured - Vehículos destacados");
    info!("   GET  /api/cars/:id - Detalle de un vehículo");
    info!("🎉 Endpoints públicos - Promociones:");
    info!("   GET  /api/promotions - Promociones activas");
    info!("✉️  Endpoints públicos - Contacto:");
    info!("   POST /api/contact - Enviar mensaje de contacto");
    info!("🔐 Endpoints de autenticación:");
    info!("   POST /api/auth/login - Login de administrador");
    info!("   GET  /api/auth/me - Perfil del admin autenticado");
    info!("🛠️  Endpoints de administración (token requerido):");
    info!("   GET  /api/admin/cars - Inventario completo");
    info!("   POST /api/admin/cars - Crear vehículo");
    info!("   PUT  /api/admin/cars/:id - Actualizar vehículo");
    info!("   DELETE /api/admin/cars/:id - Eliminar vehículo");
    info!("   GET  /api/admin/promotions - Listar promociones");
    info!("   POST /api/admin/promotions - Crear promoción");
    info!("   GET  /api/admin/promotions/:id - Obtener promoción");
    info!("   PATCH /api/admin/promotions/:id - Actualizar promoción");
    info!("   DELETE /api/admin/promotions/:id - Eliminar promoción");
    info!("   GET  /api/admin/messages - Listar mensajes de contacto");
    info!("   PATCH /api/admin/messages/:id - Cambiar estado de mensaje");
    info!("   DELETE /api/admin/messages/:id - Eliminar mensaje");
    info!("   GET  /api/admin/settings - Configuración del sitio");
    info!("   POST /api/admin/settings - Actualizar configuración");
    info!("   GET  /api/admin/stats - Estadísticas del panel");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

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
