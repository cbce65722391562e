use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use user_management_backend::{
    build_router,
    config::{get_config, init_config},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();
    app_state
        .user_service
        .seed_admin(&config.admin_email, &config.admin_password)?;
    info!("Seeded admin account {}", config.admin_email);

    let app = build_router(app_state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
