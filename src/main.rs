use library_inventory::{
    adapters::memory::{InMemoryBookStore, InMemoryMemberValidator, LoggingNotifier},
    api::{handlers::AppState, router::create_router},
    application::inventory::ServiceDependencies,
    config::AppConfig,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from the environment
    let config = AppConfig::from_env().expect("Invalid configuration");

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| "library_inventory=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} valid members configured", config.members.len());

    // Initialize adapters
    let book_store = Arc::new(InMemoryBookStore::new());
    let member_validator = Arc::new(InMemoryMemberValidator::with_members(
        config.members.iter().copied(),
    ));
    let notifier = Arc::new(LoggingNotifier::new());

    // Create service dependencies
    let service_deps = ServiceDependencies {
        book_store,
        member_validator,
        notifier,
    };

    // Create application state
    let app_state = Arc::new(AppState::new(service_deps));

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
