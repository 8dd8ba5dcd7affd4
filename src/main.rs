use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use secrecy::SecretString;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use qubitlearn::adapters::ai::{HuggingFaceConfig, HuggingFaceProvider};
use qubitlearn::adapters::credentials::CredentialResolver;
use qubitlearn::adapters::http::{
    api_router, ApiState, DonationAppState, FlashcardAppState, StudyAppState, UserAppState,
};
use qubitlearn::adapters::intasend::{IntaSendConfig, IntaSendPaymentAdapter};
use qubitlearn::adapters::supabase::{
    InMemoryTableStore, StoreDonationRepository, StoreFlashcardRepository, StoreUserRepository,
    SupabaseConfig, SupabaseTableStore,
};
use qubitlearn::application::handlers::inference::InferenceGateway;
use qubitlearn::config::{parse_test_mode_flag, AppConfig};
use qubitlearn::domain::inference::{ParaphraseModel, QuestionModel};
use qubitlearn::ports::{
    CredentialSource, TableStore, PAYMENT_PUBLISHABLE_KEY_NAMES, PAYMENT_TEST_MODE_NAMES,
    PAYMENT_TOKEN_NAMES, STORE_KEY_NAMES, STORE_URL_NAMES,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    if config.request_timeout_can_cut_inference() {
        tracing::warn!(
            request_timeout_secs = config.server.request_timeout_secs,
            worst_case_secs = config.inference.worst_case_paraphrase().as_secs(),
            "Request timeout is shorter than the slowest paraphrase; long requests will get 408"
        );
    }

    let credentials = CredentialResolver::standard(&config);
    tracing::info!(sources = ?credentials.source_names(), "Credential sources ready");

    let store = table_store(&config, &credentials)?;

    let payment_test_mode = credentials
        .resolve_plain(PAYMENT_TEST_MODE_NAMES)
        .map(|raw| parse_test_mode_flag(&raw))
        .unwrap_or(config.payment.test_mode);
    let intasend_config = IntaSendConfig::new(
        credentials.resolve(PAYMENT_TOKEN_NAMES),
        credentials.resolve(PAYMENT_PUBLISHABLE_KEY_NAMES),
        payment_test_mode,
    )
    .with_base_url(config.payment.api_base_url(payment_test_mode));
    if !intasend_config.has_credentials() {
        tracing::warn!("IntaSend credentials not configured; donations will be rejected");
    }
    let payment_provider = Arc::new(IntaSendPaymentAdapter::new(intasend_config)?);

    let text_provider = Arc::new(HuggingFaceProvider::new(HuggingFaceConfig::from(
        &config.inference,
    ))?);
    let credential_source: Arc<dyn CredentialSource> = Arc::new(credentials);
    let gateway = Arc::new(InferenceGateway::new(credential_source, text_provider));

    let state = ApiState {
        study: StudyAppState::new(gateway, config.inference.fallback_model.clone())
            .with_paraphrase_model(ParaphraseModel::from_choice(
                &config.inference.paraphrase_model,
                ParaphraseModel::default(),
            ))
            .with_question_model(QuestionModel::from_choice(
                &config.inference.question_model,
                QuestionModel::default(),
            )),
        donation: DonationAppState::new(
            payment_provider,
            Arc::new(StoreDonationRepository::new(store.clone())),
        )
        .with_webhook_challenge(config.payment.webhook_challenge.clone().map(SecretString::new)),
        flashcard: FlashcardAppState::new(Arc::new(StoreFlashcardRepository::new(store.clone()))),
        user: UserAppState::new(Arc::new(StoreUserRepository::new(store))),
    };

    let app = with_layers(api_router(state), &config);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, test_mode = payment_test_mode, "QubitLearn backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.server.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Supabase when both URL and key resolve, otherwise a process-local store.
fn table_store(
    config: &AppConfig,
    credentials: &CredentialResolver,
) -> Result<Arc<dyn TableStore>, Box<dyn std::error::Error>> {
    match (
        credentials.resolve_plain(STORE_URL_NAMES),
        credentials.resolve(STORE_KEY_NAMES),
    ) {
        (Some(url), Some(key)) => {
            let store_config = SupabaseConfig::new(url, key).with_timeout(config.store.timeout());
            Ok(Arc::new(SupabaseTableStore::new(store_config)?))
        }
        _ => {
            tracing::warn!("Supabase not configured; using in-memory storage");
            Ok(Arc::new(InMemoryTableStore::new()))
        }
    }
}

fn with_layers(router: Router, config: &AppConfig) -> Router {
    let origins = config.server.cors_origins_list();
    let cors = if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::permissive().allow_origin(AllowOrigin::list(
            origins.iter().filter_map(|o| o.parse::<HeaderValue>().ok()),
        ))
    };

    router
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
