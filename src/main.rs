use member_qa::answer::AnswerService;
use member_qa::config::AppConfig;
use member_qa::llm::GeminiClient;
use member_qa::member_messages::MemberMessagesClient;
use member_qa::routes::configure_routes;
use member_qa::state::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let gemini = GeminiClient::with_timeout(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.llm_timeout,
    )?
    .with_base_url(config.gemini_base_url.clone());

    let messages = MemberMessagesClient::new(config.member_messages())?;
    info!(
        endpoint = messages.endpoint(),
        model = config.gemini_model.as_str(),
        "clients initialized"
    );

    let state = Arc::new(AppState::new(
        messages,
        AnswerService::new(Arc::new(gemini)),
        config.page_size,
    ));
    let routes = configure_routes(state);

    let addr = config.bind_addr();
    info!("Starting server on http://{}", addr);
    warp::serve(routes).run(addr).await;

    Ok(())
}
