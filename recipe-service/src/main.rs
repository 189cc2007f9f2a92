use recipe_service::Application;
use recipe_service::config::Config;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    init_tracing(&config.service_name, &config.log_level);

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
