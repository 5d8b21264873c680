use vidstyle_core::Config;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    // Initialize the application (directories, transcoder, routes)
    let (_state, router) = vidstyle_api::setup::initialize_app(config.clone()).await?;

    vidstyle_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
