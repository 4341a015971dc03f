use ipcalc::api::App;
use ipcalc::logging::init_logging;
use ipcalc::Config;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    log::info!("#Start main() {:?}", config);

    App::new(config).run().await?;

    log::info!("#End main()");
    Ok(())
}
