use clap::Parser;
use lesson_announcer::config::catalog;
use lesson_announcer::utils::{logger, validation::Validate};
use lesson_announcer::{
    AnnouncementService, AnnouncerEngine, CliConfig, OutputFormat, StdoutPresenter,
};
use std::str::FromStr;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lesson-announcer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let catalog = match catalog::load_catalog(config.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load lesson catalog: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let service = AnnouncementService::new(catalog);

    if config.list {
        for lesson in service.catalog().lessons() {
            println!("{}", lesson);
        }
        return Ok(());
    }

    // validate() guarantees lesson is present when --list is not given
    let lesson = config.lesson.as_deref().unwrap_or_default();
    let format = OutputFormat::from_str(&config.format)?;

    let presenter = StdoutPresenter::new(format);
    let engine = AnnouncerEngine::new(service, presenter);

    match engine.run(lesson, config.day.as_deref()) {
        Ok(message) => {
            tracing::info!("✅ Announcement delivered: {}", message);
        }
        Err(e) => {
            tracing::error!("❌ Announcement failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
