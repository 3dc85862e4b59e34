use anyhow::Result;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use phone_sorter::application::service::PhoneSorterService;
use phone_sorter::config::{self, SortMethod};
use phone_sorter::infrastructure::{
    generator::RandomDatasetGenerator,
    sorter::{BitmapSorter, TreeSetSorter},
};

fn setup_tracing() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .from_env_lossy();

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

fn main() -> Result<()> {
    setup_tracing()?;

    let config = match config::get_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Full application configuration");

    let generator = RandomDatasetGenerator;
    let outcome = match config.method {
        SortMethod::Naive => PhoneSorterService::new(generator, TreeSetSorter).run(&config),
        SortMethod::Bitwise => PhoneSorterService::new(generator, BitmapSorter).run(&config),
    };

    if let Err(e) = outcome {
        tracing::error!("Application finished with an error: {:?}", e);
        std::process::exit(1);
    }

    tracing::info!("Phone number sorting completed successfully!");
    Ok(())
}
