mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use dioxus_logger::tracing::{self, Level};

use crate::{
    config::Config, error::AppError, scheduler::auto_end::CronAutoEndScheduler,
    service::twitter::TwitterClient, state::BotState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let twitter = TwitterClient::from_config(http_client, &config);

    let scheduler = CronAutoEndScheduler::new(db.clone()).await?;

    tracing::info!("Starting POAP bot");

    let state = BotState::new(db, twitter, scheduler, &config);
    let client = bot::start::init_bot(&config, state).await?;

    bot::start::start_bot(client).await
}
