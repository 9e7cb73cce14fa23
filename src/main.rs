mod api_client;
mod app_context;
mod config;
mod error_collector;
mod homework;
mod jobs;
mod logging;
mod notifier;
mod poller;

use std::process::ExitCode;

use teloxide::prelude::*;

use crate::api_client::PracticumClient;
use crate::app_context::AppContext;
use crate::config::{Config, load_config};
use crate::error_collector::ErrorCollector;
use crate::jobs::run_poll_job;
use crate::logging::init_json_logging;
use crate::notifier::TelegramSink;

const CONFIG_PATH_VAR: &str = "HOMEWORK_BOT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

// Main
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let errors = ErrorCollector::default();
    init_json_logging(&errors);

    if let Err(error) = dotenv
        && !error.not_found()
    {
        log::warn!("dotenv_load_failed error={}", error);
    }

    let config_path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config: Config = match load_config(&config_path) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return ExitCode::FAILURE;
        }
    };
    errors.set_capacity(config.errors.capacity);

    let chat_id = match config.target_chat_id() {
        Ok(chat_id) => chat_id,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let api = match PracticumClient::new(&config) {
        Ok(api) => api,
        Err(error) => {
            log::error!("HTTP client initialization failed: {}", error);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Homework status bot is starting...");
    let bot = Bot::new(&config.telegram_token);
    let sink = TelegramSink::new(bot, chat_id);
    let app_context = AppContext::new(config, errors);

    tokio::select! {
        _ = run_poll_job(api, sink, app_context) => {}
        _ = tokio::signal::ctrl_c() => {
            log::info!("shutdown_requested signal=ctrl_c");
        }
    }

    ExitCode::SUCCESS
}
