use std::{fs::OpenOptions, sync::Mutex};

use anyhow::Context;
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{fmt::{writer::BoxMakeWriter, MakeWriter}, layer::SubscriberExt, EnvFilter, Registry};

use crate::configuration::ApplicationSettings;

pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static
{
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), anyhow::Error>{
    set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")
}

// Stdout belongs to the menus, so logs go to the configured file or nowhere
pub fn log_sink(settings: &ApplicationSettings) -> Result<BoxMakeWriter, anyhow::Error>{
    match &settings.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path))?;

            Ok(BoxMakeWriter::new(Mutex::new(file)))
        },
        None => Ok(BoxMakeWriter::new(std::io::sink))
    }
}
