pub mod algo;
pub mod bundle;
pub mod error;
pub mod ops;
pub mod pipeline;

#[cfg(feature = "cli")]
pub mod logging;

#[cfg(feature = "mcp")]
pub mod mcp;

#[cfg(feature = "plugin")]
pub mod commands;

pub use bundle::{ContentBundle, PageInput, Source};
pub use error::{Error, Result};
pub use pipeline::{extract_topics, ExtractOptions, TopicReport};

#[cfg(feature = "plugin")]
use nu_plugin::{Plugin, PluginCommand};

#[cfg(feature = "plugin")]
pub struct PageTopicsPlugin;

#[cfg(feature = "plugin")]
impl Plugin for PageTopicsPlugin {
    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").into()
    }

    fn commands(&self) -> Vec<Box<dyn PluginCommand<Plugin = Self>>> {
        vec![Box::new(commands::Extract), Box::new(commands::Classify)]
    }
}
