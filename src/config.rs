#[derive(Default, serde::Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub bot: xdigest_bot::Config,
    pub ai: xdigest_ai::claude::Config,
    pub feed: xdigest_feed::Config,
    pub schedule: xdigest_pipeline::Config,
}

/// `BOT__CHAT_ID=""` counts as unset, like a missing variable
pub(crate) fn environment() -> config::Environment {
    config::Environment::default()
        .separator("__")
        .list_separator(";")
        .with_list_parse_key("feed.list_ids")
        .ignore_empty(true)
        .try_parsing(true)
}

impl Config {
    pub fn new() -> anyhow::Result<Config> {
        let mut conf_builder = config::Config::builder().add_source(environment());

        if std::path::Path::new("Settings.toml").exists() {
            conf_builder = conf_builder.add_source(config::File::with_name("./Settings.toml"));
        }

        Self::from_builder(conf_builder)
    }

    pub(crate) fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Config> {
        Ok(builder.build()?.try_deserialize::<Config>()?)
    }

    /// Missing secrets are reported here and only fail the call that needs them
    pub fn log_status(&self) {
        let status = |present: bool| if present { "OK" } else { "FALTA" };

        tracing::info!(
            twitter = status(self.feed.auth.is_configured()),
            twitter_auth = self.feed.auth.scheme(),
            anthropic = status(!self.ai.api_key.is_empty()),
            telegram = status(!self.bot.token.is_empty()),
            chat_id = status(self.bot.chat_id.is_some()),
            lists = self.feed.list_ids.len(),
            "configuration loaded"
        );
    }
}
