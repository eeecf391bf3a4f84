use std::{collections::HashMap, fs, net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{bail, Context};

pub const CONFIG_FILE: &str = "storefront.toml";
const MAX_SWEEP_PERIOD: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub hero_interval_ms: u64,
    pub hero_fade_ms: u64,
    pub max_body_bytes: usize,
    pub session_idle_secs: u64,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            hero_interval_ms: catalog::HERO_INTERVAL_MS,
            hero_fade_ms: 1000,
            max_body_bytes: 64 * 1024,
            session_idle_secs: 30 * 60,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }

    pub fn hero_fade(&self) -> Duration {
        Duration::from_millis(self.hero_fade_ms)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    /// How often idle sessions are swept.
    pub fn session_sweep_period(&self) -> Duration {
        self.session_idle().min(MAX_SWEEP_PERIOD)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.socket_addr()?;
        if self.hero_interval_ms == 0 {
            bail!("hero interval must be positive");
        }
        if self.hero_fade_ms >= self.hero_interval_ms {
            bail!(
                "hero fade ({} ms) must be shorter than the hero interval ({} ms)",
                self.hero_fade_ms,
                self.hero_interval_ms
            );
        }
        if self.max_body_bytes == 0 {
            bail!("request body limit must be positive");
        }
        if self.session_idle_secs == 0 {
            bail!("session idle timeout must be positive");
        }
        Ok(())
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(CONFIG_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

/// Overlays keys from a flat TOML table. Unparseable files and values are ignored.
fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        return;
    };
    let get = |key: &str| {
        file_cfg.get(key).map(|value| match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    };

    if let Some(v) = get("bind_addr") {
        settings.bind_addr = v;
    }
    set_parsed(&mut settings.hero_interval_ms, get("hero_interval_ms"));
    set_parsed(&mut settings.hero_fade_ms, get("hero_fade_ms"));
    set_parsed(&mut settings.max_body_bytes, get("max_body_bytes"));
    set_parsed(&mut settings.session_idle_secs, get("session_idle_secs"));
    if let Some(v) = get("log_filter") {
        settings.log_filter = v;
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("STOREFRONT_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    set_parsed(&mut settings.hero_interval_ms, var("APP__HERO_INTERVAL_MS"));
    set_parsed(&mut settings.hero_fade_ms, var("APP__HERO_FADE_MS"));
    set_parsed(&mut settings.max_body_bytes, var("APP__MAX_BODY_BYTES"));
    set_parsed(&mut settings.session_idle_secs, var("APP__SESSION_IDLE_SECS"));

    if let Some(v) = var("RUST_LOG") {
        settings.log_filter = v;
    }
}

fn set_parsed<T: FromStr>(slot: &mut T, raw: Option<String>) {
    if let Some(parsed) = raw.and_then(|v| v.trim().parse::<T>().ok()) {
        *slot = parsed;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
