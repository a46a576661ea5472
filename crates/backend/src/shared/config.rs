use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Каталог со сборкой frontend (trunk build)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    /// Версия для cache busting. Если не задана - время запуска сервера (мс)
    pub version: Option<u64>,
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,
    #[serde(default = "default_versioned_extensions")]
    pub versioned_extensions: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataConfig {
    /// JSON со справочными данными формы. Если не задан - встроенный набор
    pub reference_file: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_max_age() -> u64 {
    31_536_000
}

fn default_versioned_extensions() -> Vec<String> {
    vec!["js".into(), "css".into(), "wasm".into()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            version: None,
            max_age_secs: default_max_age(),
            versioned_extensions: default_versioned_extensions(),
        }
    }
}

/// Встроенная конфигурация (используется, если config.toml не найден)
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
dist_dir = "dist"

[assets]
max_age_secs = 31536000
versioned_extensions = ["js", "css", "wasm"]

[data]
"#;

const CONFIG_FILE: &str = "config.toml";

/// Найти и прочитать config.toml: рядом с бинарником, затем в текущем
/// каталоге. Если файла нет ни там, ни там - встроенная конфигурация.
pub fn load_config() -> anyhow::Result<Config> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let candidates = exe_dir
        .into_iter()
        .chain(std::env::current_dir().ok())
        .map(|dir| dir.join(CONFIG_FILE));

    for path in candidates {
        if !path.is_file() {
            tracing::debug!("{} not found at {}", CONFIG_FILE, path.display());
            continue;
        }
        tracing::info!("Loading config from: {}", path.display());
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
        return parse_config(&contents);
    }

    tracing::info!("{} not found, using embedded defaults", CONFIG_FILE);
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.assets.versioned_extensions.is_empty() {
        anyhow::bail!("assets.versioned_extensions must not be empty");
    }
    Ok(config)
}

/// Путь из конфигурации: абсолютный как есть, относительный - от каталога
/// бинарника, если там он существует, иначе от текущего каталога.
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(path)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

impl Config {
    pub fn dist_dir(&self) -> PathBuf {
        resolve_path(&self.server.dist_dir)
    }

    pub fn reference_file(&self) -> Option<PathBuf> {
        self.data.reference_file.as_deref().map(resolve_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(config.assets.version, None);
        assert_eq!(config.assets.versioned_extensions, vec!["js", "css", "wasm"]);
        assert!(config.data.reference_file.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[assets]\nversion = 42\n").unwrap();
        assert_eq!(config.assets.version, Some(42));
        assert_eq!(config.assets.max_age_secs, 31_536_000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_empty_extensions_rejected() {
        assert!(parse_config("[assets]\nversioned_extensions = []\n").is_err());
    }

    #[test]
    fn test_absolute_path_kept() {
        let abs = std::env::temp_dir().join("reference.json");
        let resolved = resolve_path(abs.to_str().unwrap());
        assert_eq!(resolved, abs);
    }
}
