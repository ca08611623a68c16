//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use duka_cache::{CacheError, FileStore};
use duka_commerce::cart::CartStore;
use duka_commerce::catalog::{CatalogSource, CatalogState, CatalogStore};
use duka_data::{FetchClient, FileCatalogSource, HttpCatalogSource};
use duka_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};
use duka_storefront::Storefront;

use crate::config::{DukaConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: DukaConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Session logger.
    pub logger: StructuredLogger,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (DukaConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (DukaConfig::load(&path)?, Some(path)),
                None => (DukaConfig::default(), None),
            },
        };

        let logger = build_logger(&config, output.is_verbose())?;
        logger
            .debug_builder("Configuration loaded")
            .field(
                "config",
                config_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "defaults".to_string()),
            )
            .emit();

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            logger,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Path of the cart store file.
    pub fn cart_path(&self) -> PathBuf {
        self.resolve_path(&self.config.storage.path)
    }

    /// Open the file-backed cart.
    ///
    /// A cart file that does not parse is logged and treated as empty; the
    /// next cart change overwrites it.
    pub fn open_cart(&self) -> Result<CartStore<FileStore>> {
        let path = self.cart_path();
        let store = match FileStore::open(&path) {
            Ok(store) => store,
            Err(CacheError::OpenError(reason)) => {
                self.logger
                    .for_component("cart")
                    .warn_builder("Ignoring unreadable cart file")
                    .field("path", path.display().to_string())
                    .field("error", reason)
                    .emit();
                FileStore::empty(&path)
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to open cart store: {}", path.display()))
            }
        };
        Ok(CartStore::open_with_key(
            store,
            self.config.storage.key.clone(),
            &self.logger,
        ))
    }

    /// The configured catalog source.
    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>> {
        let catalog = &self.config.catalog;
        if let Some(file) = &catalog.file {
            return Ok(Box::new(FileCatalogSource::new(self.resolve_path(file))));
        }

        let client = match catalog.timeout_ms {
            Some(ms) => FetchClient::with_timeout(Duration::from_millis(ms)),
            None => FetchClient::new(),
        }
        .context("Failed to create HTTP client")?;
        let client = match &catalog.base_url {
            Some(base) => client.with_base_url(base.clone()),
            None => client,
        };
        Ok(Box::new(HttpCatalogSource::new(client, catalog.path.clone())))
    }

    /// Fetch the catalog once, with a spinner.
    ///
    /// An unavailable catalog is not an error here; it is reported as a
    /// warning and the returned store is empty.
    pub async fn load_catalog(&self) -> Result<CatalogStore> {
        let source = self.catalog_source()?;
        let spinner = self.output.spinner(&format!("Loading catalog from {}", source.describe()));

        let mut catalog = CatalogStore::new();
        let state = catalog
            .load(source.as_ref(), &self.logger.for_component("catalog"))
            .await
            .clone();
        spinner.finish_and_clear();

        if let CatalogState::Unavailable(reason) = state {
            self.output.warn(&format!("Catalog unavailable: {}", reason));
        } else {
            self.output
                .debug(&format!("Loaded {} products", catalog.len()));
        }
        Ok(catalog)
    }

    /// Load the catalog and open the cart as one storefront session.
    pub async fn storefront(&self) -> Result<Storefront<FileStore>> {
        let catalog = self.load_catalog().await?;
        let cart = self.open_cart()?;
        Ok(Storefront::new(catalog, cart, &self.logger).with_settings(self.config.storefront_settings()))
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn build_logger(config: &DukaConfig, verbose: bool) -> Result<StructuredLogger> {
    let level: LogLevel = if verbose {
        LogLevel::Debug
    } else {
        config.log.level.parse().context("Invalid [log] level")?
    };
    let format: LogFormat = config.log.format.parse().context("Invalid [log] format")?;

    Ok(StructuredLogger::new(SessionId::generate())
        .with_min_level(level)
        .with_format(format))
}
