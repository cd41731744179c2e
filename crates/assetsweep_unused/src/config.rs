use assetsweep_core::{
    ASSET_EXTENSIONS, CollectorConfig, EXCLUDED_DIRS, KEEP_BASENAMES, SOURCE_EXTENSIONS,
    SweepError,
};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "assetsweep")]
#[command(
    about = "Find image assets that no markup, stylesheet or component template references",
    long_about = "Scans a front-end project for .jpg, .png and .svg files that are never \
                  referenced from markup, stylesheets or component templates, and lists them. \
                  With --remove-assets the unused files are also deleted.\n\n\
                  References starting with '/' are resolved against --root. Bundlers that \
                  serve a public/ directory at the web root (src=\"/logo.png\" meaning \
                  public/logo.png) need --root pointed accordingly or --keep for those files, \
                  otherwise they are reported as unused and --remove-assets deletes them."
)]
pub struct Config {
    /// Root directory of the project
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Remove unused image assets from the filesystem
    #[arg(long)]
    pub remove_assets: bool,

    /// Extensions of files scanned for asset references
    #[arg(long = "source-ext", value_delimiter = ',', default_values_t = owned(SOURCE_EXTENSIONS))]
    pub source_extensions: Vec<String>,

    /// Extensions of image files tracked for usage
    #[arg(long = "asset-ext", value_delimiter = ',', default_values_t = owned(ASSET_EXTENSIONS))]
    pub asset_extensions: Vec<String>,

    /// Directory names skipped at any depth
    #[arg(long = "exclude-dir", value_delimiter = ',', default_values_t = owned(EXCLUDED_DIRS))]
    pub excluded_dirs: Vec<String>,

    /// Basenames never reported or removed
    #[arg(long = "keep", value_delimiter = ',', default_values_t = owned(KEEP_BASENAMES))]
    pub keep: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            remove_assets: false,
            source_extensions: owned(SOURCE_EXTENSIONS),
            asset_extensions: owned(ASSET_EXTENSIONS),
            excluded_dirs: owned(EXCLUDED_DIRS),
            keep: owned(KEEP_BASENAMES),
            json: false,
        }
    }
}

impl Config {
    /// Canonicalize the configured root. A missing root is a setup error.
    pub fn resolve_root(&self) -> Result<PathBuf, SweepError> {
        debug!("Resolving root directory: {:?}", self.root);
        let root = self
            .root
            .canonicalize()
            .map_err(|source| SweepError::Setup { path: self.root.clone(), source })?;
        info!("Using root directory: {}", root.display());
        Ok(root)
    }

    pub(crate) fn collector_config(&self, root: PathBuf) -> CollectorConfig {
        CollectorConfig {
            root,
            source_extensions: self.source_extensions.clone(),
            asset_extensions: self.asset_extensions.clone(),
            excluded_dirs: self.excluded_dirs.clone(),
        }
    }
}
