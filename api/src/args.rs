use std::path::PathBuf;

use clap::{ArgAction, Parser};
use recipelens_core::domain::{
    classification::value_objects::{Normalization, OutputKind, TensorLayout},
    common::{CatalogConfig, ClassifierConfig, RecipeLensConfig},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "recipelens", version, about = "Upload food photos, get recipes")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3333"
    )]
    pub allowed_origins: Vec<String>,

    /// Upper bound for a whole multipart request, all images included.
    #[arg(long = "max-upload-bytes", env = "MAX_UPLOAD_BYTES", default_value_t = 50 * 1024 * 1024)]
    pub max_upload_bytes: usize,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifierArgs {
    #[arg(long = "model-path", env = "MODEL_PATH", default_value = "models/mobilenetv2-7.onnx")]
    pub model_path: PathBuf,

    #[arg(long = "labels-path", env = "LABELS_PATH", default_value = "models/synset.txt")]
    pub labels_path: PathBuf,

    /// `imagenet` (mean/std) or `inception` ([-1, 1])
    #[arg(
        long = "classifier-normalization",
        env = "CLASSIFIER_NORMALIZATION",
        default_value = "imagenet"
    )]
    pub normalization: Normalization,

    /// `nchw` or `nhwc`
    #[arg(long = "classifier-layout", env = "CLASSIFIER_LAYOUT", default_value = "nchw")]
    pub layout: TensorLayout,

    /// `logits` or `probabilities`
    #[arg(long = "classifier-output", env = "CLASSIFIER_OUTPUT", default_value = "logits")]
    pub output: OutputKind,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    /// JSON object of label -> recipe text replacing the built-in recipes
    #[arg(long = "recipes-path", env = "RECIPES_PATH")]
    pub recipes_path: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for RecipeLensConfig {
    fn from(args: Args) -> Self {
        Self {
            classifier: ClassifierConfig {
                model_path: args.classifier.model_path,
                labels_path: args.classifier.labels_path,
                normalization: args.classifier.normalization,
                layout: args.classifier.layout,
                output: args.classifier.output,
            },
            catalog: CatalogConfig {
                recipes_path: args.catalog.recipes_path,
            },
        }
    }
}
