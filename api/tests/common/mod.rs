#![allow(dead_code)]

use std::sync::Arc;

use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use recipelens_api::{
    application::http::{
        page::renderer::PageRenderer,
        server::{app_state::AppState, http_server::router},
    },
    args::Args,
};
use recipelens_core::{
    domain::{
        classification::{
            entities::{ModelInfo, Prediction},
            ports::ImageClassifier,
            value_objects::{Normalization, OutputKind, TensorLayout},
        },
        common::{entities::app_errors::CoreError, services::Service},
    },
    infrastructure::recipe::StaticRecipeCatalog,
};
use test_context::AsyncTestContext;

/// Classifier keyed on the raw upload bytes, so tests control every outcome.
pub struct StubClassifier;

impl ImageClassifier for StubClassifier {
    fn classify(&self, image: &[u8]) -> Result<Vec<Prediction>, CoreError> {
        match image {
            b"pizza" => Ok(vec![
                Prediction::new("n07873807", "pizza", 0.9123),
                Prediction::new("n07579787", "plate", 0.05),
                Prediction::new("n07880968", "burrito", 0.01),
            ]),
            b"dog" => Ok(vec![
                Prediction::new("n02099601", "golden retriever", 0.8),
                Prediction::new("n02099712", "Labrador retriever", 0.1),
                Prediction::new("n04409515", "tennis ball", 0.05),
            ]),
            b"outage" => Err(CoreError::ClassificationUnavailable(
                "inference failed".to_string(),
            )),
            _ => Err(CoreError::ImageDecode(
                "unrecognized image format".to_string(),
            )),
        }
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_path: "stub.onnx".to_string(),
            num_classes: 1000,
            input_width: 224,
            input_height: 224,
            normalization: Normalization::ImageNet,
            layout: TensorLayout::Nchw,
            output: OutputKind::Logits,
        }
    }
}

/// Server over the stub classifier and the built-in recipes.
pub fn test_server(extra_args: &[&str]) -> TestServer {
    let args = Args::try_parse_from(
        ["recipelens", "--metrics-enabled", "false"]
            .into_iter()
            .chain(extra_args.iter().copied()),
    )
    .expect("args parse");

    let classifier: Arc<dyn ImageClassifier> = Arc::new(StubClassifier);
    let service = Service::new(classifier, StaticRecipeCatalog::builtin());
    let pages = PageRenderer::new().expect("templates compile");

    let state = AppState::new(Arc::new(args), service, pages);
    let app = router(state).expect("router builds");

    TestServer::new(app).expect("test server starts")
}

pub struct AppContext {
    pub server: TestServer,
}

impl AsyncTestContext for AppContext {
    async fn setup() -> AppContext {
        AppContext {
            server: test_server(&[]),
        }
    }

    async fn teardown(self) {}
}

/// Same app mounted under `/app`.
pub struct RootPathContext {
    pub server: TestServer,
}

impl AsyncTestContext for RootPathContext {
    async fn setup() -> RootPathContext {
        RootPathContext {
            server: test_server(&["--server-root-path", "/app"]),
        }
    }

    async fn teardown(self) {}
}

pub fn image_part(content: &str, file_name: &str) -> Part {
    Part::bytes(content.as_bytes().to_vec())
        .file_name(file_name.to_string())
        .mime_type("image/jpeg")
}

/// One `images` part per entry, in order.
pub fn upload_form(files: &[(&str, &str)]) -> MultipartForm {
    files
        .iter()
        .fold(MultipartForm::new(), |form, (content, file_name)| {
            form.add_part("images", image_part(content, file_name))
        })
}
