use base64::{Engine, engine::general_purpose};
use recipelens_core::domain::batch::entities::{BatchResult, ImageResult, UploadedImage};
use serde::Serialize;

/// Everything the upload page template reads.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PageView {
    pub root_path: String,
    pub images: Vec<ImageView>,
    pub recipes: Vec<RecipeCardView>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageView {
    pub caption: String,
    /// Inline `data:` URI, absent for uploads that could not be decoded.
    pub data_uri: Option<String>,
    pub lines: Vec<String>,
    pub failed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RecipeCardView {
    pub title: String,
    pub recipe: String,
}

impl PageView {
    pub fn empty(root_path: &str) -> Self {
        Self {
            root_path: root_path.to_string(),
            ..Self::default()
        }
    }

    pub fn from_batch(root_path: &str, result: &BatchResult) -> Self {
        Self {
            root_path: root_path.to_string(),
            images: result.images.iter().map(ImageView::from_result).collect(),
            recipes: result
                .recipes
                .iter()
                .map(|entry| RecipeCardView {
                    title: entry.title(),
                    recipe: entry.recipe.clone(),
                })
                .collect(),
            notice: result.notice().map(str::to_string),
        }
    }

    pub fn with_notice(root_path: &str, notice: impl Into<String>) -> Self {
        Self {
            notice: Some(notice.into()),
            ..Self::empty(root_path)
        }
    }
}

impl ImageView {
    fn from_result(result: &ImageResult) -> Self {
        let failed = result.outcome.is_failed();

        Self {
            caption: result
                .image
                .file_name
                .clone()
                .unwrap_or_else(|| format!("Uploaded image {}", result.index + 1)),
            data_uri: (!failed).then(|| data_uri(&result.image)),
            lines: result.outcome.display_lines(),
            failed,
        }
    }
}

fn data_uri(image: &UploadedImage) -> String {
    let mime = match image.content_type.as_deref() {
        Some(mime @ ("image/jpeg" | "image/png")) => mime,
        _ if image.data.starts_with(b"\x89PNG") => "image/png",
        _ => "image/jpeg",
    };

    format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(&image.data)
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use bytes::Bytes;
    use recipelens_core::domain::{
        batch::entities::ImageOutcome, classification::entities::Prediction,
        recipe::entities::RecipeEntry,
    };

    use super::*;

    fn result(data: &'static [u8], content_type: Option<&str>, outcome: ImageOutcome) -> ImageResult {
        let image = UploadedImage::new(None, content_type.map(str::to_string), Bytes::from_static(data));
        ImageResult {
            index: 0,
            checksum_sha256: image.checksum_sha256(),
            image,
            outcome,
        }
    }

    #[test]
    fn test_classified_image_is_inlined() {
        let view = ImageView::from_result(&result(
            b"\x89PNGdata",
            None,
            ImageOutcome::Classified {
                predictions: vec![Prediction::new("n07873807", "pizza", 0.5)],
            },
        ));

        assert_eq!(view.caption, "Uploaded image 1");
        assert!(!view.failed);
        assert_eq!(
            view.data_uri.as_deref(),
            Some("data:image/png;base64,iVBOR2RhdGE=")
        );
        assert_eq!(view.lines, vec!["1. Pizza (50.00%)"]);
    }

    #[test]
    fn test_failed_image_has_no_preview() {
        let view = ImageView::from_result(&result(
            b"garbage",
            Some("image/jpeg"),
            ImageOutcome::Failed {
                error: "unrecognized image format".to_string(),
            },
        ));

        assert!(view.failed);
        assert!(view.data_uri.is_none());
        assert_eq!(
            view.lines,
            vec!["Could not read image: unrecognized image format"]
        );
    }

    #[test]
    fn test_page_from_batch() {
        let batch = BatchResult::new(
            Vec::new(),
            BTreeSet::from(["pizza".to_string()]),
            vec![RecipeEntry::new("pizza", "Dough")],
        );

        let page = PageView::from_batch("/app", &batch);

        assert_eq!(page.root_path, "/app");
        assert_eq!(
            page.recipes,
            vec![RecipeCardView {
                title: "Pizza".to_string(),
                recipe: "Dough".to_string()
            }]
        );
        assert!(page.notice.is_none());
    }
}
