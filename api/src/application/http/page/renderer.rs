use minijinja::{Environment, context};

use super::view::PageView;

const INDEX_TEMPLATE: &str = "index.html";

/// Server side rendering of the upload page.
///
/// Templates are compiled into the binary. The `.html` suffix turns on
/// HTML auto-escaping, so labels, file names and recipe text are escaped.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("templates/index.html"))?;

        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView) -> Result<String, minijinja::Error> {
        self.env
            .get_template(INDEX_TEMPLATE)?
            .render(context! { page => view })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::http::page::view::{ImageView, RecipeCardView};

    #[test]
    fn test_render_empty_page_has_form_only() {
        let html = PageRenderer::new()
            .unwrap()
            .render(&PageView::empty(""))
            .unwrap();

        assert!(html.contains("Food to Recipe Converter"));
        assert!(html.contains("action=\"/\""));
        assert!(html.contains("name=\"images\""));
        assert!(html.contains("multiple"));
        assert!(!html.contains("Suggested Recipes"));
        assert!(!html.contains("Uploaded Images"));
        assert!(!html.contains("class=\"notice\""));
    }

    #[test]
    fn test_render_results() {
        let view = PageView {
            root_path: "/app".to_string(),
            images: vec![ImageView {
                caption: "lunch.jpg".to_string(),
                data_uri: Some("data:image/jpeg;base64,AAAA".to_string()),
                lines: vec!["1. Pizza (91.20%)".to_string()],
                failed: false,
            }],
            recipes: vec![RecipeCardView {
                title: "Pizza".to_string(),
                recipe: "Dough, sauce".to_string(),
            }],
            notice: None,
        };

        let html = PageRenderer::new().unwrap().render(&view).unwrap();

        assert!(html.contains("Uploaded Images"));
        assert!(html.contains("1. Pizza (91.20%)"));
        assert!(html.contains("Suggested Recipes"));
        assert!(html.contains("<h4>Pizza</h4>"));
        assert!(html.contains("Dough, sauce"));
    }

    #[test]
    fn test_render_escapes_user_text() {
        let view = PageView {
            images: vec![ImageView {
                caption: "<script>alert(1)</script>".to_string(),
                data_uri: None,
                lines: vec!["Could not read image: bad".to_string()],
                failed: true,
            }],
            ..PageView::empty("")
        };

        let html = PageRenderer::new().unwrap().render(&view).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("class=\"image-error\""));
    }

    #[test]
    fn test_render_notice() {
        let html = PageRenderer::new()
            .unwrap()
            .render(&PageView::with_notice("", "No known food items identified for recipes."))
            .unwrap();

        assert!(html.contains("class=\"notice\""));
        assert!(html.contains("No known food items identified for recipes."));
    }
}
