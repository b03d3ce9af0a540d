use std::{fs, path::Path};

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLabel {
    pub identifier: String,
    pub label: String,
}

/// Class index -> label mapping of the model output.
///
/// Parsed from a synset file with one class per line:
///
/// ```text
/// n07873807 pizza, pizza pie
/// n07697537 hotdog, hot dog, red hot
/// ```
///
/// The label is the first comma-separated name. Lines without a synset id
/// use their class index as identifier. Blank lines are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<ClassLabel>,
}

impl LabelSet {
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let labels: Vec<ClassLabel> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(index, line)| parse_line(index, line))
            .collect();

        if labels.is_empty() {
            return Err(CoreError::ModelLoad("label file is empty".to_string()));
        }

        Ok(Self { labels })
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let text = fs::read_to_string(path).map_err(|e| {
            CoreError::ModelLoad(format!("cannot read labels {}: {}", path.display(), e))
        })?;

        Self::parse(&text)
    }

    pub fn get(&self, index: usize) -> Option<&ClassLabel> {
        self.labels.get(index)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn parse_line(index: usize, line: &str) -> ClassLabel {
    let (identifier, names) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) if is_synset_id(head) => (head.to_string(), rest),
        _ => (index.to_string(), line),
    };

    let label = names.split(',').next().unwrap_or(names).trim().to_string();

    ClassLabel { identifier, label }
}

fn is_synset_id(token: &str) -> bool {
    token.len() == 9
        && token.starts_with('n')
        && token[1..].chars().all(|c| c.is_ascii_digit())
}
