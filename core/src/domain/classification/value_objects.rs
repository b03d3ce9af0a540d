use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of predictions kept per image.
pub const TOP_K: usize = 3;

/// Square input resolution expected by the pretrained model.
pub const INPUT_SIZE: u32 = 224;

pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Channel-wise scaling applied before inference. Must match the
/// distribution the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// `(x / 255 - mean) / std` with the ImageNet statistics.
    ImageNet,
    /// `x / 127.5 - 1`, scaling to `[-1, 1]`.
    Inception,
}

impl Normalization {
    pub fn apply(&self, channel: usize, value: u8) -> f32 {
        match self {
            Normalization::ImageNet => {
                (value as f32 / 255.0 - IMAGENET_MEAN[channel]) / IMAGENET_STD[channel]
            }
            Normalization::Inception => value as f32 / 127.5 - 1.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Normalization::ImageNet => "imagenet",
            Normalization::Inception => "inception",
        }
    }
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "imagenet" => Ok(Normalization::ImageNet),
            "inception" => Ok(Normalization::Inception),
            other => Err(format!(
                "unknown normalization '{other}', expected 'imagenet' or 'inception'"
            )),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Memory layout of the input tensor. The batch dimension always leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TensorLayout {
    /// `[1, 3, height, width]`
    Nchw,
    /// `[1, height, width, 3]`
    Nhwc,
}

impl TensorLayout {
    pub fn as_str(&self) -> &str {
        match self {
            TensorLayout::Nchw => "nchw",
            TensorLayout::Nhwc => "nhwc",
        }
    }
}

impl FromStr for TensorLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nchw" => Ok(TensorLayout::Nchw),
            "nhwc" => Ok(TensorLayout::Nhwc),
            other => Err(format!(
                "unknown tensor layout '{other}', expected 'nchw' or 'nhwc'"
            )),
        }
    }
}

impl fmt::Display for TensorLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the model's output vector holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Raw scores, softmax is applied while decoding.
    Logits,
    /// Already a probability distribution.
    Probabilities,
}

impl OutputKind {
    pub fn as_str(&self) -> &str {
        match self {
            OutputKind::Logits => "logits",
            OutputKind::Probabilities => "probabilities",
        }
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "logits" => Ok(OutputKind::Logits),
            "probabilities" => Ok(OutputKind::Probabilities),
            other => Err(format!(
                "unknown output kind '{other}', expected 'logits' or 'probabilities'"
            )),
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence as a percentage with two decimals, e.g. `0.8765` -> `"87.65"`.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}", confidence * 100.0)
}

/// First character upper-cased, the rest lower-cased.
pub fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
