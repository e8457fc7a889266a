//! Presentation rules for classifier output.

#[cfg(test)]
#[path = "detection_test.rs"]
mod detection_test;

use crate::net::types::Prediction;

/// Coarse confidence bucket used to color result bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Good,
    Fair,
    Low,
}

impl ConfidenceBand {
    /// Bucket a `0.0..=1.0` confidence. Bounds are exclusive: 80% is `Good`.
    #[must_use]
    pub fn of(confidence: f64) -> Self {
        let percent = confidence * 100.0;
        if percent > 80.0 {
            Self::High
        } else if percent > 60.0 {
            Self::Good
        } else if percent > 40.0 {
            Self::Fair
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "confidence--high",
            Self::Good => "confidence--good",
            Self::Fair => "confidence--fair",
            Self::Low => "confidence--low",
        }
    }
}

/// `0.93456` → `"93.46%"`.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// Predictions ordered from most to least confident.
#[must_use]
pub fn ranked(predictions: &[Prediction]) -> Vec<Prediction> {
    let mut ranked = predictions.to_vec();
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    ranked
}

/// The single most confident prediction, if any.
#[must_use]
pub fn best_prediction(predictions: &[Prediction]) -> Option<&Prediction> {
    predictions.iter().max_by(|a, b| a.confidence.total_cmp(&b.confidence))
}
