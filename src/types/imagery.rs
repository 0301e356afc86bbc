//! Imagery domain types and strict parsing of the model's interpretation reply

use serde::{Deserialize, Serialize};

use crate::{BlindboxError, Result};

/// Number of imagery combinations an interpretation must contain.
///
/// Hard contract from the remote model's instructed output shape, not
/// renegotiable at runtime.
pub const COMBINATION_COUNT: usize = 3;

/// Two concrete noun-phrase strings used as the creative unit throughout
/// the system. Value object, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageryPair {
    pub imagery1: String,
    pub imagery2: String,
}

impl ImageryPair {
    pub fn new(imagery1: impl Into<String>, imagery2: impl Into<String>) -> Self {
        Self {
            imagery1: imagery1.into(),
            imagery2: imagery2.into(),
        }
    }
}

/// One imagery pair with its id, as produced by name interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageryCombination {
    pub id: u32,
    pub imagery1: String,
    pub imagery2: String,
}

impl ImageryCombination {
    /// The imagery pair without the id.
    pub fn pair(&self) -> ImageryPair {
        ImageryPair::new(self.imagery1.clone(), self.imagery2.clone())
    }
}

/// An ordered sequence of exactly three imagery combinations.
///
/// Only constructed by parsing a model reply; the remote output is treated
/// as adversarial input, so any shape deviation (wrong count, missing
/// fields, ids not covering 1..=3) fails the parse instead of being
/// partially recovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Interpretation(Vec<ImageryCombination>);

impl Interpretation {
    /// Parse a raw model reply into an interpretation.
    ///
    /// The reply must be a JSON array of exactly three objects with integer
    /// `id` and two string imagery fields, ids forming the set {1, 2, 3}.
    pub fn from_reply(reply: &str) -> Result<Self> {
        let combinations: Vec<ImageryCombination> = serde_json::from_str(reply.trim())
            .map_err(|e| BlindboxError::ResponseParse(format!("invalid JSON reply: {e}")))?;

        if combinations.len() != COMBINATION_COUNT {
            return Err(BlindboxError::ResponseParse(format!(
                "expected exactly {COMBINATION_COUNT} combinations, got {}",
                combinations.len()
            )));
        }

        let mut ids: Vec<u32> = combinations.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        if ids != [1, 2, 3] {
            return Err(BlindboxError::ResponseParse(format!(
                "combination ids must cover 1..=3, got {ids:?}"
            )));
        }

        Ok(Self(combinations))
    }

    pub fn combinations(&self) -> &[ImageryCombination] {
        &self.0
    }

    pub fn into_combinations(self) -> Vec<ImageryCombination> {
        self.0
    }
}

impl IntoIterator for Interpretation {
    type Item = ImageryCombination;
    type IntoIter = std::vec::IntoIter<ImageryCombination>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One surviving blind-box item: a combination paired with its image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: u32,
    pub imagery1: String,
    pub imagery2: String,
    pub image_url: String,
}

impl GeneratedImage {
    pub fn new(combination: ImageryCombination, image_url: impl Into<String>) -> Self {
        Self {
            id: combination.id,
            imagery1: combination.imagery1,
            imagery2: combination.imagery2,
            image_url: image_url.into(),
        }
    }
}
