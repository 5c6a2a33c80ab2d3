use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product as owned by the remote catalog service. The client never
/// mutates one; it only replaces its whole collection from a fresh read.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

/// Creation payload for `POST /products`. The type carries no `id` field,
/// so a serialized payload can never claim one; the service assigns it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub img: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidDraft {
    #[error("a required field is empty")]
    MissingField,

    #[error("price is not a number")]
    InvalidPrice,
}

/// The fields of a [`ProductDraft`], used to address single-field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Price,
    Description,
    Img,
}

/// The in-progress, not-yet-submitted form state. `price` keeps the raw
/// text of the number input; it is only parsed when the draft is turned
/// into a creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub img: String,
}

impl ProductDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Price => self.price = value,
            DraftField::Description => self.description = value,
            DraftField::Img => self.img = value,
        }
    }

    /// Validates the draft and converts it into a creation payload.
    ///
    /// Every field must be non-empty. A price of `"0"` is present and
    /// therefore valid; only the empty string counts as missing. Text that
    /// is not a number is rejected rather than serialized as garbage.
    pub fn to_new_product(&self) -> Result<NewProduct, InvalidDraft> {
        if self.title.is_empty()
            || self.price.is_empty()
            || self.description.is_empty()
            || self.img.is_empty()
        {
            return Err(InvalidDraft::MissingField);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| InvalidDraft::InvalidPrice)?;

        Ok(NewProduct {
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            img: self.img.clone(),
        })
    }
}
