pub mod product;

pub use product::{DraftField, InvalidDraft, NewProduct, Product, ProductDraft};
