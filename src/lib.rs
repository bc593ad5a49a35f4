pub mod porter;
mod tokens;

pub use porter::stem;
pub use tokens::{split_words, stem_tokens, Stems, StemsIteratorExt};
