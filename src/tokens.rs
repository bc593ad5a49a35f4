use lazy_static::lazy_static;
use regex_automata::meta::Regex;

use crate::porter::stem;

lazy_static! {
    static ref NON_WORD_REGEX: Regex = Regex::new(r"[^A-Za-z0-9_]+").unwrap();
}

/// Splits `text` on every maximal run of non-word characters. A delimiter
/// run at either end yields an empty token.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    NON_WORD_REGEX
        .split(text)
        .map(|span| &text[span.start..span.end])
}

pub struct Stems<I> {
    inner: I,
}

impl<I> Iterator for Stems<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|word| stem(word.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

pub trait StemsIteratorExt: Iterator + Sized {
    fn stems(self) -> Stems<Self>;
}

impl<I: Iterator> StemsIteratorExt for I
where
    I::Item: AsRef<str>,
{
    fn stems(self) -> Stems<Self> {
        Stems { inner: self }
    }
}

pub fn stem_tokens(text: &str) -> Vec<String> {
    split_words(text).stems().collect()
}
