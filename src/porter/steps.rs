use std::borrow::Cow;

use super::measure::{
    ends_with_cvc, ends_with_double_consonant, has_vowel_in_stem, measure, measure_at_least,
    measure_exactly_1_no_cvc,
};
use super::rules::{apply_rule, STEP2, STEP3, STEP4};

/// A single step of the algorithm.
pub type Step = for<'a> fn(&'a str) -> Cow<'a, str>;

/// Feeds the output of a previous step into the next one, keeping the
/// borrow when nothing had to be allocated.
pub fn then<'a>(word: Cow<'a, str>, step: Step) -> Cow<'a, str> {
    match word {
        Cow::Borrowed(w) => step(w),
        Cow::Owned(w) => Cow::Owned(step(&w).into_owned()),
    }
}

fn with_suffix(stem: &str, suffix: &str) -> String {
    let mut word = String::with_capacity(stem.len() + suffix.len());
    word.push_str(stem);
    word.push_str(suffix);
    word
}

// Step 1: plurals, -ed, -ing and terminal y
pub fn step1a(word: &str) -> Cow<str> {
    if word.ends_with("sses") || word.ends_with("ies") {
        return Cow::Borrowed(&word[..word.len() - 2]);
    }

    if word.ends_with("ss") {
        return Cow::Borrowed(word);
    }

    // NOTE: a lone s is kept
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => Cow::Borrowed(stem),
        _ => Cow::Borrowed(word),
    }
}

pub fn step1b(word: &str) -> Cow<str> {
    if let Some(stem) = word.strip_suffix("eed") {
        if measure_at_least(stem, 1) {
            return Cow::Borrowed(&word[..word.len() - 1]);
        }

        return Cow::Borrowed(word);
    }

    let stem = match word.strip_suffix("ed").or_else(|| word.strip_suffix("ing")) {
        Some(stem) if has_vowel_in_stem(stem) => stem,
        _ => return Cow::Borrowed(word),
    };

    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        Cow::Owned(with_suffix(stem, "e"))
    } else if ends_with_double_consonant(stem) && !stem.ends_with(['l', 's', 'z']) {
        Cow::Borrowed(&stem[..stem.len() - 1])
    } else if measure(stem) == 1 && ends_with_cvc(stem) {
        Cow::Owned(with_suffix(stem, "e"))
    } else {
        Cow::Borrowed(stem)
    }
}

pub fn step1c(word: &str) -> Cow<str> {
    match word.strip_suffix('y') {
        Some(stem) if has_vowel_in_stem(stem) => Cow::Owned(with_suffix(stem, "i")),
        _ => Cow::Borrowed(word),
    }
}

pub fn step1(word: &str) -> Cow<str> {
    then(then(step1a(word), step1b), step1c)
}

// Step 2: double suffixes, e.g. -ization (-ize plus -ation) becomes -ize
pub fn step2(word: &str) -> Cow<str> {
    STEP2.apply(word)
}

// Step 3: -ic-, -full, -ness etc.
pub fn step3(word: &str) -> Cow<str> {
    STEP3.apply(word)
}

// Step 4: -ant, -ence etc. in context <c>vcvc<v>
pub fn step4(word: &str) -> Cow<str> {
    if let Some(rule) = STEP4.longest_match(word) {
        return apply_rule(rule, word);
    }

    // -ion is only removed after s or t, which is kept
    if let Some(stem) = word.strip_suffix("ion") {
        if stem.ends_with(['s', 't']) && measure_at_least(stem, 2) {
            return Cow::Borrowed(stem);
        }
    }

    Cow::Borrowed(word)
}

// Step 5: final -e and -ll
pub fn step5a(word: &str) -> Cow<str> {
    match word.strip_suffix('e') {
        Some(stem) if measure_at_least(stem, 2) || measure_exactly_1_no_cvc(stem) => {
            Cow::Borrowed(stem)
        }
        _ => Cow::Borrowed(word),
    }
}

pub fn step5b(word: &str) -> Cow<str> {
    if word.ends_with("ll") && measure_at_least(word, 2) {
        return Cow::Borrowed(&word[..word.len() - 1]);
    }

    Cow::Borrowed(word)
}

pub fn step5(word: &str) -> Cow<str> {
    then(step5a(word), step5b)
}
