use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::HashMap;

use lazy_static::lazy_static;

use super::measure::measure_at_least;

/// Required measure of the remaining stem, suffix and its replacement
/// (`None` when the suffix is simply removed).
pub type Rule = (usize, &'static str, Option<&'static str>);

type Rules<const N: usize> = [Rule; N];

static STEP2_RULES: Rules<21> = [
    (1, "ational", Some("ate")),
    (1, "tional", Some("tion")),
    (1, "enci", Some("ence")),
    (1, "anci", Some("ance")),
    (1, "izer", Some("ize")),
    (1, "bli", Some("ble")),
    (1, "alli", Some("al")),
    (1, "entli", Some("ent")),
    (1, "eli", Some("e")),
    (1, "ousli", Some("ous")),
    (1, "ization", Some("ize")),
    (1, "ation", Some("ate")),
    (1, "ator", Some("ate")),
    (1, "alism", Some("al")),
    (1, "iveness", Some("ive")),
    (1, "fulness", Some("ful")),
    (1, "ousness", Some("ous")),
    (1, "aliti", Some("al")),
    (1, "iviti", Some("ive")),
    (1, "biliti", Some("ble")),
    (1, "logi", Some("log")),
];

static STEP3_RULES: Rules<7> = [
    (1, "icate", Some("ic")),
    (1, "ative", None),
    (1, "alize", Some("al")),
    (1, "iciti", Some("ic")),
    (1, "ical", Some("ic")),
    (1, "ful", None),
    (1, "ness", None),
];

static STEP4_RULES: Rules<18> = [
    (2, "al", None),
    (2, "ance", None),
    (2, "ence", None),
    (2, "er", None),
    (2, "ic", None),
    (2, "able", None),
    (2, "ible", None),
    (2, "ant", None),
    (2, "ement", None),
    (2, "ment", None),
    (2, "ent", None),
    (2, "ou", None),
    (2, "ism", None),
    (2, "ate", None),
    (2, "iti", None),
    (2, "ous", None),
    (2, "ive", None),
    (2, "ize", None),
];

/// Rules indexed by the penultimate letter of their suffix, longest suffix
/// first within each bucket.
pub struct SuffixTable {
    buckets: HashMap<u8, Vec<Rule>>,
}

impl SuffixTable {
    pub fn new(rules: &[Rule]) -> Self {
        let mut buckets: HashMap<u8, Vec<Rule>> = HashMap::new();

        for rule in rules {
            let suffix = rule.1.as_bytes();

            // NOTE: every suffix has at least two letters
            buckets
                .entry(suffix[suffix.len() - 2])
                .or_default()
                .push(*rule);
        }

        for bucket in buckets.values_mut() {
            bucket.sort_by_key(|rule| Reverse(rule.1.len()));
        }

        Self { buckets }
    }

    /// Longest rule whose suffix ends `word`, whether or not its measure
    /// condition holds.
    pub fn longest_match(&self, word: &str) -> Option<&Rule> {
        let bytes = word.as_bytes();

        if bytes.len() < 2 {
            return None;
        }

        self.buckets
            .get(&bytes[bytes.len() - 2])?
            .iter()
            .find(|rule| word.ends_with(rule.1))
    }

    pub fn apply<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self.longest_match(word) {
            Some(rule) => apply_rule(rule, word),
            None => Cow::Borrowed(word),
        }
    }
}

/// Rewrites the suffix of `word` if what remains before it satisfies the
/// measure condition. `word` must end with the rule's suffix.
pub fn apply_rule<'a>(rule: &Rule, word: &'a str) -> Cow<'a, str> {
    let (min, suffix, replacement) = rule;
    let stem = &word[..word.len() - suffix.len()];

    if !measure_at_least(stem, *min) {
        return Cow::Borrowed(word);
    }

    match replacement {
        Some(r) => {
            let mut new_word = String::with_capacity(stem.len() + r.len());
            new_word.push_str(stem);
            new_word.push_str(r);

            Cow::Owned(new_word)
        }
        None => Cow::Borrowed(stem),
    }
}

lazy_static! {
    pub static ref STEP2: SuffixTable = SuffixTable::new(&STEP2_RULES);
    pub static ref STEP3: SuffixTable = SuffixTable::new(&STEP3_RULES);
    pub static ref STEP4: SuffixTable = SuffixTable::new(&STEP4_RULES);
}
