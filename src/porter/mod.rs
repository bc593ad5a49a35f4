// Reference:
// https://tartarus.org/martin/PorterStemmer/def.txt
//
// Article:
// M.F. Porter (1980) An algorithm for suffix stripping.
// Program (vol. 14 issue 3).
use std::borrow::Cow;

pub mod measure;
pub mod rules;
pub mod steps;

use steps::{step1, step2, step3, step4, step5, then, Step};

/// Stems an English word. Words of less than 3 characters are returned as
/// is; the algorithm expects lowercase letters, anything else is treated as
/// a consonant and never matches a suffix.
pub fn stem(word: &str) -> String {
    if word.chars().count() < 3 {
        return word.to_string();
    }

    let pipeline: [Step; 5] = [step1, step2, step3, step4, step5];
    let mut stemmed = Cow::Borrowed(word);

    for step in pipeline {
        stemmed = then(stemmed, step);
    }

    stemmed.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static VOCABULARY: [(&str, &str); 90] = [
        ("caresses", "caress"),
        ("ponies", "poni"),
        ("ties", "ti"),
        ("caress", "caress"),
        ("cats", "cat"),
        ("feed", "feed"),
        ("agreed", "agre"),
        ("plastered", "plaster"),
        ("bled", "bled"),
        ("motoring", "motor"),
        ("sing", "sing"),
        ("conflated", "conflat"),
        ("troubled", "troubl"),
        ("sized", "size"),
        ("hopping", "hop"),
        ("tanned", "tan"),
        ("falling", "fall"),
        ("hissing", "hiss"),
        ("fizzed", "fizz"),
        ("failing", "fail"),
        ("filing", "file"),
        ("happy", "happi"),
        ("sky", "sky"),
        ("relational", "relat"),
        ("conditional", "condit"),
        ("rational", "ration"),
        ("valenci", "valenc"),
        ("hesitanci", "hesit"),
        ("digitizer", "digit"),
        ("conformabli", "conform"),
        ("radicalli", "radic"),
        ("differentli", "differ"),
        ("vileli", "vile"),
        ("analogousli", "analog"),
        ("vietnamization", "vietnam"),
        ("predication", "predic"),
        ("operator", "oper"),
        ("feudalism", "feudal"),
        ("decisiveness", "decis"),
        ("hopefulness", "hope"),
        ("callousness", "callous"),
        ("formaliti", "formal"),
        ("sensitiviti", "sensit"),
        ("sensibiliti", "sensibl"),
        ("triplicate", "triplic"),
        ("formative", "form"),
        ("formalize", "formal"),
        ("electriciti", "electr"),
        ("electrical", "electr"),
        ("hopeful", "hope"),
        ("goodness", "good"),
        ("revival", "reviv"),
        ("allowance", "allow"),
        ("inference", "infer"),
        ("airliner", "airlin"),
        ("gyroscopic", "gyroscop"),
        ("adjustable", "adjust"),
        ("defensible", "defens"),
        ("irritant", "irrit"),
        ("replacement", "replac"),
        ("adjustment", "adjust"),
        ("dependent", "depend"),
        ("adoption", "adopt"),
        ("homologou", "homolog"),
        ("communism", "commun"),
        ("activate", "activ"),
        ("angulariti", "angular"),
        ("homologous", "homolog"),
        ("effective", "effect"),
        ("bowdlerize", "bowdler"),
        ("probate", "probat"),
        ("rate", "rate"),
        ("cease", "ceas"),
        ("controlling", "control"),
        ("roll", "roll"),
        ("generalization", "gener"),
        ("generalizations", "gener"),
        ("oscillators", "oscil"),
        ("relate", "relat"),
        ("pirate", "pirat"),
        ("necessitate", "necessit"),
        ("you", "you"),
        ("catastrophe", "catastroph"),
        ("anathema", "anathema"),
        ("mathematics", "mathemat"),
        ("adjective", "adject"),
        ("mushroom", "mushroom"),
        ("building", "build"),
        ("external", "extern"),
        ("exterior", "exterior"),
    ];

    #[test]
    fn test_stem() {
        for (word, expected) in VOCABULARY {
            assert_eq!(stem(word), expected, "{}", word);
        }
    }

    #[test]
    fn test_short_words() {
        for word in ["", "a", "is", "be", "ss", "ed", "y", "é", "Üs"] {
            assert_eq!(stem(word), word);
        }
    }

    #[test]
    fn test_initial_y() {
        assert_eq!(stem("yield"), "yield");
        assert_eq!(stem("yelling"), "yell");
        assert_eq!(stem("youth"), "youth");
    }

    #[test]
    fn test_length_bound() {
        let words = VOCABULARY
            .iter()
            .map(|(word, _)| *word)
            .chain(["ies", "eed", "ing", "yyyy", "sssss", "bliss", "über", "1990s"]);

        for word in words {
            assert!(stem(word).len() <= word.len(), "{}", word);
        }
    }

    #[test]
    fn test_determinism() {
        let first = VOCABULARY
            .iter()
            .map(|(word, _)| stem(word))
            .collect::<Vec<_>>();

        let second = VOCABULARY
            .iter()
            .rev()
            .map(|(word, _)| stem(word))
            .rev()
            .collect::<Vec<_>>();

        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_stemming() {
        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        VOCABULARY
                            .iter()
                            .map(|(word, _)| stem(word))
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();

            for handle in handles {
                let stems = handle.join().unwrap();

                for (stemmed, (word, expected)) in stems.iter().zip(VOCABULARY.iter()) {
                    assert_eq!(stemmed, expected, "{}", word);
                }
            }
        });
    }

    #[test]
    fn test_non_letters() {
        assert_eq!(stem("über"), "über");
        assert_eq!(stem("42nd"), "42nd");
        assert_eq!(stem("1990s"), "1990");
        assert_eq!(stem("--"), "--");
        assert_eq!(stem("Caresses"), "Caress");
        assert_eq!(stem("CATS"), "CATS");
    }
}
