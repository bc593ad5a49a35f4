// Letters are classified byte-wise: a, e, i, o, u are vowels, y is a vowel
// only when it follows a consonant, every other byte is a consonant.
#[inline]
fn is_strict_vowel(byte: u8) -> bool {
    matches!(byte, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn vowel_flags(stem: &[u8]) -> impl Iterator<Item = bool> + '_ {
    stem.iter().scan(None, |previous: &mut Option<bool>, &byte| {
        let vowel = match byte {
            b'y' => *previous == Some(false),
            _ => is_strict_vowel(byte),
        };

        *previous = Some(vowel);

        Some(vowel)
    })
}

/// Returns whether the byte at `index` of `word` is a vowel, given its
/// position. Out of range indices are never vowels.
pub fn is_vowel(word: &str, index: usize) -> bool {
    let bytes = word.as_bytes();

    match bytes.get(index) {
        None => false,
        Some(b'y') => {
            // NOTE: a run of y alternates, starting as a consonant when the
            // run opens the word or follows a vowel
            let run = bytes[..index]
                .iter()
                .rev()
                .take_while(|&&byte| byte == b'y')
                .count();

            let start = index - run;
            let opens_as_vowel = start > 0 && !is_strict_vowel(bytes[start - 1]);

            (run % 2 == 0) == opens_as_vowel
        }
        Some(&byte) => is_strict_vowel(byte),
    }
}

/// Number of VC repetitions of `stem` once decomposed as `[C](VC){m}[V]`.
pub fn measure(stem: &str) -> usize {
    let mut m = 0;
    let mut after_vowel = false;

    for vowel in vowel_flags(stem.as_bytes()) {
        if after_vowel && !vowel {
            m += 1;
        }

        after_vowel = vowel;
    }

    m
}

pub fn measure_at_least(stem: &str, k: usize) -> bool {
    measure(stem) >= k
}

pub fn has_vowel_in_stem(stem: &str) -> bool {
    vowel_flags(stem.as_bytes()).any(|vowel| vowel)
}

/// The `*o` condition: `stem` ends with consonant, vowel, consonant and the
/// last consonant is not w, x or y.
pub fn ends_with_cvc(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();

    if n < 3 || matches!(bytes[n - 1], b'w' | b'x' | b'y') {
        return false;
    }

    !is_vowel(stem, n - 3) && is_vowel(stem, n - 2) && !is_vowel(stem, n - 1)
}

/// The `*d` condition: `stem` ends with the same consonant twice. Only ASCII
/// letters count, so that dropping one of them is always a char boundary.
pub fn ends_with_double_consonant(stem: &str) -> bool {
    let bytes = stem.as_bytes();
    let n = bytes.len();

    n >= 2
        && bytes[n - 1] == bytes[n - 2]
        && bytes[n - 1].is_ascii_alphabetic()
        && !is_vowel(stem, n - 1)
}

pub fn measure_exactly_1_no_cvc(stem: &str) -> bool {
    measure(stem) == 1 && !ends_with_cvc(stem)
}
