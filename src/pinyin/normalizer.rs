use std::sync::OnceLock;

use regex::Regex;

const BASIC_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Converts different formats of pinyin into a standard comparison string:
/// tone numbers (`ni3`) become tone marks (`nǐ`), then whitespace and
/// apostrophes are stripped. Already-accented input passes through the
/// digit scan untouched, so the function is idempotent.
pub fn normalize_pinyin(s: &str) -> String {
    // Work on a char vector: accented vowels are multi-byte, so byte
    // indexing into the partially rewritten string would split codepoints.
    let mut chars: Vec<char> = s.chars().collect();

    // Scan right to left so a deleted digit never shifts positions that
    // are still waiting to be processed.
    let mut i = chars.len();
    while i > 0 {
        i -= 1;
        let tone = match chars[i].to_digit(10) {
            Some(digit @ 1..=4) => digit,
            _ => continue,
        };

        let (start, end) = find_last_vowel_run(&chars, i);
        accent_vowel_run(&mut chars[start..end], tone);
        chars.remove(i);
    }

    strip_separators(&chars.into_iter().collect::<String>())
}

/// Finds the last adjacent run of 1-2 basic vowels before `digit_pos`,
/// scanning over any trailing consonants (`nin2` accents the `i`).
/// Returns `(start, end)` with `end` exclusive; the run is empty when no
/// vowel precedes the digit.
fn find_last_vowel_run(chars: &[char], digit_pos: usize) -> (usize, usize) {
    let mut end = digit_pos;
    while end > 0 && !is_basic_vowel(chars[end - 1]) {
        end -= 1;
    }

    let mut start = end;
    if start > 0 && is_basic_vowel(chars[start - 1]) {
        start -= 1;
        if start > 0 && is_basic_vowel(chars[start - 1]) {
            start -= 1;
        }
    }

    (start, end)
}

/// Places the tone mark on the correct vowel of a 1-2 vowel run, in
/// place. Runs outside the defined cases are left unmodified.
fn accent_vowel_run(run: &mut [char], tone: u32) {
    match run {
        [v] => *v = accent_vowel(*v, tone),
        [first, second] if is_basic_vowel(*first) && is_basic_vowel(*second) => {
            if *second == 'a' || *second == 'e' {
                // ia, ie, ua, ue
                *second = accent_vowel(*second, tone);
            } else if *first == 'a' || *first == 'e' {
                // ai, ao, ei
                *first = accent_vowel(*first, tone);
            } else if *second == 'i' || *second == 'o' {
                // ui, uo, io
                *second = accent_vowel(*second, tone);
            } else if *first == 'o' && *second == 'u' {
                *first = accent_vowel(*first, tone);
            } else if *first == 'i' && *second == 'u' {
                *second = accent_vowel(*second, tone);
            }
        }
        _ => {}
    }
}

/// Accented form of a single basic vowel. Tones outside 1-4 leave the
/// vowel unmarked.
fn accent_vowel(c: char, tone: u32) -> char {
    let marked = match c {
        'a' => ['ā', 'á', 'ǎ', 'à'],
        'e' => ['ē', 'é', 'ě', 'è'],
        'i' => ['ī', 'í', 'ǐ', 'ì'],
        'o' => ['ō', 'ó', 'ǒ', 'ò'],
        'u' => ['ū', 'ú', 'ǔ', 'ù'],
        _ => return c,
    };

    match tone {
        1..=4 => marked[(tone - 1) as usize],
        _ => c,
    }
}

fn is_basic_vowel(c: char) -> bool {
    BASIC_VOWELS.contains(&c)
}

fn strip_separators(s: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATORS.get_or_init(|| Regex::new(r"[\s']").unwrap());
    re.replace_all(s, "").into_owned()
}
