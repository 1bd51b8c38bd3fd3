//! String analysis, editing, and comparison.
//!
//! Every function works on `char`s, never bytes, so positions and lengths
//! are in characters. Letter classes (vowels, consonants, case changes,
//! ciphers) are ASCII; other characters pass through unchanged.
//!
//! Buffers are sized from the input: there is no length cap on any
//! argument.

use crate::random::shuffle;
use rand::Rng;
use std::cmp::Ordering;

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

// ============================================================================
// Analysis
// ============================================================================

/// Counts ASCII vowels, either case.
///
/// # Examples
/// ```
/// use u_numkit::text::count_vowels;
/// assert_eq!(count_vowels("Hello World"), 3);
/// ```
pub fn count_vowels(s: &str) -> usize {
    s.chars()
        .filter(|c| VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

/// Counts ASCII letters that are not vowels.
pub fn count_consonants(s: &str) -> usize {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() && !VOWELS.contains(&c.to_ascii_lowercase()))
        .count()
}

/// Counts maximal runs of characters other than space, tab, and newline.
///
/// # Examples
/// ```
/// use u_numkit::text::count_words;
/// assert_eq!(count_words("  the quick\tbrown\nfox "), 4);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(s: &str) -> usize {
    s.split(is_word_separator).filter(|w| !w.is_empty()).count()
}

pub fn count_char(s: &str, ch: char) -> usize {
    s.chars().filter(|&c| c == ch).count()
}

/// Counts non-overlapping occurrences of `needle`, scanning left to right.
/// An empty needle counts as zero.
///
/// # Examples
/// ```
/// use u_numkit::text::count_substring;
/// assert_eq!(count_substring("aaaa", "aa"), 2);
/// assert_eq!(count_substring("abc", ""), 0);
/// ```
pub fn count_substring(s: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    s.matches(needle).count()
}

pub fn count_digits(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

/// Counts ASCII letters, either case.
pub fn count_alpha(s: &str) -> usize {
    s.chars().filter(char::is_ascii_alphabetic).count()
}

/// Counts `' '` only; tabs and newlines are not spaces here.
pub fn count_spaces(s: &str) -> usize {
    count_char(s, ' ')
}

/// Number of lines, one more than the number of `'\n'`; the empty string
/// has one line.
pub fn count_lines(s: &str) -> usize {
    1 + count_char(s, '\n')
}

/// Exact, case-sensitive palindrome check. The empty string qualifies.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

// ============================================================================
// Case
// ============================================================================

pub fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Upper-cases the first character of every word. Word boundaries are
/// space, tab, and newline; the rest of each word is left as is.
///
/// # Examples
/// ```
/// use u_numkit::text::capitalize_words;
/// assert_eq!(capitalize_words("hello wide\tworld"), "Hello Wide\tWorld");
/// assert_eq!(capitalize_words("mcDonald 2nd"), "McDonald 2nd");
/// ```
pub fn capitalize_words(s: &str) -> String {
    let mut at_word_start = true;
    s.chars()
        .map(|c| {
            if is_word_separator(c) {
                at_word_start = true;
                c
            } else if std::mem::take(&mut at_word_start) {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lexicographic comparison after ASCII lower-casing both sides.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()))
}

// ============================================================================
// Editing
// ============================================================================

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Removes every `' '`; other whitespace is kept.
pub fn remove_spaces(s: &str) -> String {
    remove_char(s, ' ')
}

pub fn remove_char(s: &str, ch: char) -> String {
    s.chars().filter(|&c| c != ch).collect()
}

/// Keeps only the first occurrence of each character.
///
/// # Examples
/// ```
/// use u_numkit::text::remove_duplicates;
/// assert_eq!(remove_duplicates("programming"), "progamin");
/// ```
pub fn remove_duplicates(s: &str) -> String {
    let mut seen = std::collections::HashSet::new();
    s.chars().filter(|&c| seen.insert(c)).collect()
}

/// Collapses each run of spaces into a single space.
pub fn compress_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        if c == ' ' && prev_space {
            continue;
        }
        prev_space = c == ' ';
        out.push(c);
    }
    out
}

/// Strips leading and trailing spaces and tabs only.
pub fn trim_blanks(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}

/// Reverses the order of space-separated words. Runs of spaces are kept,
/// mirrored along with the words.
///
/// # Examples
/// ```
/// use u_numkit::text::reverse_words;
/// assert_eq!(reverse_words("one two  three"), "three  two one");
/// ```
pub fn reverse_words(s: &str) -> String {
    s.split(' ').rev().collect::<Vec<_>>().join(" ")
}

/// Replaces the first occurrence of `from` with `to`. An empty `from`
/// leaves the string unchanged.
pub fn replace_first(s: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return s.to_string();
    }
    s.replacen(from, to, 1)
}

/// Removes the first occurrence of `needle`.
///
/// # Examples
/// ```
/// use u_numkit::text::remove_substring;
/// assert_eq!(remove_substring("one two one", "one "), "two one");
/// ```
pub fn remove_substring(s: &str, needle: &str) -> String {
    replace_first(s, needle, "")
}

/// Inserts `insert` before the character at `pos`.
///
/// # Returns
/// - `None` if `pos` is greater than the character length of `s`.
///
/// # Examples
/// ```
/// use u_numkit::text::insert_at;
/// assert_eq!(insert_at("helo", 2, "l").as_deref(), Some("hello"));
/// assert_eq!(insert_at("abc", 3, "d").as_deref(), Some("abcd"));
/// assert_eq!(insert_at("abc", 4, "d"), None);
/// ```
pub fn insert_at(s: &str, pos: usize, insert: &str) -> Option<String> {
    let byte_pos = char_to_byte(s, pos)?;
    let mut out = String::with_capacity(s.len() + insert.len());
    out.push_str(&s[..byte_pos]);
    out.push_str(insert);
    out.push_str(&s[byte_pos..]);
    Some(out)
}

/// Deletes up to `count` characters starting at `pos`; the range is
/// clipped to the string.
pub fn delete_range(s: &str, pos: usize, count: usize) -> String {
    s.chars()
        .enumerate()
        .filter(|&(i, _)| i < pos || i - pos >= count)
        .map(|(_, c)| c)
        .collect()
}

fn char_to_byte(s: &str, pos: usize) -> Option<usize> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(pos)
}

// ============================================================================
// Extraction
// ============================================================================

/// Up to `len` characters starting at character `start`. Empty when
/// `start` is at or past the end.
///
/// # Examples
/// ```
/// use u_numkit::text::substring;
/// assert_eq!(substring("Hello, World", 7, 5), "World");
/// assert_eq!(substring("Hello", 3, 10), "lo");
/// assert_eq!(substring("Hello", 5, 1), "");
/// ```
pub fn substring(s: &str, start: usize, len: usize) -> &str {
    let Some(from) = char_to_byte(s, start) else {
        return "";
    };
    let rest = &s[from..];
    let to = char_to_byte(rest, len).unwrap_or(rest.len());
    &rest[..to]
}

/// First `n` characters, or all of `s` if it is shorter.
pub fn left(s: &str, n: usize) -> &str {
    substring(s, 0, n)
}

/// Last `n` characters, or all of `s` if it is shorter.
pub fn right(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    substring(s, len - n.min(len), n)
}

// ============================================================================
// Layout
// ============================================================================

/// Left-pads with `fill` up to `width` characters.
pub fn pad_left(s: &str, width: usize, fill: char) -> String {
    let pad = width.saturating_sub(s.chars().count());
    std::iter::repeat(fill).take(pad).chain(s.chars()).collect()
}

/// Right-pads with `fill` up to `width` characters.
pub fn pad_right(s: &str, width: usize, fill: char) -> String {
    let pad = width.saturating_sub(s.chars().count());
    s.chars().chain(std::iter::repeat(fill).take(pad)).collect()
}

/// Centers `s` in `width` characters; an odd padding puts the extra
/// character on the right.
///
/// # Examples
/// ```
/// use u_numkit::text::center;
/// assert_eq!(center("ab", 5, '*'), "*ab**");
/// assert_eq!(center("abcdef", 3, '*'), "abcdef");
/// ```
pub fn center(s: &str, width: usize, fill: char) -> String {
    let total = width.saturating_sub(s.chars().count());
    let left = total / 2;
    std::iter::repeat(fill)
        .take(left)
        .chain(s.chars())
        .chain(std::iter::repeat(fill).take(total - left))
        .collect()
}

// ============================================================================
// Rotation and ciphers
// ============================================================================

/// Moves the first `k` characters (modulo the length) to the end.
///
/// # Examples
/// ```
/// use u_numkit::text::rotate_left;
/// assert_eq!(rotate_left("abcdef", 2), "cdefab");
/// assert_eq!(rotate_left("abc", 7), "bca");
/// ```
pub fn rotate_left(s: &str, k: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if !chars.is_empty() {
        let k = k % chars.len();
        chars.rotate_left(k);
    }
    chars.into_iter().collect()
}

/// Moves the last `k` characters (modulo the length) to the front.
pub fn rotate_right(s: &str, k: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if !chars.is_empty() {
        let k = k % chars.len();
        chars.rotate_right(k);
    }
    chars.into_iter().collect()
}

/// Caesar cipher over ASCII letters; case is preserved and negative shifts
/// wrap.
///
/// # Examples
/// ```
/// use u_numkit::text::caesar;
/// assert_eq!(caesar("Hello, World!", 3), "Khoor, Zruog!");
/// assert_eq!(caesar("abc", -1), "zab");
/// ```
pub fn caesar(s: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    s.chars()
        .map(|c| {
            let base = if c.is_ascii_lowercase() {
                b'a'
            } else if c.is_ascii_uppercase() {
                b'A'
            } else {
                return c;
            };
            char::from(base + (c as u8 - base + shift) % 26)
        })
        .collect()
}

/// ROT13; applying it twice gives back the input.
pub fn rot13(s: &str) -> String {
    caesar(s, 13)
}

/// Random permutation of the characters of `s`.
pub fn shuffle_chars<R: Rng>(s: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    shuffle(&mut chars, rng);
    chars.into_iter().collect()
}

// ============================================================================
// Tokens
// ============================================================================

/// Splits on `delim`, dropping empty tokens.
///
/// # Examples
/// ```
/// use u_numkit::text::split_tokens;
/// assert_eq!(split_tokens(",a,,b,", ','), vec!["a", "b"]);
/// ```
pub fn split_tokens(s: &str, delim: char) -> Vec<&str> {
    s.split(delim).filter(|t| !t.is_empty()).collect()
}

pub fn join(tokens: &[&str], delim: &str) -> String {
    tokens.join(delim)
}

// ============================================================================
// Comparison
// ============================================================================

/// Longest common prefix, as a slice of `a`.
///
/// # Examples
/// ```
/// use u_numkit::text::longest_common_prefix;
/// assert_eq!(longest_common_prefix("interstellar", "internet"), "inter");
/// ```
pub fn longest_common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or_else(
            || {
                // one string is a prefix of the other
                let shared = a.chars().count().min(b.chars().count());
                char_to_byte(a, shared).unwrap_or(a.len())
            },
            |((i, _), _)| i,
        );
    &a[..end]
}

/// Longest common suffix, as a slice of `a`.
pub fn longest_common_suffix<'a>(a: &'a str, b: &str) -> &'a str {
    let matched: usize = a
        .chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(ca, cb)| ca == cb)
        .map(|(ca, _)| ca.len_utf8())
        .sum();
    &a[a.len() - matched..]
}

// ============================================================================
// Metrics
// ============================================================================

/// Number of positions at which the characters differ.
///
/// # Returns
/// - `None` if the strings have different character lengths.
///
/// # Examples
/// ```
/// use u_numkit::text::hamming_distance;
/// assert_eq!(hamming_distance("karolin", "kathrin"), Some(3));
/// assert_eq!(hamming_distance("abc", "ab"), None);
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    if a.chars().count() != b.chars().count() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Minimum number of single-character insertions, deletions, and
/// substitutions turning `a` into `b`.
///
/// # Complexity
/// O(|a|·|b|) time, O(|b|) space (two DP rows).
///
/// # Examples
/// ```
/// use u_numkit::text::levenshtein_distance;
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

// ============================================================================
// Validation
// ============================================================================

/// Non-empty and only ASCII letters.
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Non-empty and only ASCII digits.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

pub fn is_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Non-empty and free of ASCII upper-case letters; digits and punctuation
/// are allowed.
pub fn is_lowercase(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_ascii_uppercase())
}

/// Non-empty and free of ASCII lower-case letters.
pub fn is_uppercase(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_ascii_lowercase())
}

/// Non-empty and only spaces, tabs, carriage returns, and newlines.
pub fn is_blank(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_counts() {
        assert_eq!(count_vowels("AEIOU xyz"), 5);
        assert_eq!(count_consonants("Hello World"), 7);
        assert_eq!(count_consonants("123 !?"), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words(" \t\n "), 0);
        assert_eq!(count_char("banana", 'a'), 3);
        assert_eq!(count_substring("abababa", "aba"), 2);
        assert_eq!(count_substring("abc", "abcd"), 0);
        assert_eq!(count_lines(""), 1);
        assert_eq!(count_lines("a\nb\n"), 3);
    }

    #[test]
    fn test_class_counts() {
        assert_eq!(count_digits("a1b22c333"), 6);
        assert_eq!(count_alpha("a1b22c333 Z"), 4);
        assert_eq!(count_spaces(" a\tb c "), 3);
        assert_eq!(count_digits(""), 0);
    }

    #[test]
    fn test_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("abba"));
        assert!(!is_palindrome("Abba"));
        assert!(!is_palindrome("abc"));
    }

    #[test]
    fn test_case() {
        assert_eq!(swap_case("Hello, World 1"), "hELLO, wORLD 1");
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("  two  spaces"), "  Two  Spaces");
        assert_eq!(capitalize_first("hello world"), "Hello world");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("émile"), "émile");
    }

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare_ignore_case("Hello", "hELLO"), Ordering::Equal);
        assert_eq!(compare_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_ignore_case("abc", "ab"), Ordering::Greater);
    }

    #[test]
    fn test_removals() {
        assert_eq!(reverse("abc"), "cba");
        assert_eq!(remove_spaces(" a b\tc "), "ab\tc");
        assert_eq!(remove_char("mississippi", 's'), "miiippi");
        assert_eq!(remove_duplicates(""), "");
        assert_eq!(remove_duplicates("aabbcc"), "abc");
        assert_eq!(compress_spaces("a   b    c"), "a b c");
        assert_eq!(compress_spaces("  lead"), " lead");
        assert_eq!(trim_blanks(" \t text \t "), "text");
        assert_eq!(trim_blanks("\nkeep\n"), "\nkeep\n");
    }

    #[test]
    fn test_reverse_words() {
        assert_eq!(reverse_words("hello world"), "world hello");
        assert_eq!(reverse_words("single"), "single");
        assert_eq!(reverse_words(" lead"), "lead ");
        assert_eq!(reverse_words(""), "");
    }

    #[test]
    fn test_replace_first() {
        assert_eq!(replace_first("a-b-c", "-", "+"), "a+b-c");
        assert_eq!(replace_first("abc", "x", "y"), "abc");
        assert_eq!(replace_first("abc", "", "y"), "abc");
    }

    #[test]
    fn test_remove_substring() {
        assert_eq!(remove_substring("hello world", "o"), "hell world");
        assert_eq!(remove_substring("abc", "x"), "abc");
        assert_eq!(remove_substring("abc", ""), "abc");
    }

    #[test]
    fn test_extraction() {
        assert_eq!(substring("abcdef", 1, 3), "bcd");
        assert_eq!(substring("abcdef", 0, 0), "");
        assert_eq!(substring("abcdef", 9, 2), "");
        assert_eq!(substring("héllo", 1, 2), "él");
        assert_eq!(left("abcdef", 2), "ab");
        assert_eq!(left("ab", 5), "ab");
        assert_eq!(right("abcdef", 2), "ef");
        assert_eq!(right("ab", 5), "ab");
        assert_eq!(right("abc", 0), "");
        assert_eq!(right("", 3), "");
    }

    #[test]
    fn test_insert_and_delete() {
        assert_eq!(insert_at("", 0, "x").as_deref(), Some("x"));
        assert_eq!(insert_at("héllo", 2, "-").as_deref(), Some("hé-llo"));
        assert_eq!(delete_range("abcdef", 1, 2), "adef");
        assert_eq!(delete_range("abcdef", 4, 100), "abcd");
        assert_eq!(delete_range("abc", 5, 1), "abc");
        assert_eq!(delete_range("abc", 0, 0), "abc");
    }

    #[test]
    fn test_padding() {
        assert_eq!(pad_left("42", 5, '0'), "00042");
        assert_eq!(pad_right("ab", 4, '.'), "ab..");
        assert_eq!(pad_left("long", 2, ' '), "long");
        assert_eq!(center("abc", 7, '-'), "--abc--");
        assert_eq!(center("", 3, '+'), "+++");
    }

    #[test]
    fn test_rotation() {
        assert_eq!(rotate_right("abcdef", 2), "efabcd");
        assert_eq!(rotate_left("", 3), "");
        assert_eq!(rotate_left("abc", 3), "abc");
    }

    #[test]
    fn test_ciphers() {
        assert_eq!(rot13("Hello"), "Uryyb");
        assert_eq!(rot13(&rot13("Round trip!")), "Round trip!");
        assert_eq!(caesar("xyz", 3), "abc");
        assert_eq!(caesar("abc", 26), "abc");
        assert_eq!(caesar("abc", -27), "zab");
        assert_eq!(caesar("ñ", 5), "ñ");
    }

    #[test]
    fn test_shuffle_chars() {
        let mut rng = create_rng(5);
        let s = "the quick brown fox";
        let shuffled = shuffle_chars(s, &mut rng);
        let mut a: Vec<char> = s.chars().collect();
        let mut b: Vec<char> = shuffled.chars().collect();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert_eq!(shuffle_chars("", &mut rng), "");
    }

    #[test]
    fn test_tokens() {
        assert_eq!(split_tokens("a b  c", ' '), vec!["a", "b", "c"]);
        assert!(split_tokens("", ',').is_empty());
        assert!(split_tokens(",,,", ',').is_empty());
        assert_eq!(join(&["a", "b", "c"], ", "), "a, b, c");
        assert_eq!(join(&[], "-"), "");
    }

    #[test]
    fn test_common_affixes() {
        assert_eq!(longest_common_prefix("abc", "abd"), "ab");
        assert_eq!(longest_common_prefix("abc", "abcdef"), "abc");
        assert_eq!(longest_common_prefix("abcdef", "abc"), "abc");
        assert_eq!(longest_common_prefix("xyz", "abc"), "");
        assert_eq!(longest_common_prefix("", "abc"), "");
        assert_eq!(longest_common_suffix("testing", "running"), "ing");
        assert_eq!(longest_common_suffix("abc", "abc"), "abc");
        assert_eq!(longest_common_suffix("café", "thé"), "é");
        assert_eq!(longest_common_suffix("abc", "xyz"), "");
    }

    #[test]
    fn test_distances() {
        assert_eq!(hamming_distance("", ""), Some(0));
        assert_eq!(hamming_distance("1011101", "1001001"), Some(2));
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_levenshtein_long_input() {
        let a = "a".repeat(300);
        let b = "b".repeat(250);
        assert_eq!(levenshtein_distance(&a, &b), 300);
    }

    #[test]
    fn test_validation() {
        assert!(is_alphabetic("Hello"));
        assert!(!is_alphabetic("Hello1"));
        assert!(!is_alphabetic(""));
        assert!(is_numeric("0123"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric(""));
        assert!(is_alphanumeric("abc123"));
        assert!(!is_alphanumeric("abc 123"));
        assert!(is_lowercase("abc 123"));
        assert!(!is_lowercase("abC"));
        assert!(!is_lowercase(""));
        assert!(is_uppercase("ABC-1"));
        assert!(!is_uppercase("ABc"));
        assert!(!is_uppercase(""));
        assert!(is_blank(" \t\r\n"));
        assert!(!is_blank(""));
        assert!(!is_blank(" x "));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn levenshtein_symmetric(a in "[a-d]{0,12}", b in "[a-d]{0,12}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn levenshtein_zero_iff_equal(a in "[a-c]{0,8}", b in "[a-c]{0,8}") {
            prop_assert_eq!(levenshtein_distance(&a, &b) == 0, a == b);
        }

        #[test]
        fn levenshtein_bounded(a in "\\PC{0,15}", b in "\\PC{0,15}") {
            let bound = a.chars().count().max(b.chars().count());
            prop_assert!(levenshtein_distance(&a, &b) <= bound);
        }

        #[test]
        fn hamming_bounds_levenshtein(a in "[a-e]{10}", b in "[a-e]{10}") {
            let h = hamming_distance(&a, &b).unwrap();
            prop_assert!(h >= levenshtein_distance(&a, &b));
        }

        #[test]
        fn rotations_invert(s in "\\PC{0,20}", k in 0_usize..50) {
            prop_assert_eq!(rotate_right(&rotate_left(&s, k), k), s);
        }

        #[test]
        fn caesar_inverts(s in "[ -~]{0,30}", k in -100_i32..100) {
            prop_assert_eq!(caesar(&caesar(&s, k), -k), s);
        }

        #[test]
        fn padding_reaches_width(s in "[a-z]{0,10}", width in 0_usize..20) {
            let expected = width.max(s.chars().count());
            prop_assert_eq!(pad_left(&s, width, '*').chars().count(), expected);
            prop_assert_eq!(pad_right(&s, width, '*').chars().count(), expected);
            prop_assert_eq!(center(&s, width, '*').chars().count(), expected);
        }

        #[test]
        fn reverse_words_is_involution(s in "[a-z ]{0,30}") {
            prop_assert_eq!(reverse_words(&reverse_words(&s)), s);
        }

        #[test]
        fn left_and_right_split_the_string(s in "\\PC{0,20}", n in 0_usize..25) {
            let len = s.chars().count();
            let k = n.min(len);
            let joined = format!("{}{}", left(&s, k), right(&s, len - k));
            prop_assert_eq!(joined, s);
        }

        #[test]
        fn common_prefix_is_prefix_of_both(a in "[ab]{0,10}", b in "[ab]{0,10}") {
            let p = longest_common_prefix(&a, &b);
            prop_assert!(a.starts_with(p));
            prop_assert!(b.starts_with(p));
        }
    }
}
