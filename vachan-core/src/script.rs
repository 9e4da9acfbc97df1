//! Character classes for Devanagari text
//!
//! Shared by the segmenter (sentence delimiters, letter detection) and the
//! transliteration cleanup passes (script residue, combining marks).

use unicode_script::{Script, UnicodeScript};

/// Single danda, the Devanagari full stop
pub const DANDA: char = '\u{0964}';

/// Double danda, closes a verse or paragraph
pub const DOUBLE_DANDA: char = '\u{0965}';

/// Nukta sign
pub const NUKTA: char = '\u{093C}';

/// Abbreviation sign, punctuation inside the Devanagari block
const ABBREVIATION_SIGN: char = '\u{0970}';

/// Quote character that delimits dialogue
pub const QUOTE: char = '"';

/// Check if a character belongs to the Devanagari script
///
/// Dandas are shared with other Indic scripts and are not included.
pub fn is_devanagari(ch: char) -> bool {
    ch.script() == Script::Devanagari
}

/// Devanagari sentence-final punctuation (danda and double danda)
pub fn is_danda(ch: char) -> bool {
    ch == DANDA || ch == DOUBLE_DANDA
}

/// Latin sentence-final punctuation
pub fn is_latin_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Any character that closes a sentence outside a quote
pub fn is_sentence_terminator(ch: char) -> bool {
    is_danda(ch) || is_latin_terminator(ch)
}

/// Devanagari vowels, consonants, vowel signs and the nasal, virama and
/// nukta marks. Digits and the abbreviation sign are excluded.
fn is_devanagari_letter(ch: char) -> bool {
    is_devanagari(ch) && !is_danda(ch) && !ch.is_numeric() && ch != ABBREVIATION_SIGN
}

fn is_latin_letter(ch: char) -> bool {
    ch.script() == Script::Latin && ch.is_alphabetic()
}

/// Check if a character carries linguistic content
///
/// Used to tell real sentences from stray punctuation fragments.
pub fn is_letter(ch: char) -> bool {
    is_devanagari_letter(ch) || is_latin_letter(ch)
}

/// Check if a text contains at least one letter
pub fn has_letter(text: &str) -> bool {
    text.chars().any(is_letter)
}

/// Unicode combining diacritical marks block
pub fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}

/// Punctuation that attaches to the preceding word without a space
pub fn is_closing_punctuation(ch: char) -> bool {
    is_sentence_terminator(ch) || matches!(ch, '"' | ',' | ';' | ':' | ')' | ']')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danda_is_not_a_letter() {
        assert!(!is_letter(DANDA));
        assert!(!is_letter(DOUBLE_DANDA));
        assert!(is_danda(DANDA));
        assert!(is_sentence_terminator(DOUBLE_DANDA));
    }

    #[test]
    fn test_devanagari_letters() {
        for ch in "काय्ळो राब्तालो".chars().filter(|c| !c.is_whitespace()) {
            assert!(is_letter(ch), "{ch:?} should be a letter");
        }
        // Devanagari digits
        assert!(!is_letter('\u{0967}'));
        assert!(is_devanagari('\u{0967}'));
        assert!(!is_letter(ABBREVIATION_SIGN));
        assert!(is_letter(NUKTA));
        assert!(is_letter('\u{094D}'));
        assert!(!is_devanagari('k'));
    }

    #[test]
    fn test_latin_letters() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('ā'));
        assert!(is_letter('ḍ'));
        // Latin Extended-D and -E
        assert!(is_letter('\u{A7B5}'));
        assert!(is_letter('\u{AB64}'));
        assert!(!is_letter('1'));
        assert!(!is_letter('-'));
    }

    #[test]
    fn test_has_letter() {
        assert!(has_letter("- हांव"));
        assert!(!has_letter("।"));
        assert!(!has_letter(" - ... ! "));
        assert!(!has_letter(""));
    }

    #[test]
    fn test_combining_marks() {
        assert!(is_combining_mark('\u{0301}'));
        assert!(is_combining_mark('\u{0323}'));
        assert!(!is_combining_mark('ā'));
        assert!(!is_combining_mark(NUKTA));
    }

    #[test]
    fn test_closing_punctuation() {
        assert!(is_closing_punctuation(DANDA));
        assert!(is_closing_punctuation(','));
        assert!(!is_closing_punctuation('-'));
        assert!(!is_closing_punctuation('क'));
    }
}
