//! Standalone punctuation repair
//!
//! Segments without any letter are merged into a neighbour: backwards into
//! the previous accepted sentence when there is one, otherwise forwards into
//! the next raw segment. A fragment with no neighbour at all is kept so that
//! no input text is lost.

use crate::script::{has_letter, is_closing_punctuation};

/// Merge letter-free fragments into their neighbours
pub(crate) fn repair(segments: Vec<String>) -> Vec<String> {
    let total = segments.len();
    let mut accepted: Vec<String> = Vec::with_capacity(total);
    let mut carry: Option<String> = None;

    for (index, segment) in segments.into_iter().enumerate() {
        let segment = match carry.take() {
            Some(prefix) => format!("{prefix} {segment}"),
            None => segment,
        };

        if has_letter(&segment) {
            accepted.push(segment);
        } else if let Some(previous) = accepted.last_mut() {
            attach(previous, &segment);
        } else if index + 1 < total {
            carry = Some(segment);
        } else {
            log::debug!("Keeping standalone fragment {segment:?}, no neighbour to merge into");
            accepted.push(segment);
        }
    }

    accepted
}

/// Append a fragment to a sentence, without a space for closing punctuation
fn attach(sentence: &mut String, fragment: &str) {
    let tight = fragment.chars().next().is_some_and(is_closing_punctuation);
    if !tight {
        sentence.push(' ');
    }
    sentence.push_str(fragment);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_orphan_danda_merges_backwards() {
        let repaired = repair(owned(&["काय्ळो घरा होता", "।", "गुब्ची पळाली"]));
        assert_eq!(repaired, vec!["काय्ळो घरा होता।", "गुब्ची पळाली"]);
    }

    #[test]
    fn test_non_closing_fragment_is_space_joined() {
        let repaired = repair(owned(&["गुब्ची पळाली", "- -"]));
        assert_eq!(repaired, vec!["गुब्ची पळाली - -"]);
    }

    #[test]
    fn test_leading_fragment_merges_forwards() {
        let repaired = repair(owned(&["-", "गुब्ची पळाली।"]));
        assert_eq!(repaired, vec!["- गुब्ची पळाली।"]);
    }

    #[test]
    fn test_leading_fragments_chain_forwards() {
        let repaired = repair(owned(&["-", "…", "गुब्ची।"]));
        assert_eq!(repaired, vec!["- … गुब्ची।"]);
    }

    #[test]
    fn test_single_fragment_is_kept() {
        assert_eq!(repair(owned(&["।"])), vec!["।"]);
    }

    #[test]
    fn test_only_fragments_collapse_into_one() {
        assert_eq!(repair(owned(&["।", "!"])), vec!["। !"]);
    }

    #[test]
    fn test_clean_input_is_untouched() {
        let input = owned(&["काय्ळो राब्तालो।", "गुब्ची राब्तालि।"]);
        assert_eq!(repair(input.clone()), input);
    }

    #[test]
    fn test_empty_input() {
        assert!(repair(Vec::new()).is_empty());
    }
}
