// crates/core/src/counter.rs
use alloc::string::String;

use crate::language::LineClassifier;
use crate::stats::CodeStat;

/// Count an in-memory text.
///
/// The classifier is reset first. A trailing newline does not produce an extra
/// empty line; a last line without one is still counted.
pub fn count_text<C: LineClassifier + ?Sized>(classifier: &mut C, text: &str) -> CodeStat {
    classifier.reset();
    text.split_inclusive('\n')
        .map(|line| CodeStat::from(classifier.classify_line(line)))
        .sum()
}

/// Count raw bytes, replacing invalid UTF-8 sequences.
pub fn count_bytes<C: LineClassifier + ?Sized>(classifier: &mut C, input: &[u8]) -> CodeStat {
    classifier.reset();
    input
        .split_inclusive(|&b| b == b'\n')
        .map(|line| CodeStat::from(classifier.classify_line(&String::from_utf8_lossy(line))))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{ClassifierRegistry, Language};

    const CPP_SOURCE: &str = "\
#include <stdio.h>

/*
 * Block comment
 */
int main() { // entry
    printf(\"/* not a comment */\\n\");
    return 0;
}
";

    #[test]
    fn counts_cpp_source() {
        let mut classifier = Language::CFamily.classifier();
        let stat = count_text(&mut classifier, CPP_SOURCE);
        assert_eq!(stat, CodeStat::new(9, 5, 4, 1));
    }

    #[test]
    fn empty_input_has_no_lines() {
        let mut classifier = Language::Go.classifier();
        assert_eq!(count_text(&mut classifier, ""), CodeStat::zero());
        assert_eq!(count_bytes(&mut classifier, b""), CodeStat::zero());
    }

    #[test]
    fn last_line_without_newline_is_counted() {
        let mut classifier = Language::Erlang.classifier();
        assert_eq!(count_text(&mut classifier, "a.\n% b"), CodeStat::new(2, 1, 1, 0));
        assert_eq!(count_text(&mut classifier, "a.\n% b\n"), CodeStat::new(2, 1, 1, 0));
        assert_eq!(count_text(&mut classifier, "a.\n\n"), CodeStat::new(2, 1, 0, 1));
    }

    #[test]
    fn crlf_line_endings() {
        let mut classifier = Language::CFamily.classifier();
        assert_eq!(count_text(&mut classifier, "x;\r\n\r\n// c\r\n"), CodeStat::new(3, 1, 1, 1));
    }

    #[test]
    fn counting_resets_leftover_state() {
        let mut classifier = Language::CFamily.classifier();
        count_text(&mut classifier, "/* never closed\n");
        assert!(classifier.is_in_spanning_construct());
        assert_eq!(count_text(&mut classifier, "int x;\n"), CodeStat::new(1, 1, 0, 0));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut classifier = ClassifierRegistry::new().classifier("go").unwrap();
        let stat = count_bytes(&mut classifier, b"x := \xff\n// \xfe\n");
        assert_eq!(stat, CodeStat::new(2, 1, 1, 0));
    }

    #[test]
    fn boxed_classifier_works() {
        let mut boxed: alloc::boxed::Box<dyn LineClassifier> =
            alloc::boxed::Box::new(Language::Go.classifier());
        let stat = count_text(boxed.as_mut(), "x := `\n\n`\n");
        assert_eq!(stat, CodeStat::new(3, 3, 0, 0));
    }
}
