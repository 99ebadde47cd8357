//! Word-level scan over method source text.
//!
//! A keyword counts only when a whole identifier run equals it, so
//! `supersede` or `_super` never match `super`. String literals and comments
//! are not skipped; a stray mention only costs an unneeded wrapper.
//! Identifier bytes are ASCII only, so a non-ASCII letter next to the
//! keyword is a boundary (`ésuper` matches).

struct WordCursor<'src> {
    source: &'src [u8],
    pos: usize,
}

impl<'src> WordCursor<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    /// Next maximal run of identifier bytes, skipping everything else.
    fn next_word(&mut self) -> Option<&'src [u8]> {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                break;
            }
            self.pos += 1;
        }
        let start = self.pos;
        while self.peek().is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        let source: &'src [u8] = self.source;
        let end = self.pos;
        (end > start).then(|| &source[start..end])
    }
}

pub fn mentions_keyword(source: &str, keyword: &str) -> bool {
    let mut cursor = WordCursor::new(source);
    while let Some(word) = cursor.next_word() {
        if word == keyword.as_bytes() {
            return true;
        }
    }
    false
}

pub fn is_identifier(text: &str) -> bool {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(first) if is_ident_start(first) => bytes.all(is_ident_continue),
        _ => false,
    }
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b'$'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'$'
}

#[cfg(test)]
mod tests {
    use super::{is_identifier, mentions_keyword};

    #[test]
    fn matches_standalone_keyword() {
        assert!(mentions_keyword("return 'child_' + this.super();", "super"));
        assert!(mentions_keyword("super", "super"));
        assert!(mentions_keyword("(super)", "super"));
    }

    #[test]
    fn ignores_keyword_inside_longer_identifiers() {
        assert!(!mentions_keyword("this.supersede(x)", "super"));
        assert!(!mentions_keyword("let _super = 1; superb();", "super"));
        assert!(!mentions_keyword("hyper_super2", "super"));
    }

    #[test]
    fn string_literals_still_count() {
        assert!(mentions_keyword("return \"a super deal\";", "super"));
    }

    #[test]
    fn non_ascii_letters_are_boundaries() {
        assert!(mentions_keyword("ésuper()", "super"));
        assert!(mentions_keyword("this.super→", "super"));
    }

    #[test]
    fn custom_keyword() {
        assert!(mentions_keyword("return self.base(1)", "base"));
        assert!(!mentions_keyword("return self.basement(1)", "base"));
    }

    #[test]
    fn identifier_validation() {
        assert!(is_identifier("super"));
        assert!(is_identifier("$base_1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1super"));
        assert!(!is_identifier("su per"));
    }
}
