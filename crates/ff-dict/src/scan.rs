//! Lightweight token scanner for dictionary text.
//!
//! Only the structure needed to find stanzas is recognised: braces,
//! semicolons, and whitespace-separated words. `//` and `/* */` comments and
//! double-quoted strings are skipped so braces inside them do not count.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Open,
    Close,
    Semicolon,
    Word(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Zero-based line index.
    pub line: usize,
    /// Brace depth in effect before the token.
    pub depth: i64,
    pub kind: TokenKind,
}

/// A top-level stanza found by [`find_block`], as zero-based line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub keyword_line: usize,
    pub open_line: usize,
    pub close_line: usize,
    /// Something other than a comment follows the opening brace on its line.
    pub content_after_open: bool,
}

#[derive(Default)]
struct Scanner {
    tokens: Vec<Token>,
    depth: i64,
    in_block_comment: bool,
    in_string: bool,
    word: String,
    word_line: usize,
}

impl Scanner {
    fn flush_word(&mut self) {
        if !self.word.is_empty() {
            let word = std::mem::take(&mut self.word);
            self.tokens.push(Token {
                line: self.word_line,
                depth: self.depth,
                kind: TokenKind::Word(word),
            });
        }
    }

    fn push(&mut self, line: usize, kind: TokenKind) {
        self.flush_word();
        let depth = self.depth;
        match kind {
            TokenKind::Open => self.depth += 1,
            TokenKind::Close => self.depth -= 1,
            _ => {}
        }
        self.tokens.push(Token { line, depth, kind });
    }

    fn scan_line(&mut self, index: usize, line: &str) {
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            if self.in_block_comment {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }
            if self.in_string {
                match c {
                    '\\' => {
                        chars.next();
                    }
                    '"' => self.in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '/' if chars.peek() == Some(&'/') => {
                    self.flush_word();
                    break;
                }
                '/' if chars.peek() == Some(&'*') => {
                    self.flush_word();
                    chars.next();
                    self.in_block_comment = true;
                }
                '"' => {
                    self.flush_word();
                    self.in_string = true;
                }
                '{' => self.push(index, TokenKind::Open),
                '}' => self.push(index, TokenKind::Close),
                ';' => self.push(index, TokenKind::Semicolon),
                c if c.is_whitespace() => self.flush_word(),
                c => {
                    if self.word.is_empty() {
                        self.word_line = index;
                    }
                    self.word.push(c);
                }
            }
        }
        self.flush_word();
    }
}

pub fn scan(lines: &[String]) -> Vec<Token> {
    let mut scanner = Scanner::default();
    for (i, line) in lines.iter().enumerate() {
        scanner.scan_line(i, line);
    }
    scanner.tokens
}

/// Find the first top-level `name { ... }` stanza.
///
/// A top-level `name` not followed by `{` is an entry, not a block, and is
/// skipped. `Ok(None)` means there is no such stanza at depth zero.
pub fn find_block(lines: &[String], name: &str) -> crate::DictResult<Option<BlockSpan>> {
    let tokens = scan(lines);
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let is_keyword =
            token.depth == 0 && matches!(&token.kind, TokenKind::Word(w) if w == name);
        if !is_keyword {
            i += 1;
            continue;
        }

        let unterminated = || crate::DictError::UnterminatedBlock {
            name: name.to_string(),
            line: token.line + 1,
        };
        match tokens.get(i + 1) {
            None => return Err(unterminated()),
            Some(next) if next.kind == TokenKind::Open => {
                let close = tokens[i + 2..]
                    .iter()
                    .find(|t| t.kind == TokenKind::Close && t.depth == 1)
                    .ok_or_else(unterminated)?;
                let content_after_open = tokens.get(i + 2).is_some_and(|t| t.line == next.line);
                return Ok(Some(BlockSpan {
                    keyword_line: token.line,
                    open_line: next.line,
                    close_line: close.line,
                    content_after_open,
                }));
            }
            Some(_) => i += 1,
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::ControlDict;

    fn lines(text: &str) -> Vec<String> {
        ControlDict::parse(text).into_lines()
    }

    fn kinds(text: &str) -> Vec<TokenKind> {
        scan(&lines(text)).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn tokenizes_entries_and_braces() {
        use TokenKind::*;
        assert_eq!(
            kinds("a 1;\nb\n{\n  c (0 0 1);\n}\n"),
            vec![
                Word("a".into()),
                Word("1".into()),
                Semicolon,
                Word("b".into()),
                Open,
                Word("c".into()),
                Word("(0".into()),
                Word("0".into()),
                Word("1)".into()),
                Semicolon,
                Close,
            ]
        );
    }

    #[test]
    fn skips_comments_and_strings() {
        use TokenKind::*;
        assert_eq!(
            kinds("// { not\n/* {\n } */ x \"}{\";\n"),
            vec![Word("x".into()), Semicolon]
        );
    }

    #[test]
    fn records_depth_before_token() {
        let tokens = scan(&lines("a\n{\n b\n {\n }\n}\n"));
        let depths: Vec<i64> = tokens.iter().map(|t| t.depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 1, 2, 1]);
    }

    #[test]
    fn finds_block_on_separate_lines() {
        let l = lines("application foam;\nfunctions\n{\n    a\n    {\n    }\n}\n");
        assert_eq!(
            find_block(&l, "functions").unwrap(),
            Some(BlockSpan {
                keyword_line: 1,
                open_line: 2,
                close_line: 6,
                content_after_open: false,
            })
        );
    }

    #[test]
    fn finds_brace_on_keyword_line() {
        let l = lines("functions {\n}\n");
        let span = find_block(&l, "functions").unwrap().unwrap();
        assert_eq!((span.open_line, span.close_line), (0, 1));
        assert!(!span.content_after_open);
    }

    #[test]
    fn flags_content_after_opening_brace() {
        let l = lines("functions { probes\n    {\n    }\n}\n");
        let span = find_block(&l, "functions").unwrap().unwrap();
        assert!(span.content_after_open);

        let l = lines("functions { // forces below\n}\n");
        let span = find_block(&l, "functions").unwrap().unwrap();
        assert!(!span.content_after_open);
    }

    #[test]
    fn nested_keyword_is_ignored() {
        let l = lines("outer\n{\n    functions\n    {\n    }\n}\n");
        assert_eq!(find_block(&l, "functions").unwrap(), None);
    }

    #[test]
    fn keyword_entry_is_not_a_block() {
        let l = lines("functions none;\nfunctions\n{\n}\n");
        let span = find_block(&l, "functions").unwrap().unwrap();
        assert_eq!(span.keyword_line, 1);
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let l = lines("x 1;\nfunctions\n{\n  a 1;\n");
        assert_eq!(
            find_block(&l, "functions"),
            Err(crate::DictError::UnterminatedBlock {
                name: "functions".into(),
                line: 2
            })
        );
        let l = lines("functions\n");
        assert!(find_block(&l, "functions").is_err());
    }
}
