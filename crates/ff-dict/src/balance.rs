//! Brace balance and stanza counting.

use crate::scan::{TokenKind, scan};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceBalance {
    pub opens: usize,
    pub closes: usize,
    /// Lowest running depth; negative when a `}` appears before its `{`.
    pub min_depth: i64,
}

impl BraceBalance {
    pub fn depth(&self) -> i64 {
        self.opens as i64 - self.closes as i64
    }

    pub fn is_balanced(&self) -> bool {
        self.opens == self.closes && self.min_depth >= 0
    }
}

/// Count structural braces, ignoring those inside comments and strings.
pub fn brace_balance(lines: &[String]) -> BraceBalance {
    let mut balance = BraceBalance::default();
    let mut depth = 0i64;
    for token in scan(lines) {
        match token.kind {
            TokenKind::Open => {
                balance.opens += 1;
                depth += 1;
            }
            TokenKind::Close => {
                balance.closes += 1;
                depth -= 1;
                balance.min_depth = balance.min_depth.min(depth);
            }
            _ => {}
        }
    }
    balance
}

/// Number of `name { ... }` stanzas at any depth.
pub fn count_stanzas(lines: &[String], name: &str) -> usize {
    let tokens = scan(lines);
    tokens
        .windows(2)
        .filter(|pair| {
            matches!(&pair[0].kind, TokenKind::Word(w) if w == name)
                && pair[1].kind == TokenKind::Open
        })
        .count()
}
