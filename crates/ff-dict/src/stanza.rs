//! Named stanzas with ordered entries.
//!
//! Rendering uses one tab per nesting level: the stanza name and its braces
//! sit at the stanza's own depth, entries one tab deeper, and key/value pairs
//! are written as `key<TAB>value;`.

#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    KeyValue { key: String, value: String },
    Stanza(Stanza),
    /// An empty separator line.
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stanza {
    pub name: String,
    pub entries: Vec<Entry>,
}

impl Stanza {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(Entry::KeyValue {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_stanza(mut self, stanza: Stanza) -> Self {
        self.entries.push(Entry::Stanza(stanza));
        self
    }

    pub fn with_blank(mut self) -> Self {
        self.entries.push(Entry::Blank);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            Entry::KeyValue { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn child(&self, name: &str) -> Option<&Stanza> {
        self.entries.iter().find_map(|e| match e {
            Entry::Stanza(s) if s.name == name => Some(s),
            _ => None,
        })
    }

    /// Serialize to newline-terminated lines with the stanza at `depth`.
    pub fn render_lines(&self, depth: usize) -> Vec<String> {
        let mut out = Vec::new();
        self.render_into(depth, &mut out);
        out
    }

    fn render_into(&self, depth: usize, out: &mut Vec<String>) {
        let indent = "\t".repeat(depth);
        out.push(format!("{indent}{}\n", self.name));
        out.push(format!("{indent}{{\n"));
        for entry in &self.entries {
            match entry {
                Entry::KeyValue { key, value } => {
                    out.push(format!("{indent}\t{key}\t{value};\n"));
                }
                Entry::Stanza(child) => child.render_into(depth + 1, out),
                Entry::Blank => out.push("\n".to_string()),
            }
        }
        out.push(format!("{indent}}}\n"));
    }
}
