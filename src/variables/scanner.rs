/*!
 * Lazy scanner for `{{name}}` placeholders.
 *
 * Matches the same spans as the pattern `\{\{([^}]+)\}\}` applied globally:
 * leftmost first, non-overlapping, name made of one or more non-`}`
 * characters (a name may contain `{`).
 */

use std::ops::Range;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A placeholder occurrence in scanned text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte span of the whole `{{name}}` token
    pub span: Range<usize>,
    /// Text between the braces
    pub name: &'a str,
}

/// Iterator over the placeholders of a string, left to right
#[derive(Debug, Clone)]
pub struct PlaceholderScanner<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> PlaceholderScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }
}

impl<'a> Iterator for PlaceholderScanner<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.text.len() {
            let start = self.position + self.text[self.position..].find(OPEN)?;
            let name_start = start + OPEN.len();

            // The name runs to the first '}', which must open the closing "}}"
            let candidate = self.text[name_start..]
                .find('}')
                .map(|offset| name_start + offset)
                .filter(|&name_end| name_end > name_start)
                .filter(|&name_end| self.text[name_end..].starts_with(CLOSE));

            match candidate {
                Some(name_end) => {
                    let end = name_end + CLOSE.len();
                    self.position = end;
                    return Some(Placeholder {
                        span: start..end,
                        name: &self.text[name_start..name_end],
                    });
                }
                // '{' is one byte, so start + 1 is a char boundary
                None => self.position = start + 1,
            }
        }
        None
    }
}

/// Scan `text` for placeholders
pub fn scan(text: &str) -> PlaceholderScanner<'_> {
    PlaceholderScanner::new(text)
}
