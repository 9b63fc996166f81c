//! Report rendering: builds the demo output as one string.
//!
//! Rendering is separated from printing so tests can assert on the
//! exact lines without capturing stdout.

use crate::demo;
use crate::text::TextProvider;

/// Render the full report: a greeting, the square of the meaning of
/// life, and one paragraph from the text provider.
pub fn render(text: &dyn TextProvider) -> String {
    let mut output = String::new();
    output.push_str("hello world\n");
    output.push_str(&format!("{}\n", demo::square(demo::life())));
    output.push_str(&format!("{}\n", text.paragraph()));
    output
}
