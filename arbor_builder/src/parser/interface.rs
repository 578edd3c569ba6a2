use crate::constant::*;
use crate::parser::UsageError;

/// Renders two column rows: a left column padded to a common width, followed by free-form text.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    left: usize,
}

impl ColumnRenderer {
    /// Produce a renderer whose left column fits every label, plus the padding.
    pub(crate) fn fitting<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let widest = labels
            .into_iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);

        Self {
            indent: SECTION_INDENT,
            left: widest + COLUMN_PADDING,
        }
    }

    pub(crate) fn render(&self, left: &str, right: &str) -> String {
        let indent = self.indent;
        let width = self.left;
        format!("{:indent$}{left:width$}{right}", "")
            .trim_end()
            .to_string()
    }
}

/// The text sink for help messages and usage errors.
pub(crate) trait UserInterface: Send + Sync {
    fn print(&self, message: String);
    fn print_error(&self, error: &UsageError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &UsageError) {
        eprintln!("Usage error: {error}");
    }
}
