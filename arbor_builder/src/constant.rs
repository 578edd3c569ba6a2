pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Display the help text and exit.";

// Each help section sizes its label column to the widest label, plus this padding.
pub(crate) const COLUMN_PADDING: usize = 5;
pub(crate) const SECTION_INDENT: usize = 2;
