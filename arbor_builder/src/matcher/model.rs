use crate::api::BoundValue;

/// The two states of the binder's left-to-right scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scan {
    Ready,
    // The option (by schema index) which takes the next positional token as its value.
    AwaitingValue { option: usize },
}

/// Every option/argument of a command, after binding succeeds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bindings {
    pub(crate) options: Vec<BoundValue>,
    pub(crate) arguments: Vec<BoundValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    PrintHelp,
    Bound(Bindings),
}

/// The raw text of the final argument, kept so overflow may be folded into it.
#[derive(Debug, Default)]
pub(super) struct Trailing<'t> {
    tokens: Vec<&'t str>,
}

impl<'t> Trailing<'t> {
    pub(super) fn push(&mut self, token: &'t str) {
        self.tokens.push(token);
    }

    /// The joined text, only when more than the single token of the final argument was collected.
    pub(super) fn overflow(&self) -> Option<String> {
        if self.tokens.len() > 1 {
            Some(self.tokens.join(" "))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing() {
        let mut trailing = Trailing::default();
        assert_eq!(trailing.overflow(), None);

        trailing.push("hello");
        assert_eq!(trailing.overflow(), None);

        trailing.push("world");
        trailing.push("!");
        assert_eq!(trailing.overflow(), Some("hello world !".to_string()));
    }

    #[test]
    fn trailing_empty_tokens() {
        let mut trailing = Trailing::default();
        trailing.push("");
        trailing.push("");
        assert_eq!(trailing.overflow(), Some(" ".to_string()));
    }
}
