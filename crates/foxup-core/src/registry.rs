//! Inline command registry.
//!
//! Each command is a single character bound to a pure handler. A handler
//! receives the optional numeric argument that followed the command and the
//! current close-tag stack, and gives back the opening markup together with
//! the updated stack. Handlers never look at the line itself, so each one can
//! be tested on its own.

/// Closing markup for commands opened earlier on the current line.
///
/// The stack is passed by value through the line scanner and the handlers;
/// every new line starts with an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStack {
    closers: Vec<&'static str>,
}

impl TagStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.closers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closers.is_empty()
    }

    /// Closers in push order.
    #[inline]
    pub fn as_slice(&self) -> &[&'static str] {
        &self.closers
    }

    /// Push a closer and return the grown stack.
    #[inline]
    pub fn push(mut self, closer: &'static str) -> Self {
        self.closers.push(closer);
        self
    }

    /// Pop up to `count` closers, most recent first, and concatenate them.
    pub fn pop_many(mut self, count: usize) -> (String, Self) {
        let keep = self.closers.len().saturating_sub(count);
        let markup = self.closers.drain(keep..).rev().collect();
        (markup, self)
    }

    /// Pop every closer, most recent first.
    pub fn pop_all(self) -> (String, Self) {
        let count = self.len();
        self.pop_many(count)
    }
}

/// What a handler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Markup to emit in place of the command.
    pub markup: String,
    /// Stack after the command.
    pub stack: TagStack,
    /// Set when a required argument was absent; `markup` is then empty.
    pub missing_argument: bool,
}

impl Expansion {
    fn emit(markup: impl Into<String>, stack: TagStack) -> Self {
        Self {
            markup: markup.into(),
            stack,
            missing_argument: false,
        }
    }

    fn missing(stack: TagStack) -> Self {
        Self {
            markup: String::new(),
            stack,
            missing_argument: true,
        }
    }
}

/// Handler signature shared by every command.
pub type Handler = fn(Option<u64>, TagStack) -> Expansion;

/// One registry row.
#[derive(Clone, Copy)]
pub struct Command {
    pub key: char,
    /// Name used in diagnostics.
    pub name: &'static str,
    pub handler: Handler,
}

/// Every known command.
pub static COMMANDS: [Command; 5] = [
    Command { key: 'b', name: "bold", handler: bold },
    Command { key: 'i', name: "italic", handler: italic },
    Command { key: 's', name: "size", handler: size },
    Command { key: '|', name: "table", handler: cell },
    Command { key: 'R', name: "reverse", handler: reverse },
];

/// Find the command bound to `c`.
#[inline]
pub fn lookup(c: char) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.key == c)
}

/// `b`: bold.
pub fn bold(_arg: Option<u64>, stack: TagStack) -> Expansion {
    Expansion::emit("<b>", stack.push("</b>"))
}

/// `i`: italic, rendered as emphasis.
pub fn italic(_arg: Option<u64>, stack: TagStack) -> Expansion {
    Expansion::emit("<em>", stack.push("</em>"))
}

/// `s<px>`: font size in pixels. A zero size counts as missing.
pub fn size(arg: Option<u64>, stack: TagStack) -> Expansion {
    match arg.filter(|&px| px > 0) {
        Some(px) => Expansion::emit(
            format!("<span style='font-size:{}px'>", px),
            stack.push("</span>"),
        ),
        None => Expansion::missing(stack),
    }
}

/// `|`: table cell boundary. Leaves the stack alone.
pub fn cell(_arg: Option<u64>, stack: TagStack) -> Expansion {
    Expansion::emit("</td><td>", stack)
}

/// `R[n]`: close the `n` most recent commands, or all of them without `n`.
pub fn reverse(arg: Option<u64>, stack: TagStack) -> Expansion {
    let (markup, stack) = match arg.filter(|&n| n > 0) {
        Some(n) => stack.pop_many(usize::try_from(n).unwrap_or(usize::MAX)),
        None => stack.pop_all(),
    };
    Expansion::emit(markup, stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(closers: &[&'static str]) -> TagStack {
        closers.iter().fold(TagStack::new(), |s, &c| s.push(c))
    }

    #[test]
    fn bold_and_italic_push_their_closers() {
        let out = bold(None, TagStack::new());
        assert_eq!(out.markup, "<b>");
        let out = italic(None, out.stack);
        assert_eq!(out.markup, "<em>");
        assert_eq!(out.stack.as_slice(), &["</b>", "</em>"]);
    }

    #[test]
    fn size_requires_a_positive_argument() {
        let out = size(Some(12), TagStack::new());
        assert_eq!(out.markup, "<span style='font-size:12px'>");
        assert_eq!(out.stack.as_slice(), &["</span>"]);
        assert!(!out.missing_argument);

        for arg in [None, Some(0)] {
            let out = size(arg, stack_of(&["</b>"]));
            assert!(out.markup.is_empty());
            assert!(out.missing_argument);
            assert_eq!(out.stack.len(), 1);
        }
    }

    #[test]
    fn cell_does_not_touch_the_stack() {
        let out = cell(Some(3), stack_of(&["</b>"]));
        assert_eq!(out.markup, "</td><td>");
        assert_eq!(out.stack, stack_of(&["</b>"]));
    }

    #[test]
    fn reverse_without_count_empties_most_recent_first() {
        let out = reverse(None, stack_of(&["</b>", "</em>", "</span>"]));
        assert_eq!(out.markup, "</span></em></b>");
        assert!(out.stack.is_empty());
    }

    #[test]
    fn reverse_with_count_pops_that_many() {
        let out = reverse(Some(2), stack_of(&["</b>", "</em>", "</span>"]));
        assert_eq!(out.markup, "</span></em>");
        assert_eq!(out.stack.as_slice(), &["</b>"]);
    }

    #[test]
    fn reverse_over_pop_is_clamped() {
        let out = reverse(Some(9), stack_of(&["</b>"]));
        assert_eq!(out.markup, "</b>");
        assert!(out.stack.is_empty());

        let out = reverse(Some(1), TagStack::new());
        assert_eq!(out.markup, "");

        let out = reverse(Some(u64::MAX), stack_of(&["</b>", "</em>"]));
        assert_eq!(out.markup, "</em></b>");
        assert!(out.stack.is_empty());
    }

    #[test]
    fn reverse_emits_placeholders_as_nothing() {
        let out = reverse(Some(1), stack_of(&["</b>", ""]));
        assert_eq!(out.markup, "");
        assert_eq!(out.stack.as_slice(), &["</b>"]);
    }

    #[test]
    fn lookup_knows_every_command() {
        for c in ['b', 'i', 's', '|', 'R'] {
            assert_eq!(lookup(c).map(|cmd| cmd.key), Some(c));
        }
        assert!(lookup('x').is_none());
        assert!(lookup('.').is_none());
        assert!(lookup('*').is_none());
    }
}
