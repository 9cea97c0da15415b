//! Multi-line block tracking.
//!
//! Tables are the only block that spans several lines. A line containing the
//! row marker `*|.` (an immediately closed cell command) opens a table or adds
//! a row to the current one; the first line without it closes the table.

/// Row marker that opens a table or starts a new row.
pub const TABLE_ROW_MARKER: &str = "*|.";

/// The block currently spanning lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Special {
    #[default]
    None,
    Table,
}

impl Special {
    #[inline]
    pub fn is_active(self) -> bool {
        self != Special::None
    }

    /// Markup to emit ahead of a line, and the state that follows it.
    pub fn before(self, line: &str) -> (&'static str, Special) {
        let has_marker = line.contains(TABLE_ROW_MARKER);
        match (self, has_marker) {
            (Special::None, true) => ("<table><tr><td>", Special::Table),
            (Special::Table, true) => ("<tr><td>", Special::Table),
            (Special::Table, false) => ("</table>", Special::None),
            (Special::None, false) => ("", Special::None),
        }
    }

    /// Markup to emit after a line.
    pub fn after(self) -> &'static str {
        match self {
            Special::Table => "</tr>",
            Special::None => "<br />",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_opens_a_table_once() {
        let (html, state) = Special::None.before("*|.a*|.b");
        assert_eq!(html, "<table><tr><td>");
        assert_eq!(state, Special::Table);

        let (html, state) = state.before("*|.c*|.d");
        assert_eq!(html, "<tr><td>");
        assert_eq!(state, Special::Table);
    }

    #[test]
    fn marker_anywhere_in_line_counts() {
        let (html, state) = Special::None.before("Name *|.Age");
        assert_eq!(html, "<table><tr><td>");
        assert_eq!(state, Special::Table);

        let (html, state) = state.before("Ann *|.31");
        assert_eq!(html, "<tr><td>");
        assert_eq!(state, Special::Table);
    }

    #[test]
    fn line_without_marker_closes_the_table() {
        let (html, state) = Special::Table.before("after the table");
        assert_eq!(html, "</table>");
        assert_eq!(state, Special::None);
    }

    #[test]
    fn plain_line_outside_table_is_untouched() {
        assert_eq!(Special::None.before("text"), ("", Special::None));
        assert_eq!(Special::None.before("*|x"), ("", Special::None));
    }

    #[test]
    fn after_pass_depends_on_state() {
        assert_eq!(Special::Table.after(), "</tr>");
        assert_eq!(Special::None.after(), "<br />");
        assert!(Special::Table.is_active());
        assert!(!Special::None.is_active());
    }
}
