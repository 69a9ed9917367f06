//! Text rendering of captured failures.

use crate::lenient::LenientCollection;
use crate::report::BatchReport;
use crate::types::ValidationError;
use core::fmt::Write;

/// Configuration for rendering failures as text.
///
/// The default layout lists a headline followed by one entry per failure: the
/// location line (original index, then the path inside the item) and the
/// indented detail line.
///
/// ```text
/// 1 validation error for EventList
/// 2
///   Input should be a valid integer [type=int_parsing, input_value='c', input_type=str]
/// ```
///
/// # Examples
///
/// ```
/// use lenient_rail::{LenientCollection, ReportFormat, ValidationError};
///
/// let batch = LenientCollection::from_parts(
///     vec![1, 2],
///     [(2, ValidationError::new("int_parsing", "Input should be a valid integer"))],
///     3,
/// )
/// .unwrap();
///
/// let text = ReportFormat::default().title("EventList").render(&batch);
/// assert_eq!(
///     text,
///     "1 validation error for EventList\n2\n  Input should be a valid integer [type=int_parsing]"
/// );
///
/// let compact = ReportFormat::compact().render(&batch);
/// assert_eq!(compact, "1 validation error: 2: Input should be a valid integer [type=int_parsing]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    pub title: Option<String>,
    pub indent: String,
    pub separator: String,
    pub multiline: bool,
    pub show_input: bool,
    pub show_index: bool,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            title: None,
            indent: "  ".into(),
            separator: "; ".into(),
            multiline: true,
            show_input: true,
            show_index: true,
        }
    }
}

impl ReportFormat {
    /// One line, entries joined by `"; "`.
    #[inline]
    pub fn compact() -> Self {
        Self { multiline: false, ..Default::default() }
    }

    /// Omits the offending input values, e.g. for logs that must not carry payloads.
    #[inline]
    pub fn redacted() -> Self {
        Self { show_input: false, ..Default::default() }
    }

    /// Sets the name shown in the headline.
    #[inline]
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn render<T>(&self, collection: &LenientCollection<T, ValidationError>) -> String {
        self.render_entries(
            collection.error_entries().map(|entry| (entry.original_index, entry.error)),
        )
    }

    pub fn render_report(&self, report: &BatchReport) -> String {
        self.render_entries(report.errors.iter().map(|entry| (entry.index, &entry.error)))
    }

    fn render_entries<'a, I>(&self, entries: I) -> String
    where
        I: ExactSizeIterator<Item = (usize, &'a ValidationError)>,
    {
        let count = entries.len();
        let mut out = String::with_capacity(32 + count * 64);
        let _ = write!(out, "{count} validation error{}", if count == 1 { "" } else { "s" });
        if let Some(title) = &self.title {
            let _ = write!(out, " for {title}");
        }
        if !self.multiline && count > 0 {
            out.push(':');
        }

        for (position, (index, error)) in entries.enumerate() {
            let location = self.location(index, error);
            if self.multiline {
                if !location.is_empty() {
                    out.push('\n');
                    out.push_str(&location);
                }
                out.push('\n');
                out.push_str(&self.indent);
            } else {
                out.push_str(if position == 0 { " " } else { &self.separator });
                if !location.is_empty() {
                    out.push_str(&location);
                    out.push_str(": ");
                }
            }
            let _ = error.fmt_detail(&mut out, self.show_input);
        }
        out
    }

    fn location(&self, index: usize, error: &ValidationError) -> String {
        let path = error.loc_path();
        match (self.show_index, path.is_empty()) {
            (true, true) => index.to_string(),
            (true, false) => format!("{index}.{path}"),
            (false, _) => path,
        }
    }
}
