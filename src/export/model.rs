//! Export options and the document set produced by the exporter.

/// Ordered, de-duplicated set of list names requested by the user.
///
/// Names match list names exactly; surrounding whitespace is ignored when
/// parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSelection {
    names: Vec<String>,
}

impl ListSelection {
    /// Builds a selection from individual names, dropping blanks and repeats.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        for raw in names {
            let name = raw.as_ref().trim();
            if !name.is_empty() && !selection.contains(name) {
                selection.names.push(name.to_owned());
            }
        }
        selection
    }

    /// Parses a comma-separated list such as `To-Do, Doing`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::from_names(value.split(','))
    }

    /// Whether `name` was requested.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|requested| requested == name)
    }

    /// Requested names in the order given.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether no usable name was supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Options controlling how a board is rendered to text.
///
/// Built once at the CLI boundary from
/// [`TrelloExportConfig::export_config`](crate::TrelloExportConfig::export_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Lists to include; `None` includes every list.
    pub lists: Option<ListSelection>,
    /// Text placed before each ordinal, e.g. `Story` in `Story 1. Fix bug`.
    pub prefix: Option<String>,
    /// Number cards within each output document.
    pub numbering: bool,
    /// Emit one `author: ` line per card comment.
    pub comments: bool,
    /// Combine all selected lists into a single document named after the
    /// board.
    pub merge: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            lists: None,
            prefix: None,
            numbering: true,
            comments: false,
            merge: false,
        }
    }
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name, e.g. `to-do.txt`.
    pub file_name: String,
    /// Full file contents.
    pub text: String,
}

/// Documents produced by one export, in board order, one per file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportedDocuments {
    documents: Vec<Document>,
}

impl ExportedDocuments {
    pub(crate) const fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Looks up a document by file name.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|document| document.file_name == file_name)
    }

    /// Number of output files.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the export produced no files.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterates over the documents in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// File names in output order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.documents
            .iter()
            .map(|document| document.file_name.as_str())
    }
}

impl<'a> IntoIterator for &'a ExportedDocuments {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
