//! Active document capability
//!
//! The session needs two things from its host: the title and address of
//! the document to bookmark, and a way to open an address in a new viewer.

use std::io;

/// Title and address of the document being bookmarked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub url: String,
}

/// Host access to the current document and a viewer
pub trait ActiveDocument {
    /// The document to bookmark, if there is one
    fn current(&self) -> Option<Document>;

    /// Open `url` in a new viewer
    ///
    /// # Errors
    ///
    /// Returns an I/O error if no viewer could be launched.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Document given explicitly on the command line
///
/// Opening delegates to the system's default handler for the address.
#[derive(Debug, Clone, Default)]
pub struct ArgDocument {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl ArgDocument {
    #[must_use]
    pub const fn new(title: Option<String>, url: Option<String>) -> Self {
        Self { title, url }
    }
}

impl ActiveDocument for ArgDocument {
    fn current(&self) -> Option<Document> {
        let url = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
        let title = self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        Some(Document {
            title: title.to_string(),
            url: url.to_string(),
        })
    }

    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}
