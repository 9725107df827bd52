//! Bookmark session: the single owner of the collection
//!
//! A [`Session`] holds the in-memory collection, the tag index derived from
//! it, the view state (keyword, selected tag, page) and the tag entry field.
//! Every mutation follows the same path:
//!
//! 1. build the next collection from the current one
//! 2. write it to the store and wait for confirmation
//! 3. only then swap it in and [`refresh`](Session::refresh) derived state
//!
//! If the write fails the in-memory collection is left at the last confirmed
//! snapshot and the error is returned.
//!
//! # Examples
//!
//! ```
//! use markr::session::Session;
//! use markr::store::MemoryStore;
//! use markr::browser::ArgDocument;
//!
//! let mut session = Session::load(MemoryStore::new(), 5)?;
//! let tab = ArgDocument::new(Some("Example".into()), Some("https://example.com".into()));
//! session.save(&tab, "", "a, b, a")?;
//!
//! let view = session.view();
//! assert_eq!(view.page.items[0].tags, vec!["a", "b", "a"]);
//! # Ok::<(), markr::MarkrError>(())
//! ```

use chrono::Utc;

use crate::{
    MarkrError,
    backup::Backup,
    bookmark::{Bookmark, parse_tags},
    browser::ActiveDocument,
    completions::{PointerTarget, SuggestionState, TagAutocomplete},
    search::{Page, TagIndex, filter, paginate},
    store::{BOOKMARKS_KEY, RecordStore},
};

type Result<T> = std::result::Result<T, MarkrError>;

/// Ephemeral listing state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// 1-based page number
    pub current_page: usize,
    pub search_keyword: String,
    /// Empty means no tag filter
    pub selected_tag: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_keyword: String::new(),
            selected_tag: String::new(),
        }
    }
}

/// What the listing shows for the current state
#[derive(Debug, Clone)]
pub struct View<'a> {
    /// The current page of filtered records, newest first
    pub page: Page<&'a Bookmark>,
    /// Number of records passing the filters
    pub matched: usize,
    /// Number of records in the collection
    pub total: usize,
    pub state: &'a ViewState,
}

/// Owner of the bookmark collection and its derived state
pub struct Session<S: RecordStore> {
    store: S,
    bookmarks: Vec<Bookmark>,
    tags: TagIndex,
    view: ViewState,
    page_size: usize,
    tag_input: TagAutocomplete,
}

impl<S: RecordStore> Session<S> {
    /// Load the collection from `store`
    ///
    /// A store that has never been written reads as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `MarkrError` if the store cannot be read.
    pub fn load(store: S, page_size: usize) -> Result<Self> {
        let bookmarks = store.get(BOOKMARKS_KEY)?.unwrap_or_default();
        tracing::debug!(count = bookmarks.len(), "collection loaded");
        let tags = TagIndex::build(&bookmarks);
        Ok(Self {
            store,
            bookmarks,
            tags,
            view: ViewState::default(),
            page_size,
            tag_input: TagAutocomplete::new(),
        })
    }

    /// All records in insertion order
    #[must_use]
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    #[must_use]
    pub const fn tags(&self) -> &TagIndex {
        &self.tags
    }

    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Find a record by id
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// Change the search keyword; returns to the first page
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.view.search_keyword = keyword.into();
        self.view.current_page = 1;
    }

    /// Change the tag filter (empty clears it); returns to the first page
    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.view.selected_tag = tag.into();
        self.view.current_page = 1;
    }

    /// Jump to a page
    ///
    /// The number is not checked against the page count; a page past the
    /// end shows nothing.
    pub fn go_to_page(&mut self, page: usize) {
        self.view.current_page = page.max(1);
    }

    /// Filter and paginate the collection for the current view state
    #[must_use]
    pub fn view(&self) -> View<'_> {
        let hits = filter(
            &self.bookmarks,
            &self.view.search_keyword,
            &self.view.selected_tag,
        );
        View {
            page: paginate(&hits, self.page_size, self.view.current_page),
            matched: hits.len(),
            total: self.bookmarks.len(),
            state: &self.view,
        }
    }

    /// Bookmark the active document
    ///
    /// # Errors
    ///
    /// Returns `MarkrError::NoActiveTarget` if there is no document to save,
    /// or a store error if the write fails.
    pub fn save<D: ActiveDocument + ?Sized>(
        &mut self,
        active: &D,
        note: &str,
        tags_input: &str,
    ) -> Result<&Bookmark> {
        self.save_at(active, note, tags_input, Utc::now().timestamp_millis())
    }

    /// Bookmark the active document with an explicit timestamp
    ///
    /// # Errors
    ///
    /// Returns `MarkrError::NoActiveTarget` if there is no document to save,
    /// or a store error if the write fails.
    pub fn save_at<D: ActiveDocument + ?Sized>(
        &mut self,
        active: &D,
        note: &str,
        tags_input: &str,
        now: i64,
    ) -> Result<&Bookmark> {
        let document = active.current().ok_or(MarkrError::NoActiveTarget)?;
        let record = Bookmark::new(
            document.title,
            document.url,
            note.trim(),
            parse_tags(tags_input),
            now,
        );

        let mut next = self.bookmarks.clone();
        next.push(record);
        self.commit(next)?;
        self.tag_input.reset();

        let last = self.bookmarks.len() - 1;
        Ok(&self.bookmarks[last])
    }

    /// Delete every record with `id`
    ///
    /// Returns the number of records removed, which is more than one only
    /// when ids collided.
    ///
    /// # Errors
    ///
    /// Returns `MarkrError::NotFound` if no record has `id`, or a store error
    /// if the write fails.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let next: Vec<Bookmark> = self.bookmarks.iter().filter(|b| b.id != id).cloned().collect();
        let removed = self.bookmarks.len() - next.len();
        if removed == 0 {
            return Err(MarkrError::NotFound(id));
        }
        self.commit(next)?;
        Ok(removed)
    }

    /// Replace the whole collection
    ///
    /// # Errors
    ///
    /// Returns a store error if the write fails.
    pub fn replace_all(&mut self, records: Vec<Bookmark>) -> Result<()> {
        self.commit(records)
    }

    /// Replace the collection with records read from a backup
    ///
    /// Returns the number of records imported.
    ///
    /// # Errors
    ///
    /// Returns a store error, leaving the collection unchanged, if the write
    /// fails.
    pub fn import(&mut self, records: Vec<Bookmark>) -> Result<usize> {
        let count = records.len();
        self.replace_all(records)?;
        tracing::info!(count, "collection imported");
        Ok(count)
    }

    /// Snapshot the stored collection as a backup document
    ///
    /// Reads from the store, not the in-memory copy.
    ///
    /// # Errors
    ///
    /// Returns a store error if the store cannot be read.
    pub fn export(&self) -> Result<Backup> {
        let stored = self.store.get(BOOKMARKS_KEY)?.unwrap_or_default();
        tracing::info!(count = stored.len(), "collection exported");
        Ok(Backup::new(stored, Utc::now()))
    }

    /// Open a record's address in a new viewer
    ///
    /// # Errors
    ///
    /// Returns `MarkrError::NotFound` for an unknown id, or an I/O error if
    /// the viewer cannot be launched.
    pub fn open<D: ActiveDocument + ?Sized>(&self, active: &D, id: i64) -> Result<&Bookmark> {
        let record = self.get(id).ok_or(MarkrError::NotFound(id))?;
        active.open(&record.url)?;
        Ok(record)
    }

    /// The tag entry field
    #[must_use]
    pub const fn tag_input(&self) -> &TagAutocomplete {
        &self.tag_input
    }

    /// Text typed into the tag entry field
    pub fn type_tags(&mut self, text: impl Into<String>) -> &SuggestionState {
        self.tag_input.on_input(text, &self.tags)
    }

    /// Pick a suggestion for the tag entry field
    pub fn choose_tag(&mut self, tag: &str) -> bool {
        self.tag_input.choose(tag)
    }

    /// Pointer interaction around the tag entry field
    pub fn pointer(&mut self, target: PointerTarget) {
        self.tag_input.on_pointer(target);
    }

    /// Recompute state derived from the collection
    ///
    /// Rebuilds the tag index, drops a tag filter that no longer matches any
    /// tag, and returns to the first page.
    pub fn refresh(&mut self) {
        self.tags = TagIndex::build(&self.bookmarks);
        if !self.view.selected_tag.is_empty() && !self.tags.contains(&self.view.selected_tag) {
            self.view.selected_tag.clear();
        }
        self.view.current_page = 1;
    }

    /// Write `next` and adopt it once the store confirms
    fn commit(&mut self, next: Vec<Bookmark>) -> Result<()> {
        if let Err(e) = self.store.set(BOOKMARKS_KEY, &next) {
            tracing::warn!(error = %e, "store write failed, keeping last confirmed collection");
            return Err(e.into());
        }
        self.bookmarks = next;
        self.refresh();
        Ok(())
    }
}
