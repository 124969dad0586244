//! Media items: a shared base record plus two specialised variants.
//!
//! There is no implementation inheritance. Each variant embeds a
//! [`MediaItem`] and exposes it through [`Media::item`]; the shared accessors
//! are provided methods on the trait.

use std::fmt::{self, Display};

use crate::validation::{format_float, positive_amount, positive_count, quoted, ValidationError, Value};

/// Anything that renders itself as descriptive text and carries a title and author.
pub trait Media: Display {
    /// The embedded base record.
    fn item(&self) -> &MediaItem;

    /// `Type(field=value, ...)` representation.
    fn repr(&self) -> String;

    fn name(&self) -> &str {
        &self.item().name
    }

    fn author(&self) -> &str {
        &self.item().author
    }
}

/// Title and author, read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    name: String,
    author: String,
}

impl MediaItem {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
        }
    }

    fn fields(&self) -> String {
        format!("name={}, author={}", quoted(&self.name), quoted(&self.author))
    }
}

impl Media for MediaItem {
    fn item(&self) -> &MediaItem {
        self
    }

    fn repr(&self) -> String {
        format!("MediaItem({})", self.fields())
    }
}

impl Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "«{}» by {}", self.name, self.author)
    }
}

/// A printed item with a page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalMediaItem {
    item: MediaItem,
    pages: u64,
}

impl PhysicalMediaItem {
    /// # Errors
    /// Type failure if `pages` is not an integer, range failure if it is not `> 0`.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        pages: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            item: MediaItem::new(name, author),
            pages: positive_count("pages", pages)?,
        })
    }

    pub fn pages(&self) -> u64 {
        self.pages
    }

    pub fn set_pages(&mut self, pages: impl Into<Value>) -> Result<(), ValidationError> {
        self.pages = positive_count("pages", pages)?;
        Ok(())
    }
}

impl Media for PhysicalMediaItem {
    fn item(&self) -> &MediaItem {
        &self.item
    }

    fn repr(&self) -> String {
        format!("PhysicalMediaItem({}, pages={})", self.item.fields(), self.pages)
    }
}

impl Display for PhysicalMediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} pages", self.item, self.pages)
    }
}

/// A recording with a duration in hours.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioMediaItem {
    item: MediaItem,
    duration: f64,
}

impl AudioMediaItem {
    /// # Errors
    /// Type failure if `duration` is not a number, range failure if it is not `> 0`.
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        duration: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            item: MediaItem::new(name, author),
            duration: positive_amount("duration", duration)?,
        })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: impl Into<Value>) -> Result<(), ValidationError> {
        self.duration = positive_amount("duration", duration)?;
        Ok(())
    }
}

impl Media for AudioMediaItem {
    fn item(&self) -> &MediaItem {
        &self.item
    }

    fn repr(&self) -> String {
        format!(
            "AudioMediaItem({}, duration={})",
            self.item.fields(),
            format_float(self.duration)
        )
    }
}

impl Display for AudioMediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} h", self.item, format_float(self.duration))
    }
}
