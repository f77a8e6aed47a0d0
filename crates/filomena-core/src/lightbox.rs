//! Room gallery lightbox.
//!
//! # State machine
//!
//! ```text
//!            open(i)                 navigate(±1)
//!   Closed ──────────▶ Open(i) ◀──────────────┐
//!     ▲                   │  └────────────────┘
//!     └───── close() ─────┘
//! ```
//!
//! The cursor survives `close()`, so a later `navigate` from markup moves
//! relative to the last image shown. Every transition returns a
//! [`LightboxCommand`] telling the host what to paint; the lightbox itself
//! never touches the page.

use tracing::debug;

/// Ordered image URLs collected once at load. Immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
}

impl Gallery {
    /// Collect sources in document order, skipping items without one.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            images: sources.into_iter().flatten().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open(usize),
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Previous,
    Next,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Image to display plus its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxFrame {
    pub src: String,
    pub position: usize,
    pub count: usize,
}

impl LightboxFrame {
    /// Counter text, e.g. `"2 / 5"`.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} / {}", self.position, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxCommand {
    /// Paint the frame, add the open state and lock page scrolling.
    Show(LightboxFrame),
    /// Paint the frame only.
    Render(LightboxFrame),
    /// Remove the open state and restore page scrolling.
    Hide,
}

#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    gallery: Gallery,
    cursor: usize,
    open: bool,
}

impl Lightbox {
    #[must_use]
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            cursor: 0,
            open: false,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        if self.open {
            LightboxState::Open(self.cursor)
        } else {
            LightboxState::Closed
        }
    }

    /// Open at `index`. Out-of-range indices wrap around the gallery.
    ///
    /// Returns `None` (and stays closed) when the gallery is empty.
    pub fn open(&mut self, index: i64) -> Option<LightboxCommand> {
        let count = self.gallery.len();
        if count == 0 {
            return None;
        }
        self.cursor = wrap_index(index, count);
        self.open = true;
        debug!(index = self.cursor, count, "lightbox opened");
        self.frame().map(LightboxCommand::Show)
    }

    /// Close the lightbox. Safe to call when already closed.
    pub fn close(&mut self) -> LightboxCommand {
        if self.open {
            debug!(index = self.cursor, "lightbox closed");
        }
        self.open = false;
        LightboxCommand::Hide
    }

    /// Move the cursor by `direction`, wrapping both ways.
    ///
    /// Returns `None` when the gallery is empty.
    pub fn navigate(&mut self, direction: i64) -> Option<LightboxCommand> {
        let count = self.gallery.len();
        if count == 0 {
            return None;
        }
        self.cursor = (self.cursor + wrap_index(direction, count)) % count;
        self.frame().map(LightboxCommand::Render)
    }

    /// Keyboard handling. Keys are ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> Option<LightboxCommand> {
        if !self.open {
            return None;
        }
        match key {
            LightboxKey::Close => Some(self.close()),
            LightboxKey::Previous => self.navigate(-1),
            LightboxKey::Next => self.navigate(1),
        }
    }

    fn frame(&self) -> Option<LightboxFrame> {
        let src = self.gallery.get(self.cursor)?;
        Some(LightboxFrame {
            src: src.to_owned(),
            position: self.cursor + 1,
            count: self.gallery.len(),
        })
    }
}

fn wrap_index(index: i64, count: usize) -> usize {
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    // rem_euclid keeps negative offsets in range.
    index.rem_euclid(count) as usize
}
