//! Display rows for a codec list that flips between raw tags and descriptions.
//!
//! Nothing here draws anything. A host (the terminal renderer in
//! [`crate::report`], or any UI) takes the rows from [`CodecListView::rows`]
//! and calls [`CodecListView::toggle`] when the user taps the list.

use serde::Serialize;

use crate::catalog::{Catalog, CodecEntry};
use crate::codecs::fourcc_to_string;

/// What the label of every row shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// The human-readable codec description.
    ShowDescription,
    /// The FourCC, e.g. `hvc1`. Shown until the first toggle.
    #[default]
    ShowRawTag,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::ShowDescription => DisplayMode::ShowRawTag,
            DisplayMode::ShowRawTag => DisplayMode::ShowDescription,
        }
    }

    /// How labels should be typeset in this mode.
    pub fn label_style(self) -> LabelStyle {
        match self {
            DisplayMode::ShowDescription => LabelStyle::Proportional,
            DisplayMode::ShowRawTag => LabelStyle::Monospaced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    Proportional,
    Monospaced,
}

/// Support marker shown next to each label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusGlyph {
    Affirmative,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphColor {
    Green,
    Red,
}

impl StatusGlyph {
    pub fn symbol(self) -> char {
        match self {
            StatusGlyph::Affirmative => '✓',
            StatusGlyph::Negative => '✗',
        }
    }

    pub fn color(self) -> GlyphColor {
        match self {
            StatusGlyph::Affirmative => GlyphColor::Green,
            StatusGlyph::Negative => GlyphColor::Red,
        }
    }
}

/// Map decode support to its marker.
///
/// # Example
///
/// ```
/// use vt_decode_check::presentation::{status_glyph, StatusGlyph};
///
/// assert_eq!(status_glyph(true), StatusGlyph::Affirmative);
/// assert_eq!(status_glyph(false), StatusGlyph::Negative);
/// ```
pub fn status_glyph(supported: bool) -> StatusGlyph {
    if supported {
        StatusGlyph::Affirmative
    } else {
        StatusGlyph::Negative
    }
}

/// The identifier's four big-endian bytes as text.
///
/// Bytes that are not printable ASCII come out percent-escaped (`%FF`).
pub fn raw_tag_label(identifier: u32) -> String {
    fourcc_to_string(identifier)
}

/// One rendered line of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub identifier: u32,
    pub label: String,
    pub style: LabelStyle,
    pub status: StatusGlyph,
}

/// Render a single entry in the given mode.
pub fn display_row(entry: &CodecEntry, mode: DisplayMode) -> DisplayRow {
    let label = match mode {
        DisplayMode::ShowDescription => entry.description().to_string(),
        DisplayMode::ShowRawTag => raw_tag_label(entry.identifier()),
    };

    DisplayRow {
        identifier: entry.identifier(),
        label,
        style: mode.label_style(),
        status: status_glyph(entry.is_supported()),
    }
}

/// A catalog plus the list-wide display mode.
pub struct CodecListView<'a> {
    catalog: &'a Catalog,
    mode: DisplayMode,
}

impl<'a> CodecListView<'a> {
    pub fn new(catalog: &'a Catalog, mode: DisplayMode) -> Self {
        Self { catalog, mode }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Flip the mode for the whole list and return the new mode.
    pub fn toggle(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Every row in catalog order.
    pub fn rows(&self) -> Vec<DisplayRow> {
        self.catalog
            .iter()
            .map(|entry| display_row(entry, self.mode))
            .collect()
    }
}
