//! Text and JSON rendering of the codec list.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::presentation::{DisplayRow, GlyphColor};

/// Heading printed above the text list.
pub const TITLE: &str = "Hardware Decoder Support Test";

const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

/// Renders rows as an aligned text list for a terminal.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Title, then one `label  glyph` line per row.
    ///
    /// # Example
    ///
    /// ```
    /// use vt_decode_check::presentation::{DisplayRow, LabelStyle, StatusGlyph};
    /// use vt_decode_check::report::TextRenderer;
    ///
    /// let rows = vec![DisplayRow {
    ///     identifier: 0x61763031,
    ///     label: "av01".to_string(),
    ///     style: LabelStyle::Monospaced,
    ///     status: StatusGlyph::Negative,
    /// }];
    /// let text = TextRenderer::new(false).render(&rows);
    /// assert!(text.ends_with("av01  ✗\n"));
    /// ```
    pub fn render(&self, rows: &[DisplayRow]) -> String {
        let width = rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n\n", TITLE);
        for row in rows {
            let pad = width - row.label.chars().count();
            out.push_str(&row.label);
            out.extend(std::iter::repeat(' ').take(pad + 2));
            out.push_str(&self.glyph(row));
            out.push('\n');
        }
        out
    }

    fn glyph(&self, row: &DisplayRow) -> String {
        let symbol = row.status.symbol();
        if !self.color {
            return symbol.to_string();
        }
        let color = match row.status.color() {
            GlyphColor::Green => ANSI_GREEN,
            GlyphColor::Red => ANSI_RED,
        };
        format!("{}{}{}", color, symbol, ANSI_RESET)
    }
}

/// One codec in the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecReport {
    pub identifier: u32,
    pub tag: String,
    pub description: String,
    pub supported: bool,
}

/// Every catalog entry, in order, for machine consumption.
pub fn codec_reports(catalog: &Catalog) -> Vec<CodecReport> {
    catalog
        .iter()
        .map(|entry| CodecReport {
            identifier: entry.identifier(),
            tag: entry.tag(),
            description: entry.description().to_string(),
            supported: entry.is_supported(),
        })
        .collect()
}

/// Pretty-printed JSON array of [`CodecReport`]s.
pub fn render_json(catalog: &Catalog) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&codec_reports(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::video;
    use crate::presentation::{CodecListView, DisplayMode};
    use crate::probe::SupportProber;

    fn catalog() -> Catalog {
        let table = [(video::H264, "ITU-T H.264"), (video::AV1, "AV1")];
        let mut prober = SupportProber::new(|codec: u32| codec == video::H264);
        Catalog::from_table(&table, &mut prober)
    }

    #[test]
    fn test_render_plain() {
        let catalog = catalog();
        let mut view = CodecListView::new(&catalog, DisplayMode::ShowRawTag);
        let renderer = TextRenderer::new(false);

        assert_eq!(
            renderer.render(&view.rows()),
            "Hardware Decoder Support Test\n\navc1  ✓\nav01  ✗\n"
        );

        view.toggle();
        assert_eq!(
            renderer.render(&view.rows()),
            "Hardware Decoder Support Test\n\nITU-T H.264  ✓\nAV1          ✗\n"
        );
    }

    #[test]
    fn test_render_colored() {
        let catalog = catalog();
        let view = CodecListView::new(&catalog, DisplayMode::ShowRawTag);
        let text = TextRenderer::new(true).render(&view.rows());

        assert!(text.contains("avc1  \x1b[32m✓\x1b[0m\n"));
        assert!(text.contains("av01  \x1b[31m✗\x1b[0m\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            TextRenderer::new(false).render(&[]),
            "Hardware Decoder Support Test\n\n"
        );
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&catalog()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["tag"], "avc1");
        assert_eq!(value[0]["identifier"], video::H264);
        assert_eq!(value[0]["supported"], true);
        assert_eq!(value[1]["description"], "AV1");
        assert_eq!(value[1]["supported"], false);
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
