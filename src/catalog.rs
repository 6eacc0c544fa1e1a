//! The fixed catalog of video codecs the tool reports on.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use tracing::{debug, info};

use crate::codecs::{fourcc_to_string, video};
use crate::errors::CatalogError;
use crate::probe::{DecodeCapability, SupportProber};

/// Every video codec CoreMedia names, in display order.
pub const VIDEO_CODEC_TABLE: &[(u32, &str)] = &[
    (video::YCBCR_422_8, "Y'CbCr 8-bit 4:2:2 ordered Cb Y'0 Cr Y'1"),
    (video::ANIMATION, "Apple Animation"),
    (video::CINEPAK, "Cinepak"),
    (video::JPEG, "Joint Photographic Experts Group (JPEG)"),
    (video::JPEG_OPEN_DML, "JPEG with Open-DML extensions"),
    (video::SORENSON_VIDEO, "Sorenson"),
    (video::SORENSON_VIDEO_3, "Sorenson 3"),
    (video::H263, "ITU-T H.263"),
    (video::H264, "ITU-T H.264"),
    (video::HEVC, "ITU-T HEVC"),
    (video::HEVC_WITH_ALPHA, "HEVC with alpha support"),
    (video::DOLBY_VISION_HEVC, "Dolby Vision HEVC"),
    (video::MPEG4, "MPEG-4 Part 2"),
    (video::MPEG2, "MPEG-2"),
    (video::MPEG1, "MPEG-1"),
    (video::VP9, "VP9"),
    (video::DVC_NTSC, "DV NTSC"),
    (video::DVC_PAL, "DV PAL"),
    (video::DVCPRO_PAL, "Panasonic DVCPro PAL"),
    (video::DVCPRO50_NTSC, "Panasonic DVCPro-50 NTSC"),
    (video::DVCPRO50_PAL, "Panasonic DVCPro-50 PAL"),
    (video::DVCPROHD_720P60, "Panasonic DVCPro-HD 720p60"),
    (video::DVCPROHD_720P50, "Panasonic DVCPro-HD 720p50"),
    (video::DVCPROHD_1080I60, "Panasonic DVCPro-HD 1080i60"),
    (video::DVCPROHD_1080I50, "Panasonic DVCPro-HD 1080i50"),
    (video::DVCPROHD_1080P30, "Panasonic DVCPro-HD 1080p30"),
    (video::DVCPROHD_1080P25, "Panasonic DVCPro-HD 1080p25"),
    (video::PRORES_4444_XQ, "Apple ProRes 4444 XQ"),
    (video::PRORES_4444, "Apple ProRes 4444"),
    (video::PRORES_422_HQ, "Apple ProRes 422 HQ"),
    (video::PRORES_422, "Apple ProRes 422"),
    (video::PRORES_422_LT, "Apple ProRes 422 LT"),
    (video::PRORES_422_PROXY, "Apple ProRes 422 proxy"),
    (video::PRORES_RAW, "Apple ProRes RAW"),
    (video::PRORES_RAW_HQ, "Apple ProRes RAW HQ"),
    (video::DISPARITY_HEVC, "disparity HEVC"),
    (video::DEPTH_HEVC, "depth HEVC"),
    (video::AV1, "AV1"),
];

/// A codec and whether the host can decode it in hardware.
///
/// Two entries are equal when identifier and description match; the probe
/// result is not part of the identity.
#[derive(Debug, Clone)]
pub struct CodecEntry {
    identifier: u32,
    description: String,
    supported: bool,
}

impl CodecEntry {
    pub fn new(identifier: u32, description: impl Into<String>, supported: bool) -> Self {
        Self {
            identifier,
            description: description.into(),
            supported,
        }
    }

    /// FourCC of the codec.
    pub fn identifier(&self) -> u32 {
        self.identifier
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Cached hardware decode support.
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// The FourCC as text, see [`fourcc_to_string`].
    pub fn tag(&self) -> String {
        fourcc_to_string(self.identifier)
    }
}

impl PartialEq for CodecEntry {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.description == other.description
    }
}

impl Eq for CodecEntry {}

impl Hash for CodecEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.description.hash(state);
    }
}

/// Ordered, duplicate-free set of codec entries.
///
/// Built once and read-only afterwards. Iteration follows table order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CodecEntry>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Build a catalog, probing every distinct codec once.
    ///
    /// A row repeating an earlier `(identifier, description)` pair is
    /// collapsed into the first one.
    ///
    /// # Example
    ///
    /// ```
    /// use vt_decode_check::catalog::Catalog;
    /// use vt_decode_check::probe::SupportProber;
    ///
    /// let table = [(0x61766331, "ITU-T H.264"), (0x61763031, "AV1")];
    /// let mut prober = SupportProber::new(|codec: u32| codec == 0x61766331);
    /// let catalog = Catalog::try_from_table(&table, &mut prober).unwrap();
    ///
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.get(0x61766331).unwrap().is_supported());
    /// ```
    pub fn try_from_table<C: DecodeCapability>(
        table: &[(u32, &str)],
        prober: &mut SupportProber<C>,
    ) -> Result<Self, CatalogError> {
        let mut entries: Vec<CodecEntry> = Vec::with_capacity(table.len());
        let mut index = HashMap::with_capacity(table.len());

        for &(identifier, description) in table {
            if description.is_empty() {
                return Err(CatalogError::EmptyDescription { identifier });
            }

            if let Some(&position) = index.get(&identifier) {
                let existing: &CodecEntry = &entries[position];
                if existing.description != description {
                    return Err(CatalogError::ConflictingDescription {
                        identifier,
                        existing: existing.description.clone(),
                        conflicting: description.to_string(),
                    });
                }
                debug!(codec = %fourcc_to_string(identifier), "collapsed duplicate catalog row");
                continue;
            }

            let supported = prober.probe(identifier);
            index.insert(identifier, entries.len());
            entries.push(CodecEntry::new(identifier, description, supported));
        }

        let catalog = Self { entries, index };
        info!(
            codecs = catalog.len(),
            supported = catalog.supported_count(),
            "codec catalog built"
        );
        Ok(catalog)
    }

    /// Like [`Catalog::try_from_table`], for tables known to be well formed.
    ///
    /// # Panics
    ///
    /// Panics if the table is malformed.
    pub fn from_table<C: DecodeCapability>(
        table: &[(u32, &str)],
        prober: &mut SupportProber<C>,
    ) -> Self {
        match Self::try_from_table(table, prober) {
            Ok(catalog) => catalog,
            Err(err) => panic!("malformed codec table: {}", err),
        }
    }

    /// The catalog of [`VIDEO_CODEC_TABLE`].
    pub fn builtin<C: DecodeCapability>(prober: &mut SupportProber<C>) -> Self {
        Self::from_table(VIDEO_CODEC_TABLE, prober)
    }

    pub fn entries(&self) -> &[CodecEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodecEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by identifier.
    pub fn get(&self, identifier: u32) -> Option<&CodecEntry> {
        self.index.get(&identifier).map(|&i| &self.entries[i])
    }

    /// Number of entries the host decodes in hardware.
    pub fn supported_count(&self) -> usize {
        self.entries.iter().filter(|e| e.supported).count()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CodecEntry;
    type IntoIter = std::slice::Iter<'a, CodecEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    fn unsupported(_: u32) -> bool {
        false
    }

    #[test]
    fn test_builtin_table_is_well_formed() {
        let ids: HashSet<u32> = VIDEO_CODEC_TABLE.iter().map(|(id, _)| *id).collect();
        assert_eq!(VIDEO_CODEC_TABLE.len(), 38);
        assert_eq!(ids.len(), VIDEO_CODEC_TABLE.len());
        assert!(VIDEO_CODEC_TABLE.iter().all(|(_, desc)| !desc.is_empty()));
    }

    #[test]
    fn test_builtin_catalog() {
        let mut prober = SupportProber::new(unsupported);
        let catalog = Catalog::builtin(&mut prober);

        assert_eq!(catalog.len(), 38);
        assert_eq!(catalog.entries()[0].tag(), "2vuy");
        assert_eq!(catalog.entries()[37].tag(), "av01");
        assert_eq!(catalog.get(video::HEVC).unwrap().description(), "ITU-T HEVC");
        assert_eq!(catalog.supported_count(), 0);
    }

    #[test]
    fn test_each_codec_probed_once() {
        let calls = Cell::new(0);
        let mut prober = SupportProber::new(|_: u32| {
            calls.set(calls.get() + 1);
            true
        });

        let catalog = Catalog::builtin(&mut prober);
        assert_eq!(calls.get(), catalog.len());

        // A second catalog sharing the prober asks nothing new.
        let again = Catalog::builtin(&mut prober);
        assert_eq!(calls.get(), again.len());
    }

    #[test]
    fn test_order_is_insertion_order() {
        let mut prober = SupportProber::new(unsupported);
        let first = Catalog::builtin(&mut prober);
        let second = Catalog::builtin(&mut prober);

        let expected: Vec<u32> = VIDEO_CODEC_TABLE.iter().map(|(id, _)| *id).collect();
        let first_ids: Vec<u32> = first.iter().map(CodecEntry::identifier).collect();
        let second_ids: Vec<u32> = second.iter().map(CodecEntry::identifier).collect();
        assert_eq!(first_ids, expected);
        assert_eq!(second_ids, expected);
    }

    #[test]
    fn test_exact_duplicates_collapse() {
        let calls = Cell::new(0);
        let mut prober = SupportProber::new(|_: u32| {
            calls.set(calls.get() + 1);
            false
        });
        let table = [
            (video::H264, "ITU-T H.264"),
            (video::AV1, "AV1"),
            (video::H264, "ITU-T H.264"),
        ];

        let catalog = Catalog::try_from_table(&table, &mut prober).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].identifier(), video::H264);
        assert_eq!(catalog.entries()[1].identifier(), video::AV1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_conflicting_description_rejected() {
        let mut prober = SupportProber::new(unsupported);
        let table = [(video::HEVC, "ITU-T HEVC"), (video::HEVC, "H.265")];

        let err = Catalog::try_from_table(&table, &mut prober).unwrap_err();
        assert_eq!(
            err,
            CatalogError::ConflictingDescription {
                identifier: video::HEVC,
                existing: "ITU-T HEVC".to_string(),
                conflicting: "H.265".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut prober = SupportProber::new(unsupported);
        let err = Catalog::try_from_table(&[(video::VP9, "")], &mut prober).unwrap_err();
        assert_eq!(err, CatalogError::EmptyDescription { identifier: video::VP9 });
    }

    #[test]
    #[should_panic(expected = "malformed codec table")]
    fn test_from_table_panics_on_malformed_input() {
        let mut prober = SupportProber::new(unsupported);
        Catalog::from_table(&[(video::VP9, "VP9"), (video::VP9, "VP 9")], &mut prober);
    }

    #[test]
    fn test_entry_identity_ignores_support() {
        let a = CodecEntry::new(video::H264, "ITU-T H.264", true);
        let b = CodecEntry::new(video::H264, "ITU-T H.264", false);
        let c = CodecEntry::new(video::H264, "H.264", true);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<CodecEntry> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_supported_lookup() {
        let mut prober = SupportProber::new(|codec: u32| codec == video::HEVC);
        let catalog = Catalog::builtin(&mut prober);

        assert!(catalog.get(video::HEVC).unwrap().is_supported());
        assert!(!catalog.get(video::H264).unwrap().is_supported());
        assert!(catalog.get(0xdead_beef).is_none());
        assert_eq!(catalog.supported_count(), 1);
    }
}
