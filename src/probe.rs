//! Hardware decode support queries.
//!
//! [`DecodeCapability`] is the single seam to the platform. [`HostDecoder`]
//! answers from VideoToolbox on Apple targets, closures stand in for it in
//! tests, and [`SupportProber`] makes sure each codec is only asked about once.

use std::collections::HashMap;

use tracing::debug;

use crate::codecs::fourcc_to_string;

/// Answers whether hardware-accelerated decoding is available for a codec.
///
/// Any `u32` is a valid question; unknown codecs answer `false`.
pub trait DecodeCapability {
    fn supports(&self, identifier: u32) -> bool;
}

impl<F> DecodeCapability for F
where
    F: Fn(u32) -> bool,
{
    fn supports(&self, identifier: u32) -> bool {
        self(identifier)
    }
}

/// The host platform's hardware decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostDecoder;

#[cfg(any(target_os = "macos", target_os = "ios"))]
impl DecodeCapability for HostDecoder {
    fn supports(&self, identifier: u32) -> bool {
        let supported = unsafe { crate::utilities::VTIsHardwareDecodeSupported(identifier) };
        supported != 0
    }
}

#[cfg(not(any(target_os = "macos", target_os = "ios")))]
impl DecodeCapability for HostDecoder {
    fn supports(&self, _identifier: u32) -> bool {
        use std::sync::Once;

        static WARN: Once = Once::new();
        WARN.call_once(|| {
            tracing::warn!("VideoToolbox is not available on this platform, reporting every codec as unsupported");
        });
        false
    }
}

/// Memoizing front for a [`DecodeCapability`].
///
/// Hardware capability does not change while the process runs, so the first
/// answer for an identifier is kept and reused.
///
/// # Example
///
/// ```
/// use vt_decode_check::probe::SupportProber;
///
/// let mut prober = SupportProber::new(|codec: u32| codec == 1);
/// assert!(prober.probe(1));
/// assert!(!prober.probe(2));
/// assert!(prober.probe(1));
/// assert_eq!(prober.queries(), 2);
/// ```
pub struct SupportProber<C> {
    capability: C,
    cache: HashMap<u32, bool>,
}

impl<C: DecodeCapability> SupportProber<C> {
    pub fn new(capability: C) -> Self {
        Self {
            capability,
            cache: HashMap::new(),
        }
    }

    /// Whether `identifier` can be decoded in hardware.
    pub fn probe(&mut self, identifier: u32) -> bool {
        if let Some(&supported) = self.cache.get(&identifier) {
            return supported;
        }

        let supported = self.capability.supports(identifier);
        debug!(
            codec = %fourcc_to_string(identifier),
            supported,
            "probed hardware decoder"
        );
        self.cache.insert(identifier, supported);
        supported
    }

    /// Number of distinct identifiers the capability has been asked about.
    pub fn queries(&self) -> usize {
        self.cache.len()
    }

    pub fn into_inner(self) -> C {
        self.capability
    }
}

impl SupportProber<HostDecoder> {
    /// A prober backed by the host's hardware decoder.
    pub fn host() -> Self {
        Self::new(HostDecoder)
    }
}
