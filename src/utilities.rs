//! VideoToolbox utility functions.

#![allow(non_snake_case)]

use core_foundation_sys::base::Boolean;

/// A CoreMedia video codec type (FourCC).
pub type CMVideoCodecType = u32;

#[link(name = "VideoToolbox", kind = "framework")]
extern "C" {
    /// Returns whether a hardware decoder is available for the given codec type.
    ///
    /// Available on macOS 10.13 and later.
    pub fn VTIsHardwareDecodeSupported(codecType: CMVideoCodecType) -> Boolean;
}
