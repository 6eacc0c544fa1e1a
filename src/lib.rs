//! Report which video codecs the host can decode in hardware.
//!
//! The crate pairs a fixed catalog of CoreMedia video codec types with
//! VideoToolbox's `VTIsHardwareDecodeSupported`, and turns the result into
//! list rows that flip between raw FourCC tags and human descriptions.
//!
//! # Example
//!
//! ```no_run
//! use vt_decode_check::catalog::Catalog;
//! use vt_decode_check::presentation::{CodecListView, DisplayMode};
//! use vt_decode_check::probe::SupportProber;
//!
//! let mut prober = SupportProber::host();
//! let catalog = Catalog::builtin(&mut prober);
//!
//! let mut view = CodecListView::new(&catalog, DisplayMode::ShowRawTag);
//! for row in view.rows() {
//!     println!("{} {}", row.label, row.status.symbol());
//! }
//! view.toggle();
//! ```
//!
//! On targets without VideoToolbox every codec reports as unsupported.

// Document: https://developer.apple.com/documentation/videotoolbox/vtishardwaredecodesupported(_:)

pub mod catalog;
pub mod codecs;
pub mod config;
pub mod errors;
pub mod presentation;
pub mod probe;
pub mod report;

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub mod utilities;
