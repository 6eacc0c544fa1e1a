//! FourCC codec constants for the video formats known to CoreMedia.
//!
//! The values mirror the `kCMVideoCodecType_*` constants (CMVideoCodecType)
//! so they can be handed straight to VideoToolbox.

/// Video codec FourCC constants (CMVideoCodecType)
pub mod video {
    /// Y'CbCr 8-bit 4:2:2 ('2vuy')
    pub const YCBCR_422_8: u32 = 0x32767579;

    /// Apple Animation ('rle ')
    pub const ANIMATION: u32 = 0x726c6520;

    /// Cinepak ('cvid')
    pub const CINEPAK: u32 = 0x63766964;

    /// JPEG ('jpeg')
    pub const JPEG: u32 = 0x6a706567;

    /// JPEG with Open-DML extensions ('dmb1')
    pub const JPEG_OPEN_DML: u32 = 0x646d6231;

    /// Sorenson Video ('SVQ1')
    pub const SORENSON_VIDEO: u32 = 0x53565131;

    /// Sorenson Video 3 ('SVQ3')
    pub const SORENSON_VIDEO_3: u32 = 0x53565133;

    /// H.263 ('h263')
    pub const H263: u32 = 0x68323633;

    /// H.264/AVC codec ('avc1')
    pub const H264: u32 = 0x61766331;

    /// HEVC/H.265 codec ('hvc1')
    pub const HEVC: u32 = 0x68766331;

    /// HEVC with alpha ('muxa')
    pub const HEVC_WITH_ALPHA: u32 = 0x6d757861;

    /// Dolby Vision HEVC ('dvh1')
    pub const DOLBY_VISION_HEVC: u32 = 0x64766831;

    /// MPEG-4 Video codec ('mp4v')
    pub const MPEG4: u32 = 0x6d703476;

    /// MPEG-2 Video ('mp2v')
    pub const MPEG2: u32 = 0x6d703276;

    /// MPEG-1 Video ('mp1v')
    pub const MPEG1: u32 = 0x6d703176;

    /// VP9 ('vp09')
    pub const VP9: u32 = 0x76703039;

    /// DV NTSC ('dvc ')
    pub const DVC_NTSC: u32 = 0x64766320;

    /// DV PAL ('dvcp')
    pub const DVC_PAL: u32 = 0x64766370;

    /// Panasonic DVCPro PAL ('dvpp')
    pub const DVCPRO_PAL: u32 = 0x64767070;

    /// Panasonic DVCPro-50 NTSC ('dv5n')
    pub const DVCPRO50_NTSC: u32 = 0x6476356e;

    /// Panasonic DVCPro-50 PAL ('dv5p')
    pub const DVCPRO50_PAL: u32 = 0x64763570;

    /// Panasonic DVCPro-HD 720p60 ('dvhp')
    pub const DVCPROHD_720P60: u32 = 0x64766870;

    /// Panasonic DVCPro-HD 720p50 ('dvhq')
    pub const DVCPROHD_720P50: u32 = 0x64766871;

    /// Panasonic DVCPro-HD 1080i60 ('dvh6')
    pub const DVCPROHD_1080I60: u32 = 0x64766836;

    /// Panasonic DVCPro-HD 1080i50 ('dvh5')
    pub const DVCPROHD_1080I50: u32 = 0x64766835;

    /// Panasonic DVCPro-HD 1080p30 ('dvh3')
    pub const DVCPROHD_1080P30: u32 = 0x64766833;

    /// Panasonic DVCPro-HD 1080p25 ('dvh2')
    pub const DVCPROHD_1080P25: u32 = 0x64766832;

    /// Apple ProRes 4444 XQ ('ap4x')
    pub const PRORES_4444_XQ: u32 = 0x61703478;

    /// Apple ProRes 4444 ('ap4h')
    pub const PRORES_4444: u32 = 0x61703468;

    /// Apple ProRes 422 HQ ('apch')
    pub const PRORES_422_HQ: u32 = 0x61706368;

    /// Apple ProRes 422 ('apcn')
    pub const PRORES_422: u32 = 0x6170636e;

    /// Apple ProRes 422 LT ('apcs')
    pub const PRORES_422_LT: u32 = 0x61706373;

    /// Apple ProRes 422 Proxy ('apco')
    pub const PRORES_422_PROXY: u32 = 0x6170636f;

    /// Apple ProRes RAW ('aprn')
    pub const PRORES_RAW: u32 = 0x6170726e;

    /// Apple ProRes RAW HQ ('aprh')
    pub const PRORES_RAW_HQ: u32 = 0x61707268;

    /// Disparity HEVC ('dish')
    pub const DISPARITY_HEVC: u32 = 0x64697368;

    /// Depth HEVC ('deph')
    pub const DEPTH_HEVC: u32 = 0x64657068;

    /// AV1 ('av01')
    pub const AV1: u32 = 0x61763031;
}

/// Render a FourCC as text, percent-escaping anything that is not printable ASCII.
///
/// `%` is escaped as well so the output can always be mapped back to the code.
///
/// # Example
///
/// ```
/// use vt_decode_check::codecs::{fourcc_to_string, video};
///
/// assert_eq!(fourcc_to_string(video::HEVC), "hvc1");
/// assert_eq!(fourcc_to_string(0x0000_0020), "%00%00%00 ");
/// ```
pub fn fourcc_to_string(code: u32) -> String {
    let mut out = String::with_capacity(4);
    for byte in code.to_be_bytes() {
        if (0x20..=0x7e).contains(&byte) && byte != b'%' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// Build a FourCC from its four-character text form.
pub const fn fourcc(tag: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_codecs() {
        // Verify FourCC byte order (big-endian)
        assert_eq!(video::H264, u32::from_be_bytes(*b"avc1"));
        assert_eq!(video::HEVC, u32::from_be_bytes(*b"hvc1"));
        assert_eq!(video::MPEG4, u32::from_be_bytes(*b"mp4v"));
        assert_eq!(video::ANIMATION, fourcc(b"rle "));
        assert_eq!(video::DVC_NTSC, fourcc(b"dvc "));
        assert_eq!(video::YCBCR_422_8, fourcc(b"2vuy"));
        assert_eq!(video::SORENSON_VIDEO_3, fourcc(b"SVQ3"));
        assert_eq!(video::DVCPROHD_720P50, fourcc(b"dvhq"));
        assert_eq!(video::PRORES_422_PROXY, fourcc(b"apco"));
        assert_eq!(video::PRORES_RAW_HQ, fourcc(b"aprh"));
        assert_eq!(video::AV1, fourcc(b"av01"));
    }

    #[test]
    fn test_fourcc_to_string() {
        assert_eq!(fourcc_to_string(video::H264), "avc1");
        assert_eq!(fourcc_to_string(video::ANIMATION), "rle ");
        assert_eq!(fourcc_to_string(video::VP9), "vp09");
    }

    #[test]
    fn test_fourcc_to_string_escapes_unprintable() {
        assert_eq!(fourcc_to_string(0xff00_4142), "%FF%00AB");
        assert_eq!(fourcc_to_string(fourcc(b"a%b\n")), "a%25b%0A");
    }
}
