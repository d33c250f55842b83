use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Frame rate presets (12/24/30/60 fps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Framerate {
    #[value(name = "12")]
    Fps12,
    #[value(name = "24")]
    Fps24,
    #[value(name = "30")]
    Fps30,
    #[value(name = "60")]
    Fps60,
}

impl Framerate {
    pub fn as_fps(&self) -> u32 {
        match self {
            Framerate::Fps12 => 12,
            Framerate::Fps24 => 24,
            Framerate::Fps30 => 30,
            Framerate::Fps60 => 60,
        }
    }
}

/// Resolution presets. Each maps to an ffmpeg scale spec with a fixed width
/// and an even auto-computed height; `Original` applies no scale filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Resolution {
    #[value(name = "original")]
    Original,
    #[value(name = "4k")]
    Uhd4k,
    #[value(name = "1080p")]
    Hd1080p,
    #[value(name = "720p")]
    Hd720p,
}

impl Resolution {
    pub fn scale_spec(&self) -> Option<&'static str> {
        match self {
            Resolution::Original => None,
            Resolution::Uhd4k => Some("3840:-2"),
            Resolution::Hd1080p => Some("1920:-2"),
            Resolution::Hd720p => Some("1280:-2"),
        }
    }
}

/// Codec presets. The codec also decides the output container: ProRes goes
/// into a QuickTime container, everything else into MP4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Codec {
    #[value(name = "h264")]
    H264,
    #[value(name = "h265")]
    H265,
    #[value(name = "prores")]
    ProRes,
}

impl Codec {
    pub fn encoder_name(&self) -> &'static str {
        match self {
            Codec::H264 => "libx264",
            Codec::H265 => "libx265",
            Codec::ProRes => "prores_ks",
        }
    }

    pub fn container_extension(&self) -> &'static str {
        match self {
            Codec::ProRes => ".mov",
            _ => ".mp4",
        }
    }
}

/// Encoding settings for one timelapse job.
///
/// Structured fields and the free-text template are mutually exclusive:
/// changing any structured field through the setters clears
/// `custom_template`, so a stale hand-edited command never overrides a
/// freshly picked preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelapseSettings {
    pub framerate: Framerate,
    pub resolution: Resolution,
    pub codec: Codec,
    /// Raw ffmpeg command line with `{input}`/`{output}` placeholders,
    /// overriding the generated arguments entirely.
    pub custom_template: Option<String>,
}

impl Default for TimelapseSettings {
    fn default() -> Self {
        Self {
            framerate: Framerate::Fps24,
            resolution: Resolution::Hd1080p,
            codec: Codec::H264,
            custom_template: None,
        }
    }
}

impl TimelapseSettings {
    pub fn set_framerate(&mut self, framerate: Framerate) {
        self.framerate = framerate;
        self.custom_template = None;
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
        self.custom_template = None;
    }

    pub fn set_codec(&mut self, codec: Codec) {
        self.codec = codec;
        self.custom_template = None;
    }

    pub fn set_template(&mut self, template: String) {
        self.custom_template = Some(template.trim().to_string());
    }

    pub fn output_extension(&self) -> &'static str {
        self.codec.container_extension()
    }
}
