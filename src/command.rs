//! Builds the ffmpeg invocation for one timelapse job.

use crate::settings::{Codec, TimelapseSettings};

/// Placeholder tokens recognized inside a custom command template.
pub const INPUT_TOKEN: &str = "{input}";
pub const OUTPUT_TOKEN: &str = "{output}";

/// A ready-to-run encoder invocation.
///
/// Generated commands are an argument vector handed straight to the ffmpeg
/// binary, so paths never pass through a shell. A custom template is free
/// text and runs under `sh -c`, quoting included by whoever wrote the
/// template.
#[derive(Debug, Clone, PartialEq)]
pub enum EncoderCommand {
    Args(Vec<String>),
    Shell(String),
}

/// Build the encoder invocation from the settings, the staging glob pattern
/// and the destination path.
pub fn build(
    settings: &TimelapseSettings,
    input_pattern: &str,
    output_path: &str,
) -> EncoderCommand {
    if let Some(template) = &settings.custom_template {
        let line = template
            .replace(INPUT_TOKEN, input_pattern)
            .replace(OUTPUT_TOKEN, output_path);
        return EncoderCommand::Shell(line);
    }

    let mut args: Vec<String> = vec![
        // -y: overwrite the output without asking
        "-y".into(),
        "-framerate".into(),
        settings.framerate.as_fps().to_string(),
        "-pattern_type".into(),
        "glob".into(),
        "-i".into(),
        input_pattern.into(),
        "-c:v".into(),
        settings.codec.encoder_name().into(),
    ];

    match settings.codec {
        Codec::ProRes => {
            args.push("-profile:v".into());
            args.push("3".into());
        }
        _ => {
            args.push("-pix_fmt".into());
            args.push("yuv420p".into());
        }
    }

    if let Some(scale) = settings.resolution.scale_spec() {
        args.push("-vf".into());
        args.push(format!("scale={}", scale));
    }

    args.push(output_path.into());
    EncoderCommand::Args(args)
}

/// Render the generated command as a single shell line with placeholder
/// tokens left in, single-quoted. This is the starting point shown to a user
/// who wants to hand-edit the command; it is never executed as-is.
pub fn shell_template(settings: &TimelapseSettings) -> String {
    if let Some(template) = &settings.custom_template {
        return template.clone();
    }

    let quoted_input = format!("'{}'", INPUT_TOKEN);
    let quoted_output = format!("'{}'", OUTPUT_TOKEN);
    let args = match build(settings, &quoted_input, &quoted_output) {
        EncoderCommand::Args(args) => args,
        EncoderCommand::Shell(line) => return line,
    };

    let mut line = String::from("ffmpeg");
    for arg in args {
        line.push(' ');
        line.push_str(&arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Codec, Framerate, Resolution};

    #[test]
    fn default_settings_produce_h264_arguments() {
        let settings = TimelapseSettings::default();
        let command = build(&settings, "/tmp/stage/*.jpg", "/tmp/out.mp4");

        let expected: Vec<String> = [
            "-y",
            "-framerate",
            "24",
            "-pattern_type",
            "glob",
            "-i",
            "/tmp/stage/*.jpg",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-vf",
            "scale=1920:-2",
            "/tmp/out.mp4",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(command, EncoderCommand::Args(expected));
    }

    #[test]
    fn original_resolution_omits_the_scale_filter() {
        let mut settings = TimelapseSettings::default();
        settings.set_resolution(Resolution::Original);
        let EncoderCommand::Args(args) = build(&settings, "in/*.png", "out.mp4") else {
            panic!("expected argument vector");
        };
        assert!(!args.iter().any(|a| a == "-vf"));
        assert!(!args.iter().any(|a| a.starts_with("scale=")));
    }

    #[test]
    fn prores_uses_profile_3_and_no_pixel_format() {
        let mut settings = TimelapseSettings::default();
        settings.set_codec(Codec::ProRes);
        let EncoderCommand::Args(args) = build(&settings, "in/*.jpg", "out.mov") else {
            panic!("expected argument vector");
        };
        let joined = args.join(" ");
        assert!(joined.contains("-c:v prores_ks"));
        assert!(joined.contains("-profile:v 3"));
        assert!(!joined.contains("-pix_fmt"));
    }

    #[test]
    fn framerate_flag_follows_the_selected_preset() {
        let mut settings = TimelapseSettings::default();
        settings.set_framerate(Framerate::Fps60);
        let EncoderCommand::Args(args) = build(&settings, "in/*.jpg", "out.mp4") else {
            panic!("expected argument vector");
        };
        let pos = args.iter().position(|a| a == "-framerate").unwrap();
        assert_eq!(args[pos + 1], "60");
    }

    #[test]
    fn custom_template_substitutes_both_placeholders_once() {
        let mut settings = TimelapseSettings::default();
        settings.set_template(
            "ffmpeg -framerate 2 -i '{input}' -c:v libx264 '{output}'".to_string(),
        );
        let command = build(&settings, "/stage/*.jpg", "/out/final.mp4");
        assert_eq!(
            command,
            EncoderCommand::Shell(
                "ffmpeg -framerate 2 -i '/stage/*.jpg' -c:v libx264 '/out/final.mp4'"
                    .to_string()
            )
        );
    }

    #[test]
    fn malformed_template_is_passed_through_untouched() {
        // A template without placeholders is still handed to the shell; the
        // failure, if any, happens at execution time.
        let mut settings = TimelapseSettings::default();
        settings.set_template("ffmpeg -version".to_string());
        let command = build(&settings, "in/*.jpg", "out.mp4");
        assert_eq!(command, EncoderCommand::Shell("ffmpeg -version".to_string()));
    }

    #[test]
    fn shell_template_quotes_input_and_output() {
        let settings = TimelapseSettings::default();
        let line = shell_template(&settings);
        assert!(line.starts_with("ffmpeg -y -framerate 24"));
        assert!(line.contains("-i '{input}'"));
        assert!(line.ends_with("'{output}'"));
    }
}
