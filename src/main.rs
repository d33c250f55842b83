use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use timelapse::{command, job, Codec, Framerate, JobOptions, Resolution, TimelapseSettings};

/// Assemble a set of photos into a timelapse video with ffmpeg.
///
/// Frame order is the lexicographic order of the photo paths. The output
/// lands on the desktop as `timelapse_<timestamp>.mp4` (`.mov` for ProRes)
/// unless --output-dir says otherwise.
#[derive(Parser, Debug)]
#[command(name = "timelapse", version)]
struct Cli {
    /// Photos to include in the timelapse.
    #[arg(required_unless_present = "print_template")]
    photos: Vec<PathBuf>,

    /// Frames per second of the output video.
    #[arg(long, value_enum, default_value = "24")]
    fps: Framerate,

    /// Output resolution preset.
    #[arg(long, value_enum, default_value = "1080p")]
    resolution: Resolution,

    /// Codec preset; also selects the container (.mp4 or .mov).
    #[arg(long, value_enum, default_value = "h264")]
    codec: Codec,

    /// Custom ffmpeg command line with {input} and {output} placeholders,
    /// replacing the generated arguments entirely.
    #[arg(long)]
    template: Option<String>,

    /// Where to write the output video (default: the desktop).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Path to the ffmpeg binary (default: search PATH and common
    /// install locations).
    #[arg(long)]
    ffmpeg: Option<PathBuf>,

    /// Print the command the current settings would generate, with the
    /// placeholders left in, and exit.
    #[arg(long)]
    print_template: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut settings = TimelapseSettings::default();
    settings.set_framerate(cli.fps);
    settings.set_resolution(cli.resolution);
    settings.set_codec(cli.codec);
    // The template goes last: the setters above would clear it.
    if let Some(template) = cli.template {
        settings.set_template(template);
    }

    if cli.print_template {
        println!("{}", command::shell_template(&settings));
        return Ok(());
    }

    let options = JobOptions {
        output_dir: cli.output_dir,
        encoder: cli.ffmpeg,
    };

    let outcome = job::run(&cli.photos, &settings, &options)
        .context("could not create the timelapse")?;
    info!("{} photos encoded", outcome.frames);
    println!("Saved {}", outcome.output_path.display());
    Ok(())
}
