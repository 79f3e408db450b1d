use std::path::PathBuf;
use std::process;

use clap::Parser;

use phraselator_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use phraselator_core::audio::infrastructure::wav_file_writer::WavFileWriter;
use phraselator_core::pipeline::segment_clips_use_case::SegmentClipsUseCase;
use phraselator_core::segmenting::domain::clip_segmenter::ClipSegmenter;

/// Segment audio clips into smaller fixed-length clips.
#[derive(Parser)]
#[command(name = "clip-segmenter")]
struct Cli {
    /// Directory containing the clips to segment.
    #[arg(short, long, default_value = "./")]
    directory: PathBuf,

    /// Length of the output clips, in seconds.
    #[arg(short, long, default_value = "10")]
    clip_length: u64,

    /// Input file format (mp3, wav, ...).
    #[arg(short, long, default_value = "mp3")]
    format: String,

    /// Basename for the output files; defaults to each input's own stem.
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let use_case = SegmentClipsUseCase::new(
        Box::new(FfmpegAudioReader),
        Box::new(WavFileWriter::new(16)),
        ClipSegmenter::new(cli.clip_length)?,
    );

    let written = use_case.run(&cli.directory, &cli.format, cli.output.as_deref())?;
    log::info!("wrote {} segment(s)", written.len());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.directory.is_dir() {
        return Err(format!("Directory not found: {}", cli.directory.display()).into());
    }
    if cli.clip_length == 0 {
        return Err("Clip length must be at least 1 second".into());
    }
    if cli.format.trim().is_empty() {
        return Err("Format must not be empty".into());
    }
    Ok(())
}
