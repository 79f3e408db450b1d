use std::fs;
use std::path::{Path, PathBuf};

use std::collections::HashSet;

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::audio_writer::AudioWriter;
use crate::segmenting::domain::clip_segmenter::{ClipSegmenter, SegmentError};
use crate::shared::constants::AUDIO_SAMPLE_RATE;

/// Cuts every matching audio file in a directory into fixed-length clips and
/// exports each clip as an individual WAV.
///
/// Output names follow the original dataset tooling: `{stem}{i}.wav` per
/// input file, or `{basename}{i}.wav` with a run-wide index when a basename
/// is supplied, so names stay unique across inputs.
pub struct SegmentClipsUseCase {
    reader: Box<dyn AudioReader>,
    writer: Box<dyn AudioWriter>,
    segmenter: ClipSegmenter,
}

impl SegmentClipsUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        writer: Box<dyn AudioWriter>,
        segmenter: ClipSegmenter,
    ) -> Self {
        Self {
            reader,
            writer,
            segmenter,
        }
    }

    /// Returns the paths written, in order. A directory with no matching
    /// files yields an empty list; a decode failure or an output-name
    /// collision aborts the run.
    pub fn run(
        &self,
        directory: &Path,
        format: &str,
        basename: Option<&str>,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        let inputs = matching_files(directory, format)?;
        log::info!(
            "segmenting {} {format} file(s) from {}",
            inputs.len(),
            directory.display()
        );

        let mut written = Vec::new();
        let mut emitted = HashSet::new();
        let mut run_index = 0usize;

        for input in inputs {
            let Some(audio) = self.reader.read_audio(&input, AUDIO_SAMPLE_RATE)? else {
                log::warn!("{} has no audio stream, skipping", input.display());
                continue;
            };

            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            for (i, segment) in self.segmenter.segment(&audio).iter().enumerate() {
                let name = match basename {
                    Some(base) => format!("{base}{run_index}.wav"),
                    None => format!("{stem}{i}.wav"),
                };
                run_index += 1;

                // Stem+index concatenation can clash across inputs (the 11th
                // window of `a` and the 1st of `a1` are both `a10.wav`).
                if !emitted.insert(name.clone()) {
                    return Err(Box::new(SegmentError::DuplicateOutputName(name)));
                }

                let path = PathBuf::from(name);
                self.writer.write_audio(&path, segment)?;
                written.push(path);
            }
        }

        Ok(written)
    }
}

/// Files in `directory` whose extension matches `format`, sorted by name.
fn matching_files(directory: &Path, format: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(format))
            .unwrap_or(false);
        if path.is_file() && matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
