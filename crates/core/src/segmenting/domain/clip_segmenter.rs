use thiserror::Error;

use crate::audio::domain::audio_segment::AudioSegment;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("clip length must be greater than zero seconds")]
    ZeroClipLength,
    #[error("output name {0} would be produced by more than one input")]
    DuplicateOutputName(String),
}

/// Slices decoded audio into consecutive non-overlapping windows of a fixed
/// length. The final window may be shorter; there is no overlap and no
/// silence trimming.
pub struct ClipSegmenter {
    clip_length_secs: u64,
}

impl ClipSegmenter {
    pub fn new(clip_length_secs: u64) -> Result<Self, SegmentError> {
        if clip_length_secs == 0 {
            return Err(SegmentError::ZeroClipLength);
        }
        Ok(Self { clip_length_secs })
    }

    pub fn segment(&self, audio: &AudioSegment) -> Vec<AudioSegment> {
        let window = audio.samples_per(self.clip_length_secs as f64);
        if window == 0 {
            return Vec::new();
        }
        audio
            .samples()
            .chunks(window)
            .map(|chunk| AudioSegment::new(chunk.to_vec(), audio.sample_rate(), audio.channels()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn clip(duration_secs: f64) -> AudioSegment {
        AudioSegment::new(vec![0.0; (duration_secs * 16000.0) as usize], 16000, 1)
    }

    #[test]
    fn test_zero_clip_length_rejected() {
        assert!(matches!(
            ClipSegmenter::new(0),
            Err(SegmentError::ZeroClipLength)
        ));
    }

    #[rstest]
    #[case::evenly_divisible(20.0, 10, 2)]
    #[case::remainder(25.0, 10, 3)]
    #[case::shorter_than_window(4.0, 10, 1)]
    #[case::one_sample_over(10.0625, 10, 2)]
    fn test_segment_count_is_ceil_of_ratio(
        #[case] duration: f64,
        #[case] length: u64,
        #[case] expected: usize,
    ) {
        let segmenter = ClipSegmenter::new(length).unwrap();
        assert_eq!(segmenter.segment(&clip(duration)).len(), expected);
    }

    #[test]
    fn test_25s_clip_at_10s_yields_10_10_5() {
        let segmenter = ClipSegmenter::new(10).unwrap();
        let segments = segmenter.segment(&clip(25.0));
        assert_eq!(segments.len(), 3);
        assert_relative_eq!(segments[0].duration(), 10.0);
        assert_relative_eq!(segments[1].duration(), 10.0);
        assert_relative_eq!(segments[2].duration(), 5.0);
    }

    #[test]
    fn test_all_but_last_are_exact_length() {
        let segmenter = ClipSegmenter::new(3).unwrap();
        let segments = segmenter.segment(&clip(10.0));
        assert_eq!(segments.len(), 4);
        for segment in &segments[..3] {
            assert_relative_eq!(segment.duration(), 3.0);
        }
        assert_relative_eq!(segments[3].duration(), 1.0);
    }

    #[test]
    fn test_empty_clip_yields_no_segments() {
        let segmenter = ClipSegmenter::new(10).unwrap();
        assert!(segmenter.segment(&clip(0.0)).is_empty());
    }

    #[test]
    fn test_segments_keep_rate_and_channels() {
        let segmenter = ClipSegmenter::new(1).unwrap();
        let stereo = AudioSegment::new(vec![0.0; 96000], 16000, 2);
        let segments = segmenter.segment(&stereo);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].sample_rate(), 16000);
        assert_eq!(segments[0].channels(), 2);
        assert_relative_eq!(segments[0].duration(), 1.0);
    }
}
