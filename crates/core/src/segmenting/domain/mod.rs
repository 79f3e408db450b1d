pub mod clip_segmenter;
