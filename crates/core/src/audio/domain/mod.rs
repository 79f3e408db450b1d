pub mod audio_reader;
pub mod audio_recorder;
pub mod audio_segment;
pub mod audio_writer;
pub mod sample_converter;
