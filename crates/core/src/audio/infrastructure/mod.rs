pub mod cpal_recorder;
pub mod ffmpeg_audio_reader;
pub mod sox_converter;
pub mod wav_file_writer;
