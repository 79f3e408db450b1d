pub mod language;
pub mod speech_recognizer;
