pub mod deepspeech_recognizer;
pub mod model_resolver;
