use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Synthesis error: {0}")]
    Synthesis(String),

    #[error("Synthesis timed out after {0} ms")]
    SynthesisTimeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Audio encoding error: {0}")]
    AudioEncoding(#[from] hound::Error),
}

pub type SpeechResult<T> = Result<T, SpeechError>;
