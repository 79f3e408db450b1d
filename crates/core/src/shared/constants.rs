/// Sample rate used for recorded queries, decoded clips, and exported segments.
pub const AUDIO_SAMPLE_RATE: u32 = 16000;

/// How long one spoken query lasts, in seconds.
pub const QUERY_DURATION_SECS: f64 = 5.5;

/// How many ranked questions the UI offers for confirmation.
pub const SURFACED_CANDIDATES: usize = 2;

/// The recorded query is written here and overwritten on every attempt.
pub const QUERY_FILENAME: &str = "query.wav";

/// The Alaska DOL wage-and-hour FAQ page the table was compiled from.
pub const FAQ_SOURCE_URL: &str = "https://labor.alaska.gov/lss/whfaq.htm";
