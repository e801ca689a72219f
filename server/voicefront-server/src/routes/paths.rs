//! Route path constants
//!
//! Paths are relative to the `/api` prefix except [`ROOT`].

/// Prefix the API routes are nested under.
pub const API: &str = "/api";

/// Root service-info path.
pub const ROOT: &str = "/";

pub mod stt {
    pub const TRANSCRIBE: &str = "/stt/transcribe";
}

pub mod intent {
    pub const ROUTE: &str = "/intent/route";
}

pub mod tts {
    pub const SPEAK: &str = "/tts/speak";
}

pub mod health {
    pub const HEALTHZ: &str = "/healthz";
    pub const READYZ: &str = "/readyz";
}
