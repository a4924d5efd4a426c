pub mod fallback;
pub mod format;
pub mod provider;
pub mod transcript;

pub use fallback::{AttemptSpec, ChainError, ChainOutcome, FallbackChain};
pub use format::{TextFormatter, normalize_transcript};
pub use provider::{LanguagePreference, ProviderError, TranscriptProvider, YoutubeProvider};
pub use transcript::{InvalidVideoId, TranscriptSegment, VideoId};
