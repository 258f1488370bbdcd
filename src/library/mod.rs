//! Client-side library navigation and playback state.

pub mod endpoint;
pub mod fetch;
pub mod normalize;
pub mod playback;
pub mod selection;

pub use endpoint::{normalize_base_url, ServerEndpoint};
pub use fetch::{execute, Completion, FetchRequest, FetchTicket};
pub use normalize::{compare_tracks, normalize_tracks};
pub use playback::PlaybackTracker;
pub use selection::{SelectionController, SelectionPhase};
