mod albums;
mod artists;
mod server_prompt;
mod tracks;

pub use albums::AlbumList;
pub use artists::ArtistList;
pub use server_prompt::ServerPrompt;
pub use tracks::TrackTable;
