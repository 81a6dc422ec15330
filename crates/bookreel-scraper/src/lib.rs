pub mod client;
pub mod error;
pub mod extract;
mod fields;
mod html;
mod jsonld;
pub mod normalize;
pub mod profile;

pub use client::ListingClient;
pub use error::{FetchError, ProfileError};
pub use extract::BookExtractor;
pub use normalize::{clean_description, clean_title};
pub use profile::ExtractionProfile;
