pub mod api;
pub mod client;
pub mod credentials;
pub mod error;
pub mod media;
pub mod types;

pub use api::{
    CastMember, CatalogApi, Credits, CrewMember, Image, ListPage, ReviewEntry, ReviewPage,
    TitleDetails,
};
pub use client::{DEFAULT_REQUESTS_PER_SECOND, TmdbClient};
pub use credentials::{CredentialSource, Credentials, config_path, credential_source, save_to_file};
pub use error::TmdbError;
pub use media::{IMAGE_BASE_URL, image_url};
