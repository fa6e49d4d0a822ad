use std::borrow::Cow;

pub(crate) type Str<'a> = Cow<'a, str>;

pub mod client;
pub mod common;
pub mod content;
pub mod error;
pub mod generate;
pub mod image;

pub use client::Client;

pub mod prelude {
    use super::*;

    pub use client::Client;

    pub use content::Blob;
    pub use content::Content;
    pub use content::Part;
    pub use content::Role;

    pub use error::Error;
    pub use error::Result;

    pub use generate::GenerateBuilder;
    pub use generate::Generation;
    pub use generate::ResponseModality;

    pub use super::image::load_image;
}
