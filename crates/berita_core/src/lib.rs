pub mod config;
pub mod error;
pub mod source;
pub mod table;
pub mod types;

pub use error::Error;
pub use source::{load_table, ArticleSource, Document};
pub use table::ArticleTable;
pub use types::Article;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::{Article, ArticleSource, ArticleTable, Error, Result};
}
