mod builtin;
mod static_catalog;

pub use static_catalog::StaticRecipeCatalog;
