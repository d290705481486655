//! Descriptor parsing, normalization, and local loading for datapack.
//!
//! This crate defines the schema layer: `datapackage.json` parsing
//! (`Descriptor`), the canonicalization pipeline (`Descriptor::normalize`),
//! README/markdown helpers, resource-name derivation, and loading from the
//! local filesystem (`load`).

pub mod descriptor;
pub mod load;
pub mod name;
pub mod normalize;
pub mod readme;

pub use descriptor::{
    parse_descriptor, Bugs, Descriptor, DescriptorError, Resource, SchemaField, TableSchema,
};
pub use load::load;
pub use name::name_from_url;
pub use readme::{description_from_markdown, normalize_line_endings, render_html, strip_tags};
