//! Parse results and the two entry points that produce them.
//!
//! [`filter_document`] augments an existing parse with the outlinks hiding
//! in a document's scripts; [`parse_js_resource`] builds a parse from
//! scratch for a fetched `.js` file. Both feed the scanning pipeline in
//! [`crate::scan`].

mod filter;
mod models;
mod script;

// Re-export public API
pub use filter::filter_document;
pub use models::{Outlink, ParseResult, ParseStatus};
pub use script::parse_js_resource;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
