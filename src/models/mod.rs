//! Domain models for the docset build.
//!
//! - [`Entry`]: one HTML page whose navigation is indexed. The set is fixed, see [`ENTRIES`].
//! - [`NavEntry`]: a (label, path) pair found in an entry page's navigation.
//! - [`IndexRow`]: a row of the `searchIndex` table.
//! - [`DocsetPaths`]: where everything lands inside `<name>.docset`.

mod entry;
mod index_row;
mod paths;

pub use entry::*;
pub use index_row::*;
pub use paths::*;
