//! Cross-crate tests of the public `basics-core` API.

mod core_api;
