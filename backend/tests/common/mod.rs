// Not every util is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod test_setup;
pub use test_setup::*;
mod dynamodb_setup;
pub use dynamodb_setup::*;
pub use s3_setup::*;
