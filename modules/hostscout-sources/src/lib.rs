pub mod circl;
pub mod extract;
pub mod fetch;
pub mod limits;
pub mod nameset;
pub mod registry;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
