mod home;
pub(crate) use home::bound_content;
pub use home::{Home, PAGE_BINDINGS};
