//! Dependency resolution from the application context.
//!
//! Services implement `FromRef<Context>` so handlers can build them from the
//! shared state they receive. The context has only two fields, so the impls
//! are written by hand (`context.rs`, `services/category.rs`) instead of
//! being generated by derive macros:
//!
//! ```ignore
//! use categoria::di::FromRef;
//!
//! let provider = CategoryPageProvider::from_ref(&ctx);
//! ```

/// Trait for extracting a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Blanket implementation: any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}
