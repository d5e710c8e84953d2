//! Entity trait: identity that outlives attribute values.

/// Entity marker + minimal interface.
///
/// Catalog records are entities: two products with the same attributes but
/// different ids are different products. The integrity pass uses this trait to
/// find duplicate identifiers generically.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
