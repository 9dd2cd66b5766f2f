//! Compiled binding index tables.
//!
//! A [`BindingIndexTable`] is the output of one backend's binding-layout
//! compilation: a dense `[group][slot] -> native index` table plus the
//! aggregate usage counts the backend needs at draw/dispatch time. It is
//! owned by the backend's pipeline-layout object, immutable after
//! construction, and safe to read from any number of threads.

use bytemuck::{Pod, Zeroable};

use crate::layout::{MAX_BINDINGS_PER_GROUP, MAX_BIND_GROUPS};

/// Native binding indices and aggregate counts for one compiled pipeline
/// layout.
///
/// The table shape mirrors the abstract layout exactly. Entries are
/// zero-initialized; a value is meaningful only for slots occupied in the
/// source descriptor (occupancy is a property of the descriptor, not the
/// table). `Pod` so command recording can copy or hash the table as raw
/// bytes, and so determinism is checkable at the byte level.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct BindingIndexTable {
    pub(crate) indices: [[u32; MAX_BINDINGS_PER_GROUP]; MAX_BIND_GROUPS],
    pub(crate) texture_units_used: u32,
    pub(crate) sampler_count: u32,
    pub(crate) sampled_texture_count: u32,
}

impl BindingIndexTable {
    /// A zero-filled table, the starting point for every compiler.
    pub(crate) fn zeroed() -> Self {
        Zeroable::zeroed()
    }

    /// Native index assigned to `(group, binding)`.
    ///
    /// Meaningful only if the source descriptor occupies that slot. Native
    /// indices are unique within each resource kind's own numbering space,
    /// not globally.
    ///
    /// Panics if `group` is not below [`MAX_BIND_GROUPS`] or `binding` is
    /// not below [`MAX_BINDINGS_PER_GROUP`]; callers bind within the table
    /// shape, never past it.
    pub fn native_index(&self, group: usize, binding: usize) -> u32 {
        debug_assert!(
            group < MAX_BIND_GROUPS && binding < MAX_BINDINGS_PER_GROUP,
            "binding table lookup ({group}, {binding}) is outside the table shape"
        );
        self.indices[group][binding]
    }

    /// Number of texture units the layout consumes, under the owning
    /// backend's unit-sharing policy.
    pub fn texture_units_used(&self) -> u32 {
        self.texture_units_used
    }

    /// Number of distinct sampler slots across the whole layout.
    pub fn sampler_count(&self) -> u32 {
        self.sampler_count
    }

    /// Number of distinct sampled-texture slots across the whole layout.
    pub fn sampled_texture_count(&self) -> u32 {
        self.sampled_texture_count
    }
}

static_assertions::assert_impl_all!(BindingIndexTable: Send, Sync, Pod);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_table() {
        let table = BindingIndexTable::zeroed();
        assert_eq!(table.native_index(0, 0), 0);
        assert_eq!(table.native_index(MAX_BIND_GROUPS - 1, MAX_BINDINGS_PER_GROUP - 1), 0);
        assert_eq!(table.sampler_count(), 0);
        assert_eq!(table.sampled_texture_count(), 0);
        assert_eq!(table.texture_units_used(), 0);
    }

    #[test]
    #[should_panic(expected = "outside the table shape")]
    fn test_native_index_rejects_out_of_range_group() {
        let table = BindingIndexTable::zeroed();
        table.native_index(MAX_BIND_GROUPS, 0);
    }

    #[test]
    fn test_table_is_plain_bytes() {
        // No padding: the whole table round-trips through raw bytes.
        let mut table = BindingIndexTable::zeroed();
        table.indices[1][2] = 7;
        table.sampler_count = 3;

        let bytes = bytemuck::bytes_of(&table);
        let back: BindingIndexTable = bytemuck::pod_read_unaligned(bytes);
        assert_eq!(back, table);
    }
}
