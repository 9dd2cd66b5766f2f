//! Backend resource-count limits.
//!
//! Each backend reports how many bindings of each resource kind its native
//! API can address. The binding compilers validate aggregate counts against
//! these limits; exceeding any of them fails pipeline-layout creation.

/// Resource-count maxima for one device on one backend.
///
/// Filled in by device initialization from the native API's reported caps
/// and handed to every pipeline-layout compilation on that device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceLimits {
    /// Maximum uniform buffer binding points.
    pub max_uniform_buffer_bindings: u32,
    /// Maximum storage buffer binding points.
    pub max_storage_buffer_bindings: u32,
    /// Maximum sampler bindings.
    pub max_sampler_bindings: u32,
    /// Maximum sampled texture bindings.
    pub max_sampled_texture_bindings: u32,
    /// Maximum texture units available to all shader stages combined.
    pub max_texture_units: u32,
}

impl Default for DeviceLimits {
    /// Conservative baseline matching the guaranteed minima of GL 4.x era
    /// hardware. Real devices report higher values.
    fn default() -> Self {
        Self {
            max_uniform_buffer_bindings: 72,
            max_storage_buffer_bindings: 8,
            max_sampler_bindings: 16,
            max_sampled_texture_bindings: 48,
            max_texture_units: 48,
        }
    }
}

static_assertions::assert_impl_all!(DeviceLimits: Send, Sync);
