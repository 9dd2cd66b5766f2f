//! Backend abstraction layer.
//!
//! One frontend object model is realized by several mutually incompatible
//! native graphics APIs. Two mechanisms keep that cheap and leak-free:
//!
//! - [`Backend`] is a compile-time association table: one associated type
//!   per abstract resource kind, implemented once per backend. A backend
//!   missing an association does not compile; there is no runtime check.
//! - [`ToBackend`] resolves a frontend handle to the concrete backend
//!   object behind it. Resolution is monomorphized per (kind, backend)
//!   pair and erased entirely by the compiler.
//!
//! Every backend's pipeline-layout type additionally implements
//! [`BackendPipelineLayout`]: the uniform compile contract that turns an
//! abstract layout into that backend's native binding indices. The
//! algorithms differ per backend (flattening for `gl`, identity for the
//! grouped models), but the output shape, traversal order, and limit
//! validation are identical.

pub mod dummy;
pub mod gl;
pub mod vulkan;

use std::fmt::Debug;

use crate::binding::BindingIndexTable;
use crate::error::BackendError;
use crate::layout::{BindingType, PipelineLayoutDescriptor};
use crate::limits::DeviceLimits;

/// Compile-time table associating every abstract resource kind with one
/// backend's concrete implementation type.
///
/// Implemented once per backend as a zero-sized marker type. Frontend
/// wrappers ([`crate::frontend`]) are generic over `B: Backend` and store
/// the concrete object directly, so backend code reaches the real object
/// through [`ToBackend`] without virtual calls or dynamic casts.
pub trait Backend: Sized + 'static {
    /// Backend name, for logs.
    const NAME: &'static str;

    type Device: Debug + Send + Sync;
    type Queue: Debug + Send + Sync;
    type Buffer: Debug + Send + Sync;
    type BufferView: Debug + Send + Sync;
    type Texture: Debug + Send + Sync;
    type TextureView: Debug + Send + Sync;
    type Sampler: Debug + Send + Sync;
    type ShaderModule: Debug + Send + Sync;
    type BindGroup: Debug + Send + Sync;
    type BindGroupLayout: Debug + Send + Sync;
    type PipelineLayout: BackendPipelineLayout;
    type BlendState: Debug + Send + Sync;
    type DepthStencilState: Debug + Send + Sync;
    type InputState: Debug + Send + Sync;
    type RenderPassDescriptor: Debug + Send + Sync;
    type RenderPipeline: Debug + Send + Sync;
    type ComputePipeline: Debug + Send + Sync;
    type CommandBuffer: Debug + Send + Sync;
    type SwapChain: Debug + Send + Sync;
}

/// Zero-cost resolution from a frontend handle to the concrete backend
/// object behind it.
///
/// The borrow lives exactly as long as the handle; there is no ownership
/// transfer and no allocation, and resolution cannot fail at runtime. Used
/// pervasively by backend code (command recording, resource binding,
/// pipeline creation) instead of virtual calls.
pub trait ToBackend {
    /// Concrete backend type behind this handle.
    type Target;

    /// Borrow the concrete backend object.
    fn to_backend(&self) -> &Self::Target;
}

/// Uniform compile contract for backend pipeline layouts.
///
/// Each backend's pipeline-layout type owns its [`BindingIndexTable`] and
/// builds it here, at pipeline-layout creation time. Implementations must
/// assign native indices over the descriptor's ascending (group, slot)
/// traversal order only, so compilation is deterministic, and must validate
/// aggregate counts against `limits` before producing a table.
pub trait BackendPipelineLayout: Debug + Send + Sync + Sized {
    /// Compile `desc` into this backend's native binding index space.
    ///
    /// The only expected failure is [`BackendError::LimitExceeded`]; a
    /// malformed descriptor cannot reach this point because
    /// [`PipelineLayoutDescriptor::new`] validates it. No partial table is
    /// ever returned.
    fn compile(desc: &PipelineLayoutDescriptor, limits: &DeviceLimits)
        -> Result<Self, BackendError>;

    /// The compiled table, immutable for the life of this layout.
    fn binding_table(&self) -> &BindingIndexTable;
}

/// Shared limit check used by every backend compiler.
pub(crate) fn check_limit(
    resource: &'static str,
    used: u32,
    limit: u32,
) -> Result<(), BackendError> {
    if used > limit {
        return Err(BackendError::LimitExceeded {
            resource,
            used,
            limit,
        });
    }
    Ok(())
}

/// Per-kind running totals accumulated while visiting a descriptor.
///
/// Shared by the backend compilers; only the interpretation of the counts
/// (flat index assignment vs. aggregate validation) differs per backend.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct KindCounters {
    pub uniform_buffers: u32,
    pub storage_buffers: u32,
    pub samplers: u32,
    pub sampled_textures: u32,
}

impl KindCounters {
    /// The running counter for one resource kind.
    pub fn counter_mut(&mut self, ty: BindingType) -> &mut u32 {
        match ty {
            BindingType::UniformBuffer => &mut self.uniform_buffers,
            BindingType::StorageBuffer => &mut self.storage_buffers,
            BindingType::Sampler => &mut self.samplers,
            BindingType::SampledTexture => &mut self.sampled_textures,
        }
    }

    /// Validate every per-kind total against the device limits.
    pub fn check(&self, limits: &DeviceLimits) -> Result<(), BackendError> {
        check_limit(
            BindingType::UniformBuffer.name(),
            self.uniform_buffers,
            limits.max_uniform_buffer_bindings,
        )?;
        check_limit(
            BindingType::StorageBuffer.name(),
            self.storage_buffers,
            limits.max_storage_buffer_bindings,
        )?;
        check_limit(
            BindingType::Sampler.name(),
            self.samplers,
            limits.max_sampler_bindings,
        )?;
        check_limit(
            BindingType::SampledTexture.name(),
            self.sampled_textures,
            limits.max_sampled_texture_bindings,
        )?;
        Ok(())
    }
}
