//! Vulkan backend.
//!
//! Vulkan's descriptor sets preserve the abstract layout's grouping
//! natively: set index = bind group, binding index = slot. The binding
//! compiler is therefore identity-like; its real work is the aggregate
//! counting and limit validation shared with every other backend. Concrete
//! objects wrap raw dispatchable/non-dispatchable handle values; the API
//! calls that consume them live outside this crate.

use crate::backend::{Backend, BackendPipelineLayout, KindCounters, check_limit};
use crate::binding::BindingIndexTable;
use crate::error::BackendError;
use crate::layout::PipelineLayoutDescriptor;
use crate::limits::DeviceLimits;

/// Marker type implementing the Vulkan side of the backend association
/// table.
#[derive(Debug, Clone, Copy, Default)]
pub struct VulkanBackend;

impl Backend for VulkanBackend {
    const NAME: &'static str = "Vulkan";

    type Device = Device;
    type Queue = Queue;
    type Buffer = Buffer;
    type BufferView = BufferView;
    type Texture = Texture;
    type TextureView = TextureView;
    type Sampler = Sampler;
    type ShaderModule = ShaderModule;
    type BindGroup = BindGroup;
    type BindGroupLayout = BindGroupLayout;
    type PipelineLayout = PipelineLayout;
    type BlendState = BlendState;
    type DepthStencilState = DepthStencilState;
    type InputState = InputState;
    type RenderPassDescriptor = RenderPassDescriptor;
    type RenderPipeline = RenderPipeline;
    type ComputePipeline = ComputePipeline;
    type CommandBuffer = CommandBuffer;
    type SwapChain = SwapChain;
}

/// A `VkDevice` handle value.
#[derive(Debug)]
pub struct Device {
    pub raw: u64,
}

/// A `VkQueue` handle value and the family it was created from.
#[derive(Debug)]
pub struct Queue {
    pub raw: u64,
    pub family_index: u32,
}

/// A `VkBuffer` handle value.
#[derive(Debug)]
pub struct Buffer {
    pub raw: u64,
}

/// A `VkBufferView` handle value.
#[derive(Debug)]
pub struct BufferView {
    pub raw: u64,
}

/// A `VkImage` handle value.
#[derive(Debug)]
pub struct Texture {
    pub raw: u64,
}

/// A `VkImageView` handle value.
#[derive(Debug)]
pub struct TextureView {
    pub raw: u64,
}

/// A `VkSampler` handle value.
#[derive(Debug)]
pub struct Sampler {
    pub raw: u64,
}

/// A `VkShaderModule` handle value.
#[derive(Debug)]
pub struct ShaderModule {
    pub raw: u64,
}

/// A `VkDescriptorSet` handle value.
#[derive(Debug)]
pub struct BindGroup {
    pub raw: u64,
}

/// A `VkDescriptorSetLayout` handle value.
#[derive(Debug)]
pub struct BindGroupLayout {
    pub raw: u64,
}

/// Blend state has no Vulkan object; it folds into
/// `VkPipelineColorBlendStateCreateInfo` at pipeline creation.
#[derive(Debug, Default)]
pub struct BlendState;

/// Depth/stencil state folds into pipeline creation the same way.
#[derive(Debug, Default)]
pub struct DepthStencilState;

/// Input state folds into `VkPipelineVertexInputStateCreateInfo` at
/// pipeline creation.
#[derive(Debug, Default)]
pub struct InputState;

/// A `VkRenderPass` handle value.
#[derive(Debug)]
pub struct RenderPassDescriptor {
    pub raw: u64,
}

/// A `VkPipeline` handle value for the raster pipeline.
#[derive(Debug)]
pub struct RenderPipeline {
    pub raw: u64,
}

/// A `VkPipeline` handle value for compute dispatch.
#[derive(Debug)]
pub struct ComputePipeline {
    pub raw: u64,
}

/// A `VkCommandBuffer` handle value.
#[derive(Debug)]
pub struct CommandBuffer {
    pub raw: u64,
}

/// A `VkSwapchainKHR` handle value.
#[derive(Debug)]
pub struct SwapChain {
    pub raw: u64,
}

/// Vulkan pipeline layout: owns the (identity) binding index table.
///
/// Texture-unit policy: samplers and sampled images occupy separate
/// descriptors, so the units consumed are the sum of the two counts.
#[derive(Debug)]
pub struct PipelineLayout {
    table: BindingIndexTable,
}

impl BackendPipelineLayout for PipelineLayout {
    fn compile(
        desc: &PipelineLayoutDescriptor,
        limits: &DeviceLimits,
    ) -> Result<Self, BackendError> {
        let mut table = BindingIndexTable::zeroed();
        let mut counters = KindCounters::default();

        // Descriptor sets keep the grouping: the native index is the slot
        // index itself. Aggregates are still accumulated in ascending
        // (group, slot) order for limit validation.
        for (group, binding, slot) in desc.slots() {
            table.indices[group][binding] = binding as u32;
            *counters.counter_mut(slot.ty) += 1;
        }

        counters.check(limits)?;

        let texture_units = counters.samplers + counters.sampled_textures;
        check_limit("texture unit", texture_units, limits.max_texture_units)?;

        table.sampler_count = counters.samplers;
        table.sampled_texture_count = counters.sampled_textures;
        table.texture_units_used = texture_units;

        log::trace!(
            "compiled Vulkan pipeline layout {:?}: {} bindings over {} descriptors",
            desc.label(),
            desc.binding_count(),
            texture_units
                + counters.uniform_buffers
                + counters.storage_buffers,
        );

        Ok(Self { table })
    }

    fn binding_table(&self) -> &BindingIndexTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BindGroupLayoutDescriptor;

    #[test]
    fn test_grouped_model_preserves_slot_indices() {
        let desc = PipelineLayoutDescriptor::new(&[
            BindGroupLayoutDescriptor::new()
                .with_uniform_buffer(0)
                .with_sampled_texture(3),
            BindGroupLayoutDescriptor::new().with_sampler(7),
        ])
        .unwrap();

        let layout = PipelineLayout::compile(&desc, &DeviceLimits::default()).unwrap();
        let table = layout.binding_table();

        assert_eq!(table.native_index(0, 0), 0);
        assert_eq!(table.native_index(0, 3), 3);
        assert_eq!(table.native_index(1, 7), 7);
    }

    #[test]
    fn test_separate_unit_policy_sums_counts() {
        let desc = PipelineLayoutDescriptor::new(&[
            BindGroupLayoutDescriptor::new()
                .with_sampler(0)
                .with_sampler(1)
                .with_sampled_texture(2),
        ])
        .unwrap();

        let layout = PipelineLayout::compile(&desc, &DeviceLimits::default()).unwrap();
        let table = layout.binding_table();

        assert_eq!(table.sampler_count(), 2);
        assert_eq!(table.sampled_texture_count(), 1);
        assert_eq!(table.texture_units_used(), 3);
    }

    #[test]
    fn test_limit_validation_applies() {
        let limits = DeviceLimits {
            max_uniform_buffer_bindings: 1,
            ..DeviceLimits::default()
        };
        let desc = PipelineLayoutDescriptor::new(&[
            BindGroupLayoutDescriptor::new()
                .with_uniform_buffer(0)
                .with_uniform_buffer(1),
        ])
        .unwrap();

        let err = PipelineLayout::compile(&desc, &limits).unwrap_err();
        assert_eq!(
            err,
            BackendError::LimitExceeded {
                resource: "uniform buffer",
                used: 2,
                limit: 1
            }
        );
    }
}
