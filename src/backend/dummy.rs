//! Dummy backend for testing and development.
//!
//! No GPU objects are created and no native API exists behind this backend;
//! every concrete type is a unit struct. It still satisfies the full
//! backend contract, including binding compilation, so frontend code and
//! tests can run without GPU hardware.

use crate::backend::{Backend, BackendPipelineLayout, KindCounters, check_limit};
use crate::binding::BindingIndexTable;
use crate::error::BackendError;
use crate::layout::PipelineLayoutDescriptor;
use crate::limits::DeviceLimits;

/// Marker type implementing the dummy side of the backend association
/// table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyBackend;

impl Backend for DummyBackend {
    const NAME: &'static str = "Dummy";

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

/// Dummy device (no GPU).
#[derive(Debug, Default)]
pub struct Device;

/// Dummy queue.
#[derive(Debug, Default)]
pub struct Queue;

/// Dummy buffer (no allocation).
#[derive(Debug, Default)]
pub struct Buffer;

/// Dummy buffer view.
#[derive(Debug, Default)]
pub struct BufferView;

/// Dummy texture.
#[derive(Debug, Default)]
pub struct Texture;

/// Dummy texture view.
#[derive(Debug, Default)]
pub struct TextureView;

/// Dummy sampler.
#[derive(Debug, Default)]
pub struct Sampler;

/// Dummy shader module.
#[derive(Debug, Default)]
pub struct ShaderModule;

/// Dummy bind group.
#[derive(Debug, Default)]
pub struct BindGroup;

/// Dummy bind group layout.
#[derive(Debug, Default)]
pub struct BindGroupLayout;

/// Dummy blend state.
#[derive(Debug, Default)]
pub struct BlendState;

/// Dummy depth/stencil state.
#[derive(Debug, Default)]
pub struct DepthStencilState;

/// Dummy input state.
#[derive(Debug, Default)]
pub struct InputState;

/// Dummy render pass descriptor.
#[derive(Debug, Default)]
pub struct RenderPassDescriptor;

/// Dummy render pipeline.
#[derive(Debug, Default)]
pub struct RenderPipeline;

/// Dummy compute pipeline.
#[derive(Debug, Default)]
pub struct ComputePipeline;

/// Dummy command buffer.
#[derive(Debug, Default)]
pub struct CommandBuffer;

/// Dummy swapchain.
#[derive(Debug, Default)]
pub struct SwapChain;

/// Dummy pipeline layout: identity binding table, same contract as the
/// real backends so contract tests can run against it.
///
/// Texture-unit policy: separate units, matching the grouped backends.
#[derive(Debug)]
pub struct PipelineLayout {
    table: BindingIndexTable,
}

impl BackendPipelineLayout for PipelineLayout {
    fn compile(
        desc: &PipelineLayoutDescriptor,
        limits: &DeviceLimits,
    ) -> Result<Self, BackendError> {
        log::trace!(
            "DummyBackend: compiling pipeline layout {:?} with {} bindings",
            desc.label(),
            desc.binding_count()
        );

        let mut table = BindingIndexTable::zeroed();
        let mut counters = KindCounters::default();

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

        Ok(Self { table })
    }

    fn binding_table(&self) -> &BindingIndexTable {
        &self.table
    }
}
