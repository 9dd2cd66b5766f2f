//! OpenGL backend.
//!
//! GL has no native notion of bind groups: every resource kind lives in its
//! own flat namespace of binding points (uniform buffer indices, texture
//! units, ...). The binding compiler here flattens the grouped abstract
//! layout into those namespaces. Concrete objects wrap raw GL object names;
//! the GL calls that consume them live in the command-recording layer, not
//! here.

use crate::backend::{Backend, BackendPipelineLayout, KindCounters, check_limit};
use crate::binding::BindingIndexTable;
use crate::error::BackendError;
use crate::layout::PipelineLayoutDescriptor;
use crate::limits::DeviceLimits;

/// Marker type implementing the GL side of the backend association table.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlBackend;

impl Backend for GlBackend {
    const NAME: &'static str = "OpenGL";

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

/// GL device. The GL context is bound to the calling thread, so the device
/// object carries no handle of its own.
#[derive(Debug, Default)]
pub struct Device;

/// GL queue marker. GL executes submitted work eagerly on the context
/// thread; there is no queue object to wrap.
#[derive(Debug, Default)]
pub struct Queue;

/// A GL buffer object name.
#[derive(Debug)]
pub struct Buffer {
    pub id: u32,
}

/// A GL texture object name.
#[derive(Debug)]
pub struct Texture {
    pub id: u32,
}

/// GL has no buffer view objects; a view records the buffer it reads and
/// the byte range within it.
#[derive(Debug)]
pub struct BufferView {
    pub buffer: u32,
    pub offset: u32,
    pub size: u32,
}

/// GL has no separate view objects; a view records the texture it reads.
#[derive(Debug)]
pub struct TextureView {
    pub texture: u32,
}

/// A GL sampler object name.
#[derive(Debug)]
pub struct Sampler {
    pub id: u32,
}

/// A compiled GL shader object name.
#[derive(Debug)]
pub struct ShaderModule {
    pub shader: u32,
}

/// Bind groups have no GL object; the recorded entries are applied slot by
/// slot at draw time using the owning layout's binding table.
#[derive(Debug, Default)]
pub struct BindGroup;

/// Bind group layouts have no GL object either; all layout state lives in
/// the compiled [`PipelineLayout`].
#[derive(Debug, Default)]
pub struct BindGroupLayout;

/// Blend state has no GL object; the recorded state is applied with raw
/// `glBlendFunc`/`glBlendEquation` calls at draw time.
#[derive(Debug, Default)]
pub struct BlendState;

/// Depth/stencil state has no GL object; applied as raw state at draw time.
#[derive(Debug, Default)]
pub struct DepthStencilState;

/// Input state has no GL object of its own; vertex attribute state is
/// captured in a VAO owned by the pipeline.
#[derive(Debug, Default)]
pub struct InputState;

/// GL has no render pass objects; attachments bind through an FBO when the
/// pass begins.
#[derive(Debug, Default)]
pub struct RenderPassDescriptor;

/// A linked GL program for the raster pipeline.
#[derive(Debug)]
pub struct RenderPipeline {
    pub program: u32,
}

/// A linked GL program for compute dispatch.
#[derive(Debug)]
pub struct ComputePipeline {
    pub program: u32,
}

/// GL command buffer marker; commands are replayed by the recording layer.
#[derive(Debug, Default)]
pub struct CommandBuffer;

/// GL swapchain marker; presentation goes through the window system.
#[derive(Debug, Default)]
pub struct SwapChain;

/// GL pipeline layout: owns the flattened binding index table.
///
/// Texture-unit policy: GL binds a sampler and the texture it samples to
/// the same texture unit, so the units consumed are the larger of the two
/// counts, not their sum.
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

        // Ascending (group, slot) order; each kind numbers its own flat
        // namespace from zero.
        for (group, binding, slot) in desc.slots() {
            let counter = counters.counter_mut(slot.ty);
            table.indices[group][binding] = *counter;
            *counter += 1;
        }

        counters.check(limits)?;

        let texture_units = counters.samplers.max(counters.sampled_textures);
        check_limit("texture unit", texture_units, limits.max_texture_units)?;

        table.sampler_count = counters.samplers;
        table.sampled_texture_count = counters.sampled_textures;
        table.texture_units_used = texture_units;

        log::trace!(
            "compiled GL pipeline layout {:?}: {} uniform buffers, {} storage buffers, \
             {} samplers, {} sampled textures, {} texture units",
            desc.label(),
            counters.uniform_buffers,
            counters.storage_buffers,
            counters.samplers,
            counters.sampled_textures,
            texture_units,
        );

        Ok(Self { table })
    }

    fn binding_table(&self) -> &BindingIndexTable {
        &self.table
    }
}
