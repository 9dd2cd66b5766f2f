//! # Garnet Graphics
//!
//! Backend abstraction core for the Garnet graphics runtime: a single
//! frontend object model (devices, buffers, textures, pipeline layouts, ...)
//! realized by several mutually incompatible native graphics APIs.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`Backend`] - Per-backend compile-time association from each abstract
//!   resource kind to its concrete implementation type
//! - [`ToBackend`] - Zero-cost resolution from a frontend handle to the
//!   concrete backend object
//! - [`PipelineLayoutDescriptor`] - Backend-agnostic description of shader
//!   resource bindings, grouped by bind group and slot
//! - [`BindingIndexTable`] - Per-backend compiled binding indices plus the
//!   aggregate usage counts native bind calls need
//! - Multiple backend support: OpenGL, Vulkan, and Dummy (for testing)
//!
//! ## Example
//!
//! ```
//! use garnet_graphics::backend::dummy::{self, DummyBackend};
//! use garnet_graphics::{
//!     BindGroupLayoutDescriptor, Device, DeviceLimits, PipelineLayoutDescriptor,
//! };
//!
//! let device: Device<DummyBackend> = Device::new(dummy::Device, DeviceLimits::default());
//!
//! let desc = PipelineLayoutDescriptor::new(&[
//!     BindGroupLayoutDescriptor::new()
//!         .with_uniform_buffer(0)
//!         .with_sampled_texture(1),
//! ])
//! .unwrap();
//!
//! let layout = device.create_pipeline_layout(&desc).unwrap();
//! assert_eq!(layout.binding_table().sampled_texture_count(), 1);
//! ```

pub mod backend;
pub mod binding;
pub mod error;
pub mod frontend;
pub mod layout;
pub mod limits;

// Re-export main types for convenience
pub use backend::{Backend, BackendPipelineLayout, ToBackend};
pub use binding::BindingIndexTable;
pub use error::BackendError;
pub use frontend::{
    BindGroup, BindGroupLayout, BlendState, Buffer, BufferView, CommandBuffer, ComputePipeline,
    DepthStencilState, Device, InputState, PipelineLayout, Queue, RenderPassDescriptor,
    RenderPipeline, Sampler, ShaderModule, SwapChain, Texture, TextureView,
};
pub use layout::{
    BindGroupLayoutDescriptor, BindGroupLayoutEntry, BindingSlot, BindingType,
    PipelineLayoutDescriptor, ShaderStageFlags, MAX_BINDINGS_PER_GROUP, MAX_BIND_GROUPS,
};
pub use limits::DeviceLimits;

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// This should be called before using any graphics functionality.
pub fn init() {
    log::info!("Garnet Graphics v{} initialized", VERSION);
}
