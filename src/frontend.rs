//! Frontend object model shared by all backends.
//!
//! Each frontend type is generic over a [`Backend`] and owns the concrete
//! backend object for that resource. Backend-specific code reaches the
//! concrete object through [`ToBackend`]; the frontend's public surface
//! never exposes a backend's quirks.

use crate::backend::{Backend, BackendPipelineLayout, ToBackend};
use crate::binding::BindingIndexTable;
use crate::error::BackendError;
use crate::layout::PipelineLayoutDescriptor;
use crate::limits::DeviceLimits;

macro_rules! frontend_handle {
    ($(#[$doc:meta])* $name:ident => $assoc:ident) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name<B: Backend> {
            raw: B::$assoc,
            label: Option<String>,
        }

        impl<B: Backend> $name<B> {
            /// Wrap a concrete backend object.
            pub fn new(raw: B::$assoc) -> Self {
                Self { raw, label: None }
            }

            /// Set a debug label.
            pub fn with_label(mut self, label: impl Into<String>) -> Self {
                self.label = Some(label.into());
                self
            }

            /// The debug label, if set.
            pub fn label(&self) -> Option<&str> {
                self.label.as_deref()
            }
        }

        impl<B: Backend> ToBackend for $name<B> {
            type Target = B::$assoc;

            fn to_backend(&self) -> &B::$assoc {
                &self.raw
            }
        }
    };
}

frontend_handle!(
    /// A queue for submitting recorded work.
    Queue => Queue
);
frontend_handle!(
    /// A GPU buffer.
    Buffer => Buffer
);
frontend_handle!(
    /// A view over a byte range of a buffer.
    BufferView => BufferView
);
frontend_handle!(
    /// A GPU texture.
    Texture => Texture
);
frontend_handle!(
    /// A view over a texture's subresources.
    TextureView => TextureView
);
frontend_handle!(
    /// A texture sampler.
    Sampler => Sampler
);
frontend_handle!(
    /// A compiled shader module.
    ShaderModule => ShaderModule
);
frontend_handle!(
    /// A bound collection of resources matching one bind group layout.
    BindGroup => BindGroup
);
frontend_handle!(
    /// The layout of a single bind group.
    BindGroupLayout => BindGroupLayout
);
frontend_handle!(
    /// Fixed-function color blend state for a raster pipeline.
    BlendState => BlendState
);
frontend_handle!(
    /// Fixed-function depth and stencil test state.
    DepthStencilState => DepthStencilState
);
frontend_handle!(
    /// Vertex input attribute and buffer layout state.
    InputState => InputState
);
frontend_handle!(
    /// Attachment configuration for one render pass.
    RenderPassDescriptor => RenderPassDescriptor
);
frontend_handle!(
    /// A compiled raster pipeline.
    RenderPipeline => RenderPipeline
);
frontend_handle!(
    /// A compiled compute pipeline.
    ComputePipeline => ComputePipeline
);
frontend_handle!(
    /// Recorded GPU commands awaiting submission.
    CommandBuffer => CommandBuffer
);
frontend_handle!(
    /// The presentation surface's image chain.
    SwapChain => SwapChain
);

/// A frontend device: owns the concrete backend device and the resource
/// limits reported at initialization.
#[derive(Debug)]
pub struct Device<B: Backend> {
    raw: B::Device,
    limits: DeviceLimits,
}

impl<B: Backend> Device<B> {
    /// Wrap a concrete backend device with the limits it reported.
    pub fn new(raw: B::Device, limits: DeviceLimits) -> Self {
        Self { raw, limits }
    }

    /// The resource-count limits of this device.
    pub fn limits(&self) -> &DeviceLimits {
        &self.limits
    }

    /// Compile an abstract pipeline layout for this device's backend.
    ///
    /// Fails only if the layout exceeds this device's resource limits; the
    /// descriptor itself was validated at construction.
    pub fn create_pipeline_layout(
        &self,
        desc: &PipelineLayoutDescriptor,
    ) -> Result<PipelineLayout<B>, BackendError> {
        log::debug!(
            "creating pipeline layout {:?} on {} backend",
            desc.label(),
            B::NAME
        );
        let raw = B::PipelineLayout::compile(desc, &self.limits)?;
        Ok(PipelineLayout { raw })
    }
}

impl<B: Backend> ToBackend for Device<B> {
    type Target = B::Device;

    fn to_backend(&self) -> &B::Device {
        &self.raw
    }
}

/// A frontend pipeline layout: owns the backend layout object and, through
/// it, the compiled binding table.
#[derive(Debug)]
pub struct PipelineLayout<B: Backend> {
    raw: B::PipelineLayout,
}

impl<B: Backend> PipelineLayout<B> {
    /// The compiled binding table: native index lookup by (group, slot)
    /// plus the aggregate counts native bind calls need.
    pub fn binding_table(&self) -> &BindingIndexTable {
        self.raw.binding_table()
    }
}

impl<B: Backend> ToBackend for PipelineLayout<B> {
    type Target = B::PipelineLayout;

    fn to_backend(&self) -> &B::PipelineLayout {
        &self.raw
    }
}

static_assertions::assert_impl_all!(Device<crate::backend::dummy::DummyBackend>: Send, Sync);
static_assertions::assert_impl_all!(Buffer<crate::backend::gl::GlBackend>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::DummyBackend;
    use crate::backend::{gl, vulkan};
    use crate::layout::BindGroupLayoutDescriptor;

    #[test]
    fn test_resolver_returns_same_object() {
        let buffer: Buffer<DummyBackend> =
            Buffer::new(crate::backend::dummy::Buffer).with_label("staging");

        let first = buffer.to_backend() as *const _;
        let second = buffer.to_backend() as *const _;
        assert!(std::ptr::eq(first, second));
        assert_eq!(buffer.label(), Some("staging"));
    }

    #[test]
    fn test_resolver_yields_concrete_backend_type() {
        // The same frontend type resolves to a different concrete type per
        // backend, checked entirely at compile time.
        let gl_buffer: Buffer<gl::GlBackend> = Buffer::new(gl::Buffer { id: 11 });
        let vk_buffer: Buffer<vulkan::VulkanBackend> = Buffer::new(vulkan::Buffer { raw: 0xab });

        assert_eq!(gl_buffer.to_backend().id, 11);
        assert_eq!(vk_buffer.to_backend().raw, 0xab);
    }

    #[test]
    fn test_state_object_kinds_resolve() {
        // Fixed-function state and pass kinds go through the same
        // association table as resource handles.
        let view: BufferView<vulkan::VulkanBackend> =
            BufferView::new(vulkan::BufferView { raw: 0x51 });
        assert_eq!(view.to_backend().raw, 0x51);

        let pass: RenderPassDescriptor<vulkan::VulkanBackend> =
            RenderPassDescriptor::new(vulkan::RenderPassDescriptor { raw: 0x52 });
        assert_eq!(pass.to_backend().raw, 0x52);

        let blend: BlendState<gl::GlBackend> = BlendState::new(gl::BlendState).with_label("opaque");
        let _: &gl::BlendState = blend.to_backend();
        assert_eq!(blend.label(), Some("opaque"));

        let depth: DepthStencilState<DummyBackend> =
            DepthStencilState::new(crate::backend::dummy::DepthStencilState);
        let _: &crate::backend::dummy::DepthStencilState = depth.to_backend();

        let input: InputState<DummyBackend> = InputState::new(crate::backend::dummy::InputState);
        let _: &crate::backend::dummy::InputState = input.to_backend();
    }

    #[test]
    fn test_device_builds_pipeline_layout() {
        let device: Device<DummyBackend> =
            Device::new(crate::backend::dummy::Device, DeviceLimits::default());
        let desc = PipelineLayoutDescriptor::new(&[
            BindGroupLayoutDescriptor::new().with_uniform_buffer(0),
        ])
        .unwrap();

        let layout = device.create_pipeline_layout(&desc).unwrap();
        assert_eq!(layout.binding_table().sampler_count(), 0);
    }

    #[test]
    fn test_device_rejects_layout_over_limits() {
        let limits = DeviceLimits {
            max_sampler_bindings: 1,
            ..DeviceLimits::default()
        };
        let device: Device<DummyBackend> = Device::new(crate::backend::dummy::Device, limits);
        let desc = PipelineLayoutDescriptor::new(&[
            BindGroupLayoutDescriptor::new().with_sampler(0).with_sampler(1),
        ])
        .unwrap();

        assert!(matches!(
            device.create_pipeline_layout(&desc),
            Err(BackendError::LimitExceeded { resource: "sampler", .. })
        ));
    }
}
