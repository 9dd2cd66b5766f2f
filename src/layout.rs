//! Abstract pipeline layout: the backend-agnostic description of shader
//! resource bindings.
//!
//! A pipeline layout is a sparse table of up to [`MAX_BIND_GROUPS`] bind
//! groups, each with up to [`MAX_BINDINGS_PER_GROUP`] binding slots. Each
//! occupied slot carries a resource kind and the shader stages that can see
//! it. The descriptor is validated once at construction and immutable
//! afterwards; every backend compiles its own native binding indices from
//! the same descriptor.

use bitflags::bitflags;

use crate::error::BackendError;

/// Maximum number of bind groups in a pipeline layout.
///
/// This is a hardware/API bound shared by all backends, not an
/// implementation convenience; the compiled binding table has exactly this
/// many rows.
pub const MAX_BIND_GROUPS: usize = 4;

/// Maximum number of binding slots within one bind group.
pub const MAX_BINDINGS_PER_GROUP: usize = 16;

/// Kind of resource a binding slot expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingType {
    /// Uniform buffer (read-only, small, frequently updated).
    UniformBuffer,
    /// Storage buffer (read-write, larger data).
    StorageBuffer,
    /// Texture sampler.
    Sampler,
    /// Sampled texture (for reading in shaders).
    SampledTexture,
}

impl BindingType {
    /// Human-readable name, used in limit-exceeded errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::UniformBuffer => "uniform buffer",
            Self::StorageBuffer => "storage buffer",
            Self::Sampler => "sampler",
            Self::SampledTexture => "sampled texture",
        }
    }
}

bitflags! {
    /// Shader stages that can access a binding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ShaderStageFlags: u32 {
        /// Vertex shader stage.
        const VERTEX = 1 << 0;
        /// Fragment shader stage.
        const FRAGMENT = 1 << 1;
        /// Compute shader stage.
        const COMPUTE = 1 << 2;
    }
}

/// Describes a single binding slot in a bind group layout.
#[derive(Debug, Clone)]
pub struct BindGroupLayoutEntry {
    /// Binding slot index within the group.
    pub binding: u32,

    /// Type of resource expected at this binding.
    pub ty: BindingType,

    /// Shader stages that can access this binding.
    pub visibility: ShaderStageFlags,
}

impl BindGroupLayoutEntry {
    /// Create a new entry visible to vertex and fragment stages.
    pub fn new(binding: u32, ty: BindingType) -> Self {
        Self {
            binding,
            ty,
            visibility: ShaderStageFlags::VERTEX | ShaderStageFlags::FRAGMENT,
        }
    }

    /// Set the shader stage visibility.
    pub fn with_visibility(mut self, visibility: ShaderStageFlags) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Describes the binding slots of one bind group.
#[derive(Debug, Clone, Default)]
pub struct BindGroupLayoutDescriptor {
    entries: Vec<BindGroupLayoutEntry>,
    label: Option<String>,
}

impl BindGroupLayoutDescriptor {
    /// Create a new empty group descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding entry.
    pub fn with_entry(mut self, entry: BindGroupLayoutEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add a uniform buffer binding.
    pub fn with_uniform_buffer(self, binding: u32) -> Self {
        self.with_entry(BindGroupLayoutEntry::new(binding, BindingType::UniformBuffer))
    }

    /// Add a storage buffer binding.
    pub fn with_storage_buffer(self, binding: u32) -> Self {
        self.with_entry(BindGroupLayoutEntry::new(binding, BindingType::StorageBuffer))
    }

    /// Add a sampler binding.
    pub fn with_sampler(self, binding: u32) -> Self {
        self.with_entry(BindGroupLayoutEntry::new(binding, BindingType::Sampler))
    }

    /// Add a sampled texture binding.
    pub fn with_sampled_texture(self, binding: u32) -> Self {
        self.with_entry(BindGroupLayoutEntry::new(binding, BindingType::SampledTexture))
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The binding entries in declaration order.
    pub fn entries(&self) -> &[BindGroupLayoutEntry] {
        &self.entries
    }

    /// The debug label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// One occupied binding slot of a validated pipeline layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingSlot {
    /// Resource kind bound at this slot.
    pub ty: BindingType,
    /// Shader stages that can access this slot.
    pub visibility: ShaderStageFlags,
}

/// Validated, immutable description of a full pipeline layout.
///
/// The table is sparse: a slot with no resource is simply absent. Validation
/// (group/slot bounds, slot uniqueness) happens once in [`Self::new`]; the
/// backend compilers assume these invariants and do not re-check them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineLayoutDescriptor {
    groups: [[Option<BindingSlot>; MAX_BINDINGS_PER_GROUP]; MAX_BIND_GROUPS],
    label: Option<String>,
}

impl PipelineLayoutDescriptor {
    /// Build a pipeline layout from per-group descriptors.
    ///
    /// Group index is the position in `groups`. Fails if more than
    /// [`MAX_BIND_GROUPS`] groups are supplied, if any binding slot index is
    /// at or above [`MAX_BINDINGS_PER_GROUP`], or if a group declares the
    /// same slot twice.
    pub fn new(groups: &[BindGroupLayoutDescriptor]) -> Result<Self, BackendError> {
        if groups.len() > MAX_BIND_GROUPS {
            return Err(BackendError::TooManyBindGroups {
                count: groups.len(),
                max: MAX_BIND_GROUPS,
            });
        }

        let mut table = [[None; MAX_BINDINGS_PER_GROUP]; MAX_BIND_GROUPS];
        for (group_index, group) in groups.iter().enumerate() {
            for entry in group.entries() {
                if entry.binding as usize >= MAX_BINDINGS_PER_GROUP {
                    return Err(BackendError::BindingOutOfRange {
                        group: group_index,
                        binding: entry.binding,
                        max: MAX_BINDINGS_PER_GROUP as u32,
                    });
                }
                let slot = &mut table[group_index][entry.binding as usize];
                if slot.is_some() {
                    return Err(BackendError::DuplicateBinding {
                        group: group_index,
                        binding: entry.binding,
                    });
                }
                *slot = Some(BindingSlot {
                    ty: entry.ty,
                    visibility: entry.visibility,
                });
            }
        }

        Ok(Self {
            groups: table,
            label: None,
        })
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

    /// Look up the slot at `(group, binding)`, if occupied.
    ///
    /// Panics if `group` is not below [`MAX_BIND_GROUPS`] or `binding` is
    /// not below [`MAX_BINDINGS_PER_GROUP`].
    pub fn slot(&self, group: usize, binding: usize) -> Option<BindingSlot> {
        debug_assert!(
            group < MAX_BIND_GROUPS && binding < MAX_BINDINGS_PER_GROUP,
            "slot lookup ({group}, {binding}) is outside the layout shape"
        );
        self.groups[group][binding]
    }

    /// Iterate over occupied slots as `(group, binding, slot)`.
    ///
    /// Visits groups in ascending group-index order and, within a group,
    /// slots in ascending slot-index order. Native index assignment is
    /// defined over exactly this order, never over declaration order.
    pub fn slots(&self) -> impl Iterator<Item = (usize, usize, BindingSlot)> + '_ {
        self.groups.iter().enumerate().flat_map(|(group, slots)| {
            slots
                .iter()
                .copied()
                .enumerate()
                .filter_map(move |(binding, slot)| slot.map(|s| (group, binding, s)))
        })
    }

    /// Total number of occupied slots across all groups.
    pub fn binding_count(&self) -> usize {
        self.slots().count()
    }
}

static_assertions::assert_impl_all!(PipelineLayoutDescriptor: Send, Sync);
