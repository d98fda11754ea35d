// Wed Jan 21 2026 - Alex

use crate::catalog::{NativeStruct, StructCatalog};
use crate::compare::ActualLayout;
use crate::extract::{NativeType, StructDecl};
use std::ffi::{c_char, c_void};
use std::mem;

// The structs below mirror the C declarations of the rendering library
// this binding wraps. Every one of them crosses the FFI boundary by value,
// so each carries a NativeStruct adapter and is swept by the verifier.

#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl NativeStruct for Color {
    fn type_name() -> &'static str {
        "Color"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("Color")
            .prim("r", NativeType::F32)
            .prim("g", NativeType::F32)
            .prim("b", NativeType::F32)
            .prim("a", NativeType::F32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("Color", mem::size_of::<Color>())
            .with_field("r", mem::offset_of!(Color, r))
            .with_field("g", mem::offset_of!(Color, g))
            .with_field("b", mem::offset_of!(Color, b))
            .with_field("a", mem::offset_of!(Color, a))
    }
}

#[repr(C)]
pub struct Range {
    pub ptr: *const c_void,
    pub len: usize,
}

impl NativeStruct for Range {
    fn type_name() -> &'static str {
        "Range"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("Range")
            .prim("ptr", NativeType::Ptr)
            .prim("len", NativeType::USize)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("Range", mem::size_of::<Range>())
            .with_field("ptr", mem::offset_of!(Range, ptr))
            .with_field("len", mem::offset_of!(Range, len))
    }
}

#[repr(C)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl NativeStruct for Viewport {
    fn type_name() -> &'static str {
        "Viewport"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("Viewport")
            .prim("x", NativeType::F32)
            .prim("y", NativeType::F32)
            .prim("width", NativeType::F32)
            .prim("height", NativeType::F32)
            .prim("min_depth", NativeType::F32)
            .prim("max_depth", NativeType::F32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("Viewport", mem::size_of::<Viewport>())
            .with_field("x", mem::offset_of!(Viewport, x))
            .with_field("y", mem::offset_of!(Viewport, y))
            .with_field("width", mem::offset_of!(Viewport, width))
            .with_field("height", mem::offset_of!(Viewport, height))
            .with_field("min_depth", mem::offset_of!(Viewport, min_depth))
            .with_field("max_depth", mem::offset_of!(Viewport, max_depth))
    }
}

#[repr(C)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl NativeStruct for Extent {
    fn type_name() -> &'static str {
        "Extent"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("Extent")
            .prim("width", NativeType::I32)
            .prim("height", NativeType::I32)
            .prim("depth", NativeType::I32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("Extent", mem::size_of::<Extent>())
            .with_field("width", mem::offset_of!(Extent, width))
            .with_field("height", mem::offset_of!(Extent, height))
            .with_field("depth", mem::offset_of!(Extent, depth))
    }
}

#[repr(C)]
pub struct BufferDesc {
    pub size: usize,
    pub usage: u32,
    pub stream: bool,
    pub data: Range,
    pub label: *const c_char,
}

impl NativeStruct for BufferDesc {
    fn type_name() -> &'static str {
        "BufferDesc"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("BufferDesc")
            .prim("size", NativeType::USize)
            .prim("usage", NativeType::U32)
            .prim("stream", NativeType::Bool)
            .nested("data", Range::decl())
            .prim("label", NativeType::Ptr)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("BufferDesc", mem::size_of::<BufferDesc>())
            .with_field("size", mem::offset_of!(BufferDesc, size))
            .with_field("usage", mem::offset_of!(BufferDesc, usage))
            .with_field("stream", mem::offset_of!(BufferDesc, stream))
            .with_field("data", mem::offset_of!(BufferDesc, data))
            .with_field("label", mem::offset_of!(BufferDesc, label))
    }
}

#[repr(C)]
pub struct ImageDesc {
    pub render_target: bool,
    pub width: i32,
    pub height: i32,
    pub layer_count: i32,
    pub mip_count: i32,
    pub sample_count: i32,
    pub usage: u32,
}

impl NativeStruct for ImageDesc {
    fn type_name() -> &'static str {
        "ImageDesc"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("ImageDesc")
            .prim("render_target", NativeType::Bool)
            .prim("width", NativeType::I32)
            .prim("height", NativeType::I32)
            .prim("layer_count", NativeType::I32)
            .prim("mip_count", NativeType::I32)
            .prim("sample_count", NativeType::I32)
            .prim("usage", NativeType::U32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("ImageDesc", mem::size_of::<ImageDesc>())
            .with_field("render_target", mem::offset_of!(ImageDesc, render_target))
            .with_field("width", mem::offset_of!(ImageDesc, width))
            .with_field("height", mem::offset_of!(ImageDesc, height))
            .with_field("layer_count", mem::offset_of!(ImageDesc, layer_count))
            .with_field("mip_count", mem::offset_of!(ImageDesc, mip_count))
            .with_field("sample_count", mem::offset_of!(ImageDesc, sample_count))
            .with_field("usage", mem::offset_of!(ImageDesc, usage))
    }
}

#[repr(C)]
pub struct SamplerDesc {
    pub min_filter: u32,
    pub mag_filter: u32,
    pub wrap_u: u32,
    pub wrap_v: u32,
    pub lod_min: f32,
    pub lod_max: f32,
    pub max_anisotropy: u32,
}

impl NativeStruct for SamplerDesc {
    fn type_name() -> &'static str {
        "SamplerDesc"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("SamplerDesc")
            .prim("min_filter", NativeType::U32)
            .prim("mag_filter", NativeType::U32)
            .prim("wrap_u", NativeType::U32)
            .prim("wrap_v", NativeType::U32)
            .prim("lod_min", NativeType::F32)
            .prim("lod_max", NativeType::F32)
            .prim("max_anisotropy", NativeType::U32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("SamplerDesc", mem::size_of::<SamplerDesc>())
            .with_field("min_filter", mem::offset_of!(SamplerDesc, min_filter))
            .with_field("mag_filter", mem::offset_of!(SamplerDesc, mag_filter))
            .with_field("wrap_u", mem::offset_of!(SamplerDesc, wrap_u))
            .with_field("wrap_v", mem::offset_of!(SamplerDesc, wrap_v))
            .with_field("lod_min", mem::offset_of!(SamplerDesc, lod_min))
            .with_field("lod_max", mem::offset_of!(SamplerDesc, lod_max))
            .with_field("max_anisotropy", mem::offset_of!(SamplerDesc, max_anisotropy))
    }
}

#[repr(C)]
pub struct VertexAttr {
    pub buffer_index: i32,
    pub byte_offset: i32,
    pub format: u32,
}

impl NativeStruct for VertexAttr {
    fn type_name() -> &'static str {
        "VertexAttr"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("VertexAttr")
            .prim("buffer_index", NativeType::I32)
            .prim("byte_offset", NativeType::I32)
            .prim("format", NativeType::U32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("VertexAttr", mem::size_of::<VertexAttr>())
            .with_field("buffer_index", mem::offset_of!(VertexAttr, buffer_index))
            .with_field("byte_offset", mem::offset_of!(VertexAttr, byte_offset))
            .with_field("format", mem::offset_of!(VertexAttr, format))
    }
}

#[repr(C)]
pub struct DepthState {
    pub compare: u32,
    pub write_enabled: bool,
    pub bias: f32,
    pub bias_slope_scale: f32,
    pub bias_clamp: f32,
}

impl NativeStruct for DepthState {
    fn type_name() -> &'static str {
        "DepthState"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("DepthState")
            .prim("compare", NativeType::U32)
            .prim("write_enabled", NativeType::Bool)
            .prim("bias", NativeType::F32)
            .prim("bias_slope_scale", NativeType::F32)
            .prim("bias_clamp", NativeType::F32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("DepthState", mem::size_of::<DepthState>())
            .with_field("compare", mem::offset_of!(DepthState, compare))
            .with_field("write_enabled", mem::offset_of!(DepthState, write_enabled))
            .with_field("bias", mem::offset_of!(DepthState, bias))
            .with_field("bias_slope_scale", mem::offset_of!(DepthState, bias_slope_scale))
            .with_field("bias_clamp", mem::offset_of!(DepthState, bias_clamp))
    }
}

#[repr(C)]
pub struct StencilFace {
    pub fail_op: u32,
    pub depth_fail_op: u32,
    pub pass_op: u32,
    pub compare: u32,
}

impl NativeStruct for StencilFace {
    fn type_name() -> &'static str {
        "StencilFace"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("StencilFace")
            .prim("fail_op", NativeType::U32)
            .prim("depth_fail_op", NativeType::U32)
            .prim("pass_op", NativeType::U32)
            .prim("compare", NativeType::U32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("StencilFace", mem::size_of::<StencilFace>())
            .with_field("fail_op", mem::offset_of!(StencilFace, fail_op))
            .with_field("depth_fail_op", mem::offset_of!(StencilFace, depth_fail_op))
            .with_field("pass_op", mem::offset_of!(StencilFace, pass_op))
            .with_field("compare", mem::offset_of!(StencilFace, compare))
    }
}

#[repr(C)]
pub struct StencilState {
    pub enabled: bool,
    pub front: StencilFace,
    pub back: StencilFace,
    pub read_mask: u8,
    pub write_mask: u8,
    pub reference_value: u8,
}

impl NativeStruct for StencilState {
    fn type_name() -> &'static str {
        "StencilState"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("StencilState")
            .prim("enabled", NativeType::Bool)
            .nested("front", StencilFace::decl())
            .nested("back", StencilFace::decl())
            .prim("read_mask", NativeType::U8)
            .prim("write_mask", NativeType::U8)
            .prim("reference_value", NativeType::U8)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("StencilState", mem::size_of::<StencilState>())
            .with_field("enabled", mem::offset_of!(StencilState, enabled))
            .with_field("front", mem::offset_of!(StencilState, front))
            .with_field("back", mem::offset_of!(StencilState, back))
            .with_field("read_mask", mem::offset_of!(StencilState, read_mask))
            .with_field("write_mask", mem::offset_of!(StencilState, write_mask))
            .with_field("reference_value", mem::offset_of!(StencilState, reference_value))
    }
}

#[repr(C)]
pub struct PipelineDesc {
    pub shader_id: u32,
    pub primitive: u32,
    pub index_format: u32,
    pub cull_mode: u32,
    pub face_winding: u32,
    pub sample_count: i32,
    pub depth: DepthState,
    pub stencil: StencilState,
    pub label: *const c_char,
}

impl NativeStruct for PipelineDesc {
    fn type_name() -> &'static str {
        "PipelineDesc"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("PipelineDesc")
            .prim("shader_id", NativeType::U32)
            .prim("primitive", NativeType::U32)
            .prim("index_format", NativeType::U32)
            .prim("cull_mode", NativeType::U32)
            .prim("face_winding", NativeType::U32)
            .prim("sample_count", NativeType::I32)
            .nested("depth", DepthState::decl())
            .nested("stencil", StencilState::decl())
            .prim("label", NativeType::Ptr)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("PipelineDesc", mem::size_of::<PipelineDesc>())
            .with_field("shader_id", mem::offset_of!(PipelineDesc, shader_id))
            .with_field("primitive", mem::offset_of!(PipelineDesc, primitive))
            .with_field("index_format", mem::offset_of!(PipelineDesc, index_format))
            .with_field("cull_mode", mem::offset_of!(PipelineDesc, cull_mode))
            .with_field("face_winding", mem::offset_of!(PipelineDesc, face_winding))
            .with_field("sample_count", mem::offset_of!(PipelineDesc, sample_count))
            .with_field("depth", mem::offset_of!(PipelineDesc, depth))
            .with_field("stencil", mem::offset_of!(PipelineDesc, stencil))
            .with_field("label", mem::offset_of!(PipelineDesc, label))
    }
}

#[repr(C)]
pub struct DrawCall {
    pub base_element: i32,
    pub element_count: i32,
    pub instance_count: i32,
}

impl NativeStruct for DrawCall {
    fn type_name() -> &'static str {
        "DrawCall"
    }

    fn decl() -> StructDecl {
        StructDecl::sequential("DrawCall")
            .prim("base_element", NativeType::I32)
            .prim("element_count", NativeType::I32)
            .prim("instance_count", NativeType::I32)
    }

    fn actual() -> ActualLayout {
        ActualLayout::new("DrawCall", mem::size_of::<DrawCall>())
            .with_field("base_element", mem::offset_of!(DrawCall, base_element))
            .with_field("element_count", mem::offset_of!(DrawCall, element_count))
            .with_field("instance_count", mem::offset_of!(DrawCall, instance_count))
    }
}

/// Builds a fresh catalog of the whole binding surface. Constructed per
/// verification run; nothing here is cached process-wide.
pub fn binding_catalog() -> StructCatalog {
    let mut catalog = StructCatalog::new();
    catalog.register::<Color>();
    catalog.register::<Range>();
    catalog.register::<Viewport>();
    catalog.register::<Extent>();
    catalog.register::<BufferDesc>();
    catalog.register::<ImageDesc>();
    catalog.register::<SamplerDesc>();
    catalog.register::<VertexAttr>();
    catalog.register::<DepthState>();
    catalog.register::<StencilFace>();
    catalog.register::<StencilState>();
    catalog.register::<PipelineDesc>();
    catalog.register::<DrawCall>();
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::StructVerifier;

    #[test]
    fn test_binding_surface_matches_host_abi() {
        let catalog = binding_catalog();
        let report = StructVerifier::new().run(&catalog);
        assert!(report.is_pass(), "{}", report.format_report());
        assert_eq!(report.summary().matched, catalog.distinct_count());
    }

    #[test]
    fn test_binding_catalog_has_no_duplicates() {
        let catalog = binding_catalog();
        assert_eq!(catalog.registration_count(), catalog.distinct_count());
        assert_eq!(catalog.distinct_count(), 13);
    }

    #[test]
    fn test_nested_descriptor_offsets() {
        let catalog = binding_catalog();
        let entry = catalog
            .iter()
            .find(|e| e.type_name() == "PipelineDesc")
            .unwrap();

        let actual = entry.actual();
        assert_eq!(actual.offset_of("depth"), Some(24));
        assert_eq!(actual.offset_of("stencil"), Some(44));
        assert_eq!(actual.size(), mem::size_of::<PipelineDesc>());
    }
}
