// Tue Jan 20 2026 - Alex

use crate::compare::ActualLayout;
use crate::extract::StructDecl;
use std::any::TypeId;

/// The adapter seam between a compiled binding type and the verification
/// engine: a struct on the interop surface supplies its abstract
/// declaration and the layout the host type system reports for it.
/// Value types only; enumerations and opaque handles do not implement it.
pub trait NativeStruct: 'static {
    fn type_name() -> &'static str;
    fn decl() -> StructDecl;
    fn actual() -> ActualLayout;
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    type_id: TypeId,
    type_name: &'static str,
    decl: StructDecl,
    actual: ActualLayout,
}

impl CatalogEntry {
    pub fn of<T: NativeStruct>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: T::type_name(),
            decl: T::decl(),
            actual: T::actual(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn decl(&self) -> &StructDecl {
        &self.decl
    }

    pub fn actual(&self) -> &ActualLayout {
        &self.actual
    }
}
