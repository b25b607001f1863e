//! Container shape classification.

use coax_core::TypeDesc;

/// Storage layout of a container type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Fixed-size indexed storage, allocated once at its final length.
    Array,
    /// Growable ordered storage.
    List,
}

/// A container type split into its layout and element type.
///
/// Derived once from a [`TypeDesc`] by [`describe`](Self::describe) and
/// never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerShape {
    /// Fixed or dynamic layout.
    pub kind: ShapeKind,
    /// Element type, including any optional wrapper.
    pub element: TypeDesc,
}

impl ContainerShape {
    /// Classify `ty` as a container.
    ///
    /// Returns `None` for anything that is not an array or list. Container
    /// values are always nullable, so a single optional wrapper around the
    /// container type itself is looked through.
    pub fn describe(ty: &TypeDesc) -> Option<Self> {
        match ty.strip_optional() {
            TypeDesc::Array(element) => Some(Self {
                kind: ShapeKind::Array,
                element: (**element).clone(),
            }),
            TypeDesc::List(element) => Some(Self {
                kind: ShapeKind::List,
                element: (**element).clone(),
            }),
            TypeDesc::Scalar(_) | TypeDesc::Optional(_) => None,
        }
    }

    /// The container type this shape describes.
    pub fn to_type(&self) -> TypeDesc {
        match self.kind {
            ShapeKind::Array => TypeDesc::array(self.element.clone()),
            ShapeKind::List => TypeDesc::list(self.element.clone()),
        }
    }
}
