/// A directed relation between two fully qualified type names: `(source, target)`
pub type Relation = (String, String);

/// Edge kind - classification of type relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    // ============ Type Hierarchy (count toward degree) ============
    Extends,
    Implements, // Class → Interface conformance, after the interface split

    // ============ Derived ============
    /// `implements` edge whose endpoints are both interfaces
    InterfaceExtends,

    // ============ Usage (rendered commented out) ============
    Reference,
}

impl EdgeKind {
    /// Kinds that are stored as their own relation table.
    pub const STORED: [EdgeKind; 3] = [EdgeKind::Extends, EdgeKind::Implements, EdgeKind::Reference];

    /// Relation table backing this kind, if it is loaded directly from the store.
    pub fn table(&self) -> Option<&'static str> {
        match self {
            EdgeKind::Extends => Some("extends"),
            EdgeKind::Implements => Some("implements"),
            EdgeKind::Reference => Some("reference"),
            EdgeKind::InterfaceExtends => None,
        }
    }

    /// Whether edges of this kind contribute to a type's inheritance degree.
    pub fn is_inheritance(&self) -> bool {
        matches!(self, EdgeKind::Extends | EdgeKind::Implements)
    }
}
