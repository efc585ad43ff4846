use std::fmt::{self, Display};

///
/// AttributeKind
///
/// Declared shape of an indexed attribute, fixed at schema registration time.
/// The maintainer never inspects runtime values to decide the shape.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeKind {
    Scalar,
    MultiValued,
}

///
/// AttributeModel
/// Runtime-only descriptor for one indexed attribute.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AttributeModel {
    pub name: &'static str,
    pub kind: AttributeKind,
}

impl AttributeModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self { name, kind }
    }

    #[must_use]
    pub const fn scalar(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Scalar)
    }

    #[must_use]
    pub const fn multi_valued(name: &'static str) -> Self {
        Self::new(name, AttributeKind::MultiValued)
    }
}

impl Display for AttributeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AttributeKind::Scalar => f.write_str(self.name),
            AttributeKind::MultiValued => write!(f, "{}[]", self.name),
        }
    }
}
