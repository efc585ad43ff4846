use crate::model::attribute::AttributeModel;

///
/// EntityModel
/// Minimal runtime model for one entity type: its stable external name and
/// the ordered list of indexed attributes (order is significant).
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EntityModel {
    /// Stable external name used in index keys.
    pub entity_name: &'static str,
    /// Indexed attribute definitions, in registration order.
    pub indexed: &'static [AttributeModel],
}

impl EntityModel {
    #[must_use]
    pub const fn new(entity_name: &'static str, indexed: &'static [AttributeModel]) -> Self {
        Self {
            entity_name,
            indexed,
        }
    }
}
