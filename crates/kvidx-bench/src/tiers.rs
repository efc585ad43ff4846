use kvidx::model::{AttributeModel, EntityModel};

///
/// Tier models
///
/// One entity model per benchmarked index cardinality, sharing a common
/// attribute pool. Attribute values are scalars; the benchmark measures
/// round-trip behavior, not value shapes.
///

pub const MAX_TIER: usize = 8;

pub static TIER_NAMES: [&str; MAX_TIER] = [
    "OneIndex",
    "TwoIndices",
    "ThreeIndices",
    "FourIndices",
    "FiveIndices",
    "SixIndices",
    "SevenIndices",
    "EightIndices",
];

static ATTRIBUTES: [AttributeModel; MAX_TIER] = [
    AttributeModel::scalar("one"),
    AttributeModel::scalar("two"),
    AttributeModel::scalar("three"),
    AttributeModel::scalar("four"),
    AttributeModel::scalar("five"),
    AttributeModel::scalar("six"),
    AttributeModel::scalar("seven"),
    AttributeModel::scalar("eight"),
];

/// Resolve the requested tier sizes into registered entity models.
pub fn models_for(tiers: &[usize]) -> Result<Vec<&'static EntityModel>, String> {
    tiers.iter().map(|&indices| model_for(indices)).collect()
}

fn model_for(indices: usize) -> Result<&'static EntityModel, String> {
    if !(1..=MAX_TIER).contains(&indices) {
        return Err(format!("invalid tier size {indices}: expected 1..={MAX_TIER}"));
    }

    // A handful of models per process run; leaking keeps them 'static like
    // schema-defined models would be.
    let model = EntityModel::new(TIER_NAMES[indices - 1], &ATTRIBUTES[..indices]);
    Ok(Box::leak(Box::new(model)))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_sizes_resolve_to_models() {
        let models = models_for(&[1, 4, 8]).unwrap();
        assert_eq!(models[0].entity_name, "OneIndex");
        assert_eq!(models[0].indexed.len(), 1);
        assert_eq!(models[1].entity_name, "FourIndices");
        assert_eq!(models[1].indexed.len(), 4);
        assert_eq!(models[2].indexed.len(), 8);
    }

    #[test]
    fn out_of_range_tier_is_rejected() {
        assert!(models_for(&[0]).is_err());
        assert!(models_for(&[9]).is_err());
    }
}
