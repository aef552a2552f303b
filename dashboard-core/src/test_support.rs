//! Test-only catalog fixtures shared by unit and behaviour tests.

use crate::{AttributeValues, Capability, CapabilityFlags, LlmRecord, MemoryCatalog, NumericAttribute};

/// Build a record whose attributes are all `5.0` except `Price`, supporting
/// text generation only.
#[must_use]
pub fn record(id: u64, name: &str, price: f64) -> LlmRecord {
    LlmRecord::new(
        id,
        name,
        AttributeValues::splat(5.0).with(NumericAttribute::Price, price),
        CapabilityFlags::supporting([Capability::TextGeneration]),
    )
    .with_description(format!("{name} description"))
}

/// Build a record with the given capabilities and attribute values.
#[must_use]
pub fn record_with(
    id: u64,
    name: &str,
    attributes: AttributeValues,
    capabilities: &[Capability],
) -> LlmRecord {
    LlmRecord::new(
        id,
        name,
        attributes,
        CapabilityFlags::supporting(capabilities.iter().copied()),
    )
    .with_company(format!("{name} Labs"))
    .with_description(format!("{name} description"))
}

/// Three-model catalog with overlapping capabilities.
///
/// | id | name     | capabilities                   | price | accuracy |
/// |----|----------|--------------------------------|-------|----------|
/// | 1  | Atlas    | text, code                     | 10    | 9        |
/// | 2  | Borealis | text, image                    | 20    | 7        |
/// | 3  | Cirrus   | image                          | 30    | 5        |
#[must_use]
pub fn sample_catalog() -> MemoryCatalog {
    MemoryCatalog::with_records([
        record_with(
            1,
            "Atlas",
            AttributeValues::splat(5.0)
                .with(NumericAttribute::Price, 10.0)
                .with(NumericAttribute::Accuracy, 9.0),
            &[Capability::TextGeneration, Capability::CodeGeneration],
        ),
        record_with(
            2,
            "Borealis",
            AttributeValues::splat(5.0)
                .with(NumericAttribute::Price, 20.0)
                .with(NumericAttribute::Accuracy, 7.0),
            &[Capability::TextGeneration, Capability::ImageGeneration],
        ),
        record_with(
            3,
            "Cirrus",
            AttributeValues::splat(5.0)
                .with(NumericAttribute::Price, 30.0)
                .with(NumericAttribute::Accuracy, 5.0),
            &[Capability::ImageGeneration],
        ),
    ])
}
