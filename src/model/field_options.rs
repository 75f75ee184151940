use serde::{Deserialize, Serialize};

/// Type promotions applied when turning a column into a field.
///
/// - `nullable`: nullable columns become pointers.
/// - `coverable`: columns with a pinned default become pointers, so a zero
///   value can still be written over the default.
/// - `signable`: `unsigned` integer columns get unsigned types.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    pub nullable: bool,
    pub coverable: bool,
    pub signable: bool,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(nullable: bool, coverable: bool, signable: bool) -> Self {
        Self { nullable, coverable, signable }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn coverable(mut self, coverable: bool) -> Self {
        self.coverable = coverable;
        self
    }

    pub fn signable(mut self, signable: bool) -> Self {
        self.signable = signable;
        self
    }
}
