use crate::id::{FoodTypeId, RegionId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest region name accepted, in bytes.
pub const MAX_REGION_NAME_LEN: usize = 49;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while building or mutating regions and inventories.
///
/// These surface before any queue work starts and are never truncated or
/// clamped into a valid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("region name is {len} bytes, longer than the {max} byte limit")]
    NameTooLong { len: usize, max: usize },
    #[error("negative quantity: {quantity}")]
    NegativeQuantity { quantity: i64 },
    #[error("quantity {quantity} does not fit in a stock slot")]
    QuantityOverflow { quantity: i64 },
    #[error("region {region:?} out of range (inventory holds {num_regions} regions)")]
    RegionOutOfRange { region: RegionId, num_regions: usize },
    #[error("food type {food_type:?} out of range")]
    FoodTypeOutOfRange { food_type: FoodTypeId },
}

// ---------------------------------------------------------------------------
// RegionName
// ---------------------------------------------------------------------------

/// A region's display name, at most [`MAX_REGION_NAME_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct RegionName(String);

impl RegionName {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Self::try_from(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RegionName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.len() > MAX_REGION_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                len: value.len(),
                max: MAX_REGION_NAME_LEN,
            });
        }
        Ok(Self(value))
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A region competing for food. Higher hunger levels are served first;
/// negative levels are allowed and simply sort below positive ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    id: RegionId,
    name: RegionName,
    hunger_level: i32,
}

impl Region {
    pub fn new(id: RegionId, name: RegionName, hunger_level: i32) -> Self {
        Self {
            id,
            name,
            hunger_level,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn name(&self) -> &RegionName {
        &self.name
    }

    pub fn hunger_level(&self) -> i32 {
        self.hunger_level
    }
}
