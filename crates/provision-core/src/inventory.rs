use crate::id::{FoodTypeId, RegionId};
use crate::network::MAX_REGIONS;
use crate::region::ValidationError;
use serde::{Deserialize, Serialize};

/// Number of food-type slots tracked per region.
pub const MAX_FOOD_TYPES: usize = 10;

impl FoodTypeId {
    /// Checked constructor for a food-type slot index.
    pub fn new(index: u32) -> Result<Self, ValidationError> {
        let id = FoodTypeId(index);
        if id.index() >= MAX_FOOD_TYPES {
            return Err(ValidationError::FoodTypeOutOfRange { food_type: id });
        }
        Ok(id)
    }
}

/// One region's stock: a quantity per food-type slot.
pub type StockRow = [u32; MAX_FOOD_TYPES];

/// Per-region food stock, indexed by region id then food-type slot.
///
/// Quantities are never negative. The allocation engine is the only code
/// path that zeroes slots in bulk; callers go through [`set_quantity`].
///
/// [`set_quantity`]: Inventory::set_quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    rows: Vec<StockRow>,
}

impl Inventory {
    /// An all-zero inventory covering `num_regions` regions.
    pub fn new(num_regions: usize) -> Self {
        Self {
            rows: vec![[0; MAX_FOOD_TYPES]; num_regions],
        }
    }

    /// An all-zero inventory sized for the largest possible network.
    pub fn with_region_capacity() -> Self {
        Self::new(MAX_REGIONS)
    }

    pub fn num_regions(&self) -> usize {
        self.rows.len()
    }

    /// Current stock of one food type in one region.
    pub fn quantity(&self, region: RegionId, food_type: FoodTypeId) -> Result<u32, ValidationError> {
        let row = self.slots(region)?;
        let slot = Self::slot_index(food_type)?;
        Ok(row[slot])
    }

    /// Overwrite one slot. Negative values and values that do not fit a
    /// slot are rejected and leave the inventory untouched.
    pub fn set_quantity(
        &mut self,
        region: RegionId,
        food_type: FoodTypeId,
        quantity: i64,
    ) -> Result<(), ValidationError> {
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity { quantity });
        }
        let value =
            u32::try_from(quantity).map_err(|_| ValidationError::QuantityOverflow { quantity })?;
        let slot = Self::slot_index(food_type)?;
        let row = self.row_mut(region)?;
        row[slot] = value;
        Ok(())
    }

    /// All food-type slots of one region, in ascending food-type order.
    pub fn slots(&self, region: RegionId) -> Result<&StockRow, ValidationError> {
        self.rows
            .get(region.index())
            .ok_or(ValidationError::RegionOutOfRange {
                region,
                num_regions: self.rows.len(),
            })
    }

    /// Sum of all slots in one region.
    pub fn total(&self, region: RegionId) -> Result<u64, ValidationError> {
        Ok(self.slots(region)?.iter().map(|&q| u64::from(q)).sum())
    }

    /// True when every slot of the region is zero.
    pub fn is_depleted(&self, region: RegionId) -> Result<bool, ValidationError> {
        Ok(self.slots(region)?.iter().all(|&q| q == 0))
    }

    /// Consume a region's whole row, returning what it held.
    pub(crate) fn take_row(&mut self, region: RegionId) -> Result<StockRow, ValidationError> {
        Ok(std::mem::take(self.row_mut(region)?))
    }

    fn row_mut(&mut self, region: RegionId) -> Result<&mut StockRow, ValidationError> {
        let num_regions = self.rows.len();
        self.rows
            .get_mut(region.index())
            .ok_or(ValidationError::RegionOutOfRange {
                region,
                num_regions,
            })
    }

    fn slot_index(food_type: FoodTypeId) -> Result<usize, ValidationError> {
        if food_type.index() < MAX_FOOD_TYPES {
            Ok(food_type.index())
        } else {
            Err(ValidationError::FoodTypeOutOfRange { food_type })
        }
    }
}
