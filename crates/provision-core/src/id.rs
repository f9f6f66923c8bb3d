use serde::{Deserialize, Serialize};

/// Identifies a region by its dense index in a [`FoodNetwork`].
///
/// [`FoodNetwork`]: crate::network::FoodNetwork
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    /// The region's position in network and inventory storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifies a food type by its slot index in an inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoodTypeId(pub u32);

impl FoodTypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_id_equality() {
        let a = RegionId(0);
        let b = RegionId(0);
        let c = RegionId(1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn ids_order_by_index() {
        assert!(RegionId(2) < RegionId(7));
        assert!(FoodTypeId(0) < FoodTypeId(9));
        assert_eq!(FoodTypeId(4).index(), 4);
    }

    #[test]
    fn ids_are_hashable() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(FoodTypeId(0), "grain");
        map.insert(FoodTypeId(1), "rice");
        assert_eq!(map[&FoodTypeId(1)], "rice");
    }
}
