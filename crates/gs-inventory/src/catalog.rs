//! The item catalog.
//!
//! Aisles are assigned once, when the catalog is built, by dealing items out
//! round-robin: item `i` lives in aisle `i % aisle_count + 1`.  Aisle numbers
//! are therefore 1-based and every aisle holds roughly the same number of
//! items.

use rustc_hash::FxHashMap;

use gs_core::RandomSource;

use crate::error::{CatalogError, CatalogResult};

/// The reference store's products, in shelving order.
pub const GROCERY_ITEMS: [&str; 25] = [
    "Milk", "Eggs", "Bread", "Apples", "Bananas", "Chicken", "Cheese", "Cereal",
    "Tomatoes", "Potatoes", "Onions", "Carrots", "Yogurt", "Juice", "Coffee",
    "Rice", "Pasta", "Butter", "Spinach", "Cookies", "Soup", "Fish", "Beef",
    "Lettuce", "Soda",
];

/// Number of aisles in the reference store.
pub const GROCERY_AISLES: usize = 5;

/// One line of a shopping list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShoppingItem {
    pub name:  String,
    /// 1-based aisle number.
    pub aisle: u8,
}

/// Immutable item → aisle table.
#[derive(Clone, Debug)]
pub struct Catalog {
    items:   Vec<ShoppingItem>,
    by_name: FxHashMap<String, usize>,
    aisles:  u8,
}

impl Catalog {
    /// Build a catalog from item names, dealing them over `aisle_count`
    /// aisles.
    pub fn new<I, S>(names: I, aisle_count: usize) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if aisle_count == 0 {
            return Err(CatalogError::NoAisles);
        }
        let aisles =
            u8::try_from(aisle_count).map_err(|_| CatalogError::TooManyAisles(aisle_count))?;

        let mut items = Vec::new();
        let mut by_name = FxHashMap::default();
        for (i, name) in names.into_iter().enumerate() {
            let name: String = name.into();
            if by_name.insert(name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateItem(name));
            }
            // i % aisles < aisles <= u8::MAX, so the cast cannot truncate.
            let aisle = (i % aisle_count) as u8 + 1;
            items.push(ShoppingItem { name, aisle });
        }
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { items, by_name, aisles })
    }

    /// The reference 25-item, 5-aisle catalog.
    pub fn grocery() -> Self {
        let items: Vec<ShoppingItem> = GROCERY_ITEMS
            .iter()
            .enumerate()
            .map(|(i, name)| ShoppingItem {
                name:  (*name).to_string(),
                aisle: (i % GROCERY_AISLES) as u8 + 1,
            })
            .collect();
        let by_name = items
            .iter()
            .enumerate()
            .map(|(i, it)| (it.name.clone(), i))
            .collect();
        Self { items, by_name, aisles: GROCERY_AISLES as u8 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn aisle_count(&self) -> u8 {
        self.aisles
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Aisle number of `name`, or `None` if the store does not stock it.
    pub fn aisle_of(&self, name: &str) -> Option<u8> {
        self.by_name.get(name).map(|&i| self.items[i].aisle)
    }

    /// Draw `count` distinct items uniformly at random, without replacement.
    ///
    /// `count` is clamped to the catalog size.  The returned order is the
    /// draw order and is the order in which a shopper will find them.
    pub fn random_shopping_list<R: RandomSource>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Vec<ShoppingItem> {
        let count = count.min(self.items.len());
        // Partial Fisher-Yates: only the first `count` positions are drawn.
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        for i in 0..count {
            let j = i + rng.below(order.len() - i);
            order.swap(i, j);
        }
        order[..count].iter().map(|&i| self.items[i].clone()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::grocery()
    }
}
