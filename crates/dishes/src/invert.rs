//! Dish-to-ingredient inversion.
//!
//! [`invert`] takes a table whose rows read `[dish, ingredient, ...]` and
//! produces a table whose rows read `[ingredient, dish, ...]`. Ingredient
//! rows are ordered by ingredient name, and the dishes inside each row are
//! ordered and deduplicated. Ordering is plain codepoint order (`str::cmp`),
//! so uppercase sorts before lowercase.
//!
//! Absent or empty names are not errors. They are replaced by the sentinel
//! strings below and grouped like any other name, which means every absent
//! dish in a table is the same dish, [`ERR_NULL_DISH`]. A caller that
//! literally names an ingredient `ERROR_NULL_INGREDIENT` is indistinguishable
//! from one that left it out.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::debug;

/// Stands in for a dish name that is absent.
pub const ERR_NULL_DISH: &str = "ERROR_NULL_DISH";
/// Stands in for a dish name that is the empty string.
pub const ERR_EMPTY_DISH: &str = "ERROR_EMPTY_DISH";
/// Stands in for an ingredient name that is absent.
pub const ERR_NULL_INGREDIENT: &str = "ERROR_NULL_INGREDIENT";
/// Stands in for an ingredient name that is the empty string.
pub const ERR_EMPTY_INGREDIENT: &str = "ERROR_EMPTY_INGREDIENT";

/// An owned input row: the dish followed by its ingredients.
pub type DishRow = Vec<Option<String>>;

/// An output row: the ingredient followed by the dishes that use it.
pub type IngredientRow = Vec<String>;

/// The inverted table, one [`IngredientRow`] per distinct ingredient.
pub type IngredientTable = Vec<IngredientRow>;

/// Reasons a dish table is rejected as a whole.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvertError {
    /// The table itself is absent.
    #[error("there are no dishes")]
    MissingInput,

    /// A row holds a dish but no ingredient.
    #[error("each dish needs at least one ingredient (row {row} has {len} element(s))")]
    MalformedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of elements found in that row.
        len: usize,
    },
}

/// The container used to collect ingredient groups.
///
/// Both strategies produce identical tables. `Ordered` keeps groups sorted
/// as they are built; `Hashed` collects into hash containers and sorts once
/// at the end.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// B-tree map of B-tree sets.
    #[default]
    Ordered,
    /// Hash map of hash sets, sorted on output.
    Hashed,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordered => f.write_str("ordered"),
            Self::Hashed => f.write_str("hashed"),
        }
    }
}

/// Invert a dish table using the default [`Strategy`].
///
/// `None` is an absent table and fails with [`InvertError::MissingInput`].
/// Rows are checked in order and the first row without an ingredient fails
/// the whole call with [`InvertError::MalformedRow`]; later rows are not
/// looked at.
pub fn invert<R, S>(dishes: Option<&[R]>) -> Result<IngredientTable, InvertError>
where
    R: AsRef<[Option<S>]>,
    S: AsRef<str>,
{
    invert_with(dishes, Strategy::default())
}

/// Invert a dish table, collecting groups with the given [`Strategy`].
pub fn invert_with<R, S>(
    dishes: Option<&[R]>,
    strategy: Strategy,
) -> Result<IngredientTable, InvertError>
where
    R: AsRef<[Option<S>]>,
    S: AsRef<str>,
{
    let Some(dishes) = dishes else {
        return Err(InvertError::MissingInput);
    };

    let mut groups = IngredientGroups::new(strategy);
    for (index, row) in dishes.iter().enumerate() {
        let row = row.as_ref();
        let Some((dish, ingredients)) = row.split_first().filter(|(_, rest)| !rest.is_empty())
        else {
            debug!(row = index, len = row.len(), "rejecting dish without ingredients");
            return Err(InvertError::MalformedRow {
                row: index,
                len: row.len(),
            });
        };

        let dish = normalize_dish(dish.as_ref().map(AsRef::as_ref));
        for ingredient in ingredients {
            let ingredient = normalize_ingredient(ingredient.as_ref().map(AsRef::as_ref));
            groups.insert(ingredient, dish);
        }
    }

    debug!(
        rows = dishes.len(),
        ingredients = groups.len(),
        %strategy,
        "inverted dish table"
    );
    Ok(groups.into_table())
}

/// Replace an absent or empty dish name with its sentinel.
pub fn normalize_dish(dish: Option<&str>) -> &str {
    match dish {
        None => ERR_NULL_DISH,
        Some("") => ERR_EMPTY_DISH,
        Some(dish) => dish,
    }
}

/// Replace an absent or empty ingredient name with its sentinel.
pub fn normalize_ingredient(ingredient: Option<&str>) -> &str {
    match ingredient {
        None => ERR_NULL_INGREDIENT,
        Some("") => ERR_EMPTY_INGREDIENT,
        Some(ingredient) => ingredient,
    }
}

/// Ingredient name to the set of dishes using it, borrowed from the input.
enum IngredientGroups<'a> {
    Ordered(BTreeMap<&'a str, BTreeSet<&'a str>>),
    Hashed(FxHashMap<&'a str, FxHashSet<&'a str>>),
}

impl<'a> IngredientGroups<'a> {
    fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Ordered => Self::Ordered(BTreeMap::new()),
            Strategy::Hashed => Self::Hashed(FxHashMap::default()),
        }
    }

    fn insert(&mut self, ingredient: &'a str, dish: &'a str) {
        match self {
            Self::Ordered(groups) => {
                groups.entry(ingredient).or_default().insert(dish);
            }
            Self::Hashed(groups) => {
                groups.entry(ingredient).or_default().insert(dish);
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Ordered(groups) => groups.len(),
            Self::Hashed(groups) => groups.len(),
        }
    }

    fn into_table(self) -> IngredientTable {
        match self {
            Self::Ordered(groups) => groups
                .into_iter()
                .map(|(ingredient, dishes)| ingredient_row(ingredient, dishes))
                .collect(),
            Self::Hashed(groups) => {
                let mut groups: Vec<_> = groups.into_iter().collect();
                groups.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
                groups
                    .into_iter()
                    .map(|(ingredient, dishes)| {
                        let mut dishes: Vec<_> = dishes.into_iter().collect();
                        dishes.sort_unstable();
                        ingredient_row(ingredient, dishes)
                    })
                    .collect()
            }
        }
    }
}

fn ingredient_row<'a>(
    ingredient: &'a str,
    dishes: impl IntoIterator<Item = &'a str>,
) -> IngredientRow {
    std::iter::once(ingredient)
        .chain(dishes)
        .map(str::to_owned)
        .collect()
}
