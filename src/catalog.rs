//! The food catalog: an immutable, order-preserving food collection
//! loaded once at startup and shared read-only by every plan.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{FoodItem, MealSlot};

/// All foods the planner can draw from.
///
/// Row order from the source file is kept as-is; the assembler breaks
/// distance ties by first occurrence, so reordering changes plans.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
}

impl FoodCatalog {
    pub fn from_foods(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    /// Load a catalog from a CSV file with the headers `Food`,
    /// `Protein (g)`, `Fat (g)`, `Calories` and `Meal Time`.
    ///
    /// An empty file (headers only) is a valid, empty catalog.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut foods = Vec::new();
        for record in reader.deserialize() {
            foods.push(record?);
        }
        info!("food catalog loaded: {} foods", foods.len());
        Ok(Self { foods })
    }

    /// Foods belonging to one meal slot, in catalog order.
    pub fn slot_candidates(&self, slot: MealSlot) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|food| food.meal_slot == slot)
            .collect()
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_CSV: &str = "\
Food,Protein (g),Fat (g),Calories,Meal Time
Oatmeal,5,3,150,Breakfast
Eggs,12,10,140,Breakfast
Chicken Breast,31,3.6,165,Lunch
Rice,4.3,0.4,205,Lunch
Salmon,25,14,280,Dinner
Almonds,6,14,164,Snacks
";

    fn write_sample() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_from_csv() {
        let file = write_sample();
        let catalog = FoodCatalog::from_csv_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.foods()[0].name, "Oatmeal");
        assert_eq!(catalog.foods()[2].meal_slot, MealSlot::Lunch);
        assert!((catalog.foods()[3].protein_g - 4.3).abs() < 1e-9);
    }

    #[test]
    fn test_slot_candidates_keep_file_order() {
        let file = write_sample();
        let catalog = FoodCatalog::from_csv_path(file.path()).unwrap();
        let breakfast = catalog.slot_candidates(MealSlot::Breakfast);
        let names: Vec<&str> = breakfast.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Oatmeal", "Eggs"]);
    }

    #[test]
    fn test_headers_only_is_empty_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Food,Protein (g),Fat (g),Calories,Meal Time\n")
            .unwrap();
        let catalog = FoodCatalog::from_csv_path(file.path()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.slot_candidates(MealSlot::Dinner).is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(FoodCatalog::from_csv_path("definitely_not_here.csv").is_err());
    }

    #[test]
    fn test_non_numeric_macro_is_a_csv_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"Food,Protein (g),Fat (g),Calories,Meal Time\nOatmeal,five,3,150,Breakfast\n",
        )
        .unwrap();
        let err = FoodCatalog::from_csv_path(file.path()).unwrap_err();
        assert!(matches!(err, PlannerError::Csv(_)));
    }

    #[test]
    fn test_unknown_meal_time_is_a_csv_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Food,Protein (g),Fat (g),Calories,Meal Time\nOatmeal,5,3,150,Brunch\n")
            .unwrap();
        let err = FoodCatalog::from_csv_path(file.path()).unwrap_err();
        assert!(matches!(err, PlannerError::Csv(_)));
    }

    #[test]
    fn test_missing_column_is_a_csv_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Food,Protein (g),Fat (g),Calories\nOatmeal,5,3,150\n")
            .unwrap();
        let err = FoodCatalog::from_csv_path(file.path()).unwrap_err();
        assert!(matches!(err, PlannerError::Csv(_)));
    }
}
