use crate::metabolism::MetabolicProfile;
use crate::models::{FoodItem, MacroTargets, MealReport};
use crate::planner::per_meal_target;

/// Display metrics, daily targets and the assembled plan.
///
/// Each plan row shows the slot's achieved totals next to the target
/// slice it was assembled against.
pub fn display_plan(metrics: &MetabolicProfile, daily: &MacroTargets, reports: &[MealReport]) {
    println!();
    println!("=== Metabolic Profile ===");
    println!("BMI:  {:.1}", metrics.bmi);
    println!("BMR:  {:.0} cal", metrics.bmr);
    println!("TDEE: {:.0} cal", metrics.tdee);
    println!();
    println!(
        "Daily targets: {:.0} g protein, {:.0} g fat, {:.0} cal",
        daily.protein_g, daily.fat_g, daily.calories
    );
    println!();
    println!("=== Meal Plan (achieved/target) ===");
    println!();

    // Find max label length for alignment
    let max_label_len = reports
        .iter()
        .map(|r| r.meal.label().len())
        .max()
        .unwrap_or(9);

    for report in reports {
        let target = per_meal_target(daily, report.meal);
        println!("{}", format_meal_row(report, &target, max_label_len));
        println!("{:<width$}   {}", "", report.foods, width = max_label_len);
    }

    println!();
}

/// One aligned plan row: achieved totals beside the slot's share of the
/// daily target.
fn format_meal_row(report: &MealReport, target: &MacroTargets, width: usize) -> String {
    format!(
        "{:<width$} - P {:>5.1}/{:>5.1} g | F {:>5.1}/{:>5.1} g | {:>5.0}/{:>5.0} cal",
        report.meal.label(),
        report.total_protein,
        target.protein_g,
        report.total_fat,
        target.fat_g,
        report.total_calories,
        target.calories,
        width = width
    )
}

/// Display a simple list of foods with their macros.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  {:<width$} - P {:>5.1} g | F {:>5.1} g | {:>5.0} cal | {}",
            food.name,
            food.protein_g,
            food.fat_g,
            food.calories,
            food.meal_slot,
            width = max_name_len
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;

    #[test]
    fn test_meal_row_shows_achieved_beside_target() {
        let report = MealReport {
            meal: MealSlot::Breakfast,
            total_protein: 25.5,
            total_fat: 8.0,
            total_calories: 610.0,
            foods: "Oatmeal, Eggs".to_string(),
        };
        let target = MacroTargets::new(39.2, 11.2, 700.0);

        let row = format_meal_row(&report, &target, 9);
        assert!(row.starts_with("Breakfast - "), "row was: {}", row);
        assert!(row.contains("25.5/ 39.2"), "row was: {}", row);
        assert!(row.contains("8.0/ 11.2"), "row was: {}", row);
        assert!(row.contains("610/  700"), "row was: {}", row);
    }

    #[test]
    fn test_meal_row_pads_short_labels() {
        let report = MealReport {
            meal: MealSlot::Lunch,
            total_protein: 0.0,
            total_fat: 0.0,
            total_calories: 0.0,
            foods: "No optimal combination found.".to_string(),
        };
        let target = MacroTargets::new(35.0, 14.0, 700.0);

        let row = format_meal_row(&report, &target, 9);
        assert!(row.starts_with("Lunch     - "), "row was: {}", row);
        assert!(row.contains("0.0/ 35.0"), "row was: {}", row);
    }
}
