use std::collections::BTreeMap;

use assert_float_eq::assert_float_absolute_eq;

use couples_planner_rs::models::{MacroTotals, MealLabel, Person, Profile, Unit};
use couples_planner_rs::planner::{
    aggregate_groceries, day_macros, generate_week, grocery_csv_string, recipe_macros,
    PlanInputs, PlanSession, DEFAULT_SEED, SCALE_MAX, SCALE_MIN, SHARE_MAX, SHARE_MIN,
};

fn default_session() -> PlanSession {
    PlanSession::new(
        Profile::default_you(),
        Profile::default_partner(),
        DEFAULT_SEED,
        None,
    )
}

fn inputs(seed: u32, share: f64) -> PlanInputs {
    PlanInputs {
        seed,
        you_share: share,
        you_target_kcal: 1800.0,
        partner_target_kcal: 2400.0,
    }
}

#[test]
fn test_same_inputs_same_week() {
    for seed in [0, 1, 42, DEFAULT_SEED, u32::MAX] {
        assert_eq!(generate_week(&inputs(seed, 0.45)), generate_week(&inputs(seed, 0.45)));
    }
}

#[test]
fn test_week_shape() {
    let week = generate_week(&inputs(7, 0.5));
    assert_eq!(week.days.len(), 7);
    for day in &week.days {
        let labels: Vec<MealLabel> = day.meals.iter().map(|m| m.label).collect();
        assert_eq!(labels, MealLabel::ORDER);
        assert!(day.scale >= SCALE_MIN && day.scale <= SCALE_MAX);
    }
}

#[test]
fn test_default_household_day_one() {
    let session = default_session();
    let day = &session.week().days[0];
    let names: Vec<&str> = day.meals.iter().map(|m| m.recipe.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Oats + milk + peanut butter / Bread + butter + young cheese",
            "Cottage cheese + nuts",
            "Tuna salad bowl",
            "Cottage cheese + nuts",
            "Chicken drumsticks + sweet potato + veg",
        ]
    );
    assert_float_absolute_eq!(day.scale, 1.25, 1e-12);
}

#[test]
fn test_default_household_targets_and_share() {
    let session = default_session();
    assert_float_absolute_eq!(session.targets(Person::You).goal_kcal, 1737.86, 1e-6);
    assert_float_absolute_eq!(session.targets(Person::Partner).goal_kcal, 2406.25, 1e-6);
    assert_float_absolute_eq!(session.share(), 0.41935662904700893, 1e-12);
}

#[test]
fn test_day_macros_are_sum_of_meals() {
    let session = default_session();
    let share = session.share();
    for day in &session.week().days {
        let split = day_macros(&day.meals, share);
        let summed: MacroTotals = day
            .meals
            .iter()
            .map(|m| recipe_macros(&m.recipe, share).total)
            .sum();
        assert!(split.total.approx_eq(&summed, 1e-6));
        assert!((split.you + split.partner).approx_eq(&split.total, 1e-6));
    }
}

#[test]
fn test_grocery_lines_are_rounded_sums_per_item_and_unit() {
    let session = default_session();
    let lines = aggregate_groceries(session.week());

    let mut raw: BTreeMap<(String, Unit), f64> = BTreeMap::new();
    for ing in session.week().ingredients() {
        *raw.entry((ing.item.to_lowercase(), ing.unit)).or_insert(0.0) += ing.quantity;
    }

    assert_eq!(lines.len(), raw.len());
    for line in &lines {
        let summed = raw[&(line.item.clone(), line.unit)];
        assert_eq!(line.quantity, summed.round(), "{} {}", line.item, line.unit);
    }

    // nuts are owned by each person separately; both land on one line
    let nuts: Vec<_> = session
        .week()
        .ingredients()
        .filter(|i| i.item == "nuts")
        .collect();
    assert!(nuts.iter().any(|i| i.owner.person() == Some(Person::You)));
    assert!(nuts.iter().any(|i| i.owner.person() == Some(Person::Partner)));
    let nuts_line = lines.iter().find(|l| l.item == "nuts").unwrap();
    let nuts_total: f64 = nuts.iter().map(|i| i.quantity).sum();
    assert_eq!(nuts_line.quantity, nuts_total.round());

    let mut sorted = lines.clone();
    sorted.sort_by(|a, b| a.item.cmp(&b.item));
    assert_eq!(lines, sorted);
}

#[test]
fn test_chinese_cabbage_adds_no_macros() {
    let session = PlanSession::new(Profile::default_you(), Profile::default_partner(), 0, None);
    let csv = grocery_csv_string(&session.groceries()).unwrap();
    let rows: Vec<&str> = csv.lines().collect();
    assert!(rows.contains(&"chinese cabbage,545,g"));
    assert!(rows.contains(&"potato (raw),1529,g"));
    assert!(rows.contains(&"salmon,1165,g"));
}

#[test]
fn test_default_household_grocery_csv() {
    let session = default_session();
    let csv = grocery_csv_string(&session.groceries()).unwrap();
    let rows: Vec<&str> = csv.lines().collect();

    assert_eq!(rows.len(), 33);
    assert_eq!(rows[0], "Item,Quantity,Unit");
    assert_eq!(rows[1], "7-granenontbijt,120,g");
    for expected in [
        "chicken breast,1620,g",
        "cottage cheese,1750,g",
        "milk,1540,ml",
        "tuna (canned),5,can",
        "young cheese,280,g",
    ] {
        assert!(rows.contains(&expected), "missing row {expected}");
    }
    assert!(csv.ends_with('\n'));
}

#[test]
fn test_share_clamped_for_any_override() {
    for raw in [-1.0, 0.0, 0.2, 0.5, 0.9, 5.0, f64::NAN] {
        let session = PlanSession::new(
            Profile::default_you(),
            Profile::default_partner(),
            DEFAULT_SEED,
            Some(raw),
        );
        assert!(session.share() >= SHARE_MIN && session.share() <= SHARE_MAX);
    }
}

#[test]
fn test_owned_ingredients_never_split() {
    let session = default_session();
    let breakfast = session.week().days[0].meal(MealLabel::Breakfast);
    for ing in &breakfast.recipe.ingredients {
        if let Some(owner) = ing.owner.person() {
            let other = match owner {
                Person::You => Person::Partner,
                Person::Partner => Person::You,
            };
            assert_eq!(ing.quantity_for(owner, session.share()), ing.quantity);
            assert_eq!(ing.quantity_for(other, session.share()), 0.0);
        }
    }
}

#[test]
fn test_weekly_plan_matches_session() {
    let session = default_session();
    let plan = session.weekly_plan();
    assert_eq!(&plan.week, session.week());
    assert_eq!(plan.groceries, session.groceries());
    let codes: Vec<&str> = plan.workouts.iter().map(|w| w.code()).collect();
    assert_eq!(codes, ["A", "HIIT", "B", "REST", "C", "HIIT", "REST"]);
}
