// verdict-core/src/application/checks.rs
//
// Built-in checks run for every visible, enabled component.

use crate::domain::catalog::Component;
use crate::domain::selection::Selection;
use crate::domain::verdict::{IssueCode, ValidationIssue};

pub(crate) fn check_component(
    component: &Component,
    selection: Option<&Selection>,
    errors: &mut Vec<ValidationIssue>,
) {
    if !component.is_active() {
        return;
    }

    let count = selection.map_or(0, Selection::count);

    let required_missing = check_required(component, count, errors);
    check_cardinality(component, count, required_missing, errors);

    if let Some(selection) = selection {
        check_stock(component, selection, errors);
    }
}

fn check_required(component: &Component, count: usize, errors: &mut Vec<ValidationIssue>) -> bool {
    if component.is_required && count == 0 {
        errors.push(ValidationIssue::for_component(
            IssueCode::RequiredComponent,
            &component.id,
            format!("{} is required", component.name),
        ));
        return true;
    }
    false
}

// An absent required component is already reported as REQUIRED_COMPONENT.
fn check_cardinality(
    component: &Component,
    count: usize,
    required_missing: bool,
    errors: &mut Vec<ValidationIssue>,
) {
    let min = component.min_selections as usize;
    let max = component.max_selections as usize;

    if min > 0 && count < min && !required_missing {
        errors.push(ValidationIssue::for_component(
            IssueCode::MinSelections,
            &component.id,
            format!("Select at least {} for {}", min, component.name),
        ));
    }

    if count > max {
        errors.push(ValidationIssue::for_component(
            IssueCode::MaxSelections,
            &component.id,
            format!("Select at most {} for {}", max, component.name),
        ));
    }
}

// Unknown option ids are the caller's data-integrity concern; skip them.
fn check_stock(component: &Component, selection: &Selection, errors: &mut Vec<ValidationIssue>) {
    for option in selection
        .option_ids()
        .filter_map(|id| component.find_option(id))
        .filter(|o| o.is_out_of_stock())
    {
        errors.push(ValidationIssue::for_component(
            IssueCode::OutOfStock,
            &component.id,
            format!("{} is out of stock for {}", option.name, component.name),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ComponentOption, ComponentType};

    fn run(component: &Component, selection: Option<Selection>) -> Vec<IssueCode> {
        let mut errors = Vec::new();
        check_component(component, selection.as_ref(), &mut errors);
        errors.into_iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_required_absent_and_empty() {
        let comp = Component::new("c", "Color", ComponentType::Color).required();
        assert_eq!(run(&comp, None), vec![IssueCode::RequiredComponent]);
        assert_eq!(run(&comp, Some("".into())), vec![IssueCode::RequiredComponent]);
        assert_eq!(run(&comp, Some(Vec::<&str>::new().into())), vec![IssueCode::RequiredComponent]);
        assert!(run(&comp, Some("red".into())).is_empty());
    }

    #[test]
    fn test_required_with_min_is_not_double_reported() {
        let comp = Component::new("c", "Charms", ComponentType::Accessory)
            .required()
            .multiple(2, 4);
        assert_eq!(run(&comp, None), vec![IssueCode::RequiredComponent]);
        assert_eq!(run(&comp, Some(vec!["a"].into())), vec![IssueCode::MinSelections]);
    }

    #[test]
    fn test_optional_min_applies_without_selection() {
        let comp = Component::new("c", "Charms", ComponentType::Accessory).multiple(2, 4);
        assert_eq!(run(&comp, None), vec![IssueCode::MinSelections]);
        assert_eq!(run(&comp, Some(Vec::<&str>::new().into())), vec![IssueCode::MinSelections]);
        assert_eq!(run(&comp, Some(vec!["a"].into())), vec![IssueCode::MinSelections]);
        assert!(run(&comp, Some(vec!["a", "b"].into())).is_empty());
    }

    #[test]
    fn test_max_boundary() {
        let comp = Component::new("c", "Charms", ComponentType::Accessory).multiple(0, 2);
        assert!(run(&comp, Some(vec!["a", "b"].into())).is_empty());
        assert_eq!(
            run(&comp, Some(vec!["a", "b", "c"].into())),
            vec![IssueCode::MaxSelections]
        );
    }

    #[test]
    fn test_stock_per_selected_option() {
        let comp = Component::new("m", "Material", ComponentType::Material)
            .multiple(0, 3)
            .with_options([
                ComponentOption::new("wood", "Wood"),
                ComponentOption::new("gold", "Gold").with_in_stock(false),
                ComponentOption::new("silver", "Silver").with_stock_quantity(0),
            ]);
        assert!(run(&comp, Some(vec!["wood"].into())).is_empty());
        assert_eq!(
            run(&comp, Some(vec!["gold", "silver", "ghost"].into())),
            vec![IssueCode::OutOfStock, IssueCode::OutOfStock]
        );
    }

    #[test]
    fn test_inactive_component_is_skipped() {
        let option = ComponentOption::new("gold", "Gold").with_in_stock(false);
        let hidden = Component::new("c", "C", ComponentType::Material)
            .required()
            .hidden()
            .with_options([option.clone()]);
        let disabled = Component::new("d", "D", ComponentType::Material)
            .multiple(0, 1)
            .disabled()
            .with_options([option]);
        assert!(run(&hidden, None).is_empty());
        assert!(run(&disabled, Some(vec!["gold", "gold"].into())).is_empty());
    }
}
