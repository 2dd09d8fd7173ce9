use super::*;

#[test]
fn step_labels_count_from_one() {
    assert_eq!(step_label(FormId::Personal), "Step 1 of 3");
    assert_eq!(step_label(FormId::Skills), "Step 3 of 3");
}

#[test]
fn only_last_step_submits() {
    assert_eq!(primary_label(FormId::Personal), "Save & Next");
    assert_eq!(primary_label(FormId::Academic), "Save & Next");
    assert_eq!(primary_label(FormId::Skills), "Submit Profile");
}
