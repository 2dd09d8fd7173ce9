use super::*;

#[test]
fn cards_format_percentages_and_packages() {
    let stats = DashboardStats {
        total_students: 350,
        profile_completion_pct: 62.857,
        avg_package: 6.5,
        ..DashboardStats::default()
    };
    let cards = stat_cards(&stats);
    assert!(cards.contains(&("Total Students", "350".to_owned())));
    assert!(cards.contains(&("Profile Completion", "62.9%".to_owned())));
    assert!(cards.contains(&("Average Package", "6.50 LPA".to_owned())));
}

#[test]
fn empty_stats_render_zeroes() {
    let cards = stat_cards(&DashboardStats::default());
    assert_eq!(cards.len(), 12);
    assert!(cards.contains(&("Companies", "0".to_owned())));
    assert!(cards.contains(&("Placement Rate", "0.0%".to_owned())));
}
