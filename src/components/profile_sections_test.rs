use serde_json::json;

use super::*;
use crate::test_support::profile;

#[test]
fn rows_follow_catalog_labels() {
    let p = profile(json!({ "cgpa_overall": 8.4, "has_backlog_history": "No" }));
    let rows = section_rows(FormId::Academic, &p);
    assert_eq!(rows.len(), FormId::Academic.fields().len());
    assert!(rows.contains(&("Overall CGPA", "8.4".to_owned())));
    assert!(rows.contains(&("Backlog History", "No".to_owned())));
}

#[test]
fn sentinel_and_blank_render_as_not_provided() {
    let p = profile(json!({ "city": "-", "pincode": "", "name": "Asha" }));
    let rows = section_rows(FormId::Personal, &p);
    assert!(rows.contains(&("City", NOT_PROVIDED.to_owned())));
    assert!(rows.contains(&("Pincode", NOT_PROVIDED.to_owned())));
    assert!(rows.contains(&("Full Name", "Asha".to_owned())));
}

#[test]
fn photo_is_kept_out_of_rows() {
    let p = profile(json!({ "photo": "data:image/png;base64,AA==" }));
    let rows = section_rows(FormId::Personal, &p);
    assert!(rows.iter().all(|(label, _)| *label != "Photo"));
    assert_eq!(photo_src(&p).as_deref(), Some("data:image/png;base64,AA=="));
}

#[test]
fn photo_rejects_unexpected_sources() {
    assert_eq!(photo_src(&profile(json!({ "photo": "-" }))), None);
    assert_eq!(photo_src(&profile(json!({ "photo": "javascript:alert(1)" }))), None);
}
