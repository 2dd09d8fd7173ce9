use super::*;

fn profile(value: serde_json::Value) -> Profile {
    serde_json::from_value(value).expect("profile object")
}

#[test]
fn truthy_text_follows_js_truthiness() {
    let p = profile(serde_json::json!({
        "name": "Asha",
        "empty": "",
        "zero": 0,
        "count": 3,
        "ratio": 8.5,
        "flag": true,
        "off": false,
        "missing": null,
        "dash": "-",
        "list": ["a"]
    }));
    assert_eq!(p.truthy_text("name").as_deref(), Some("Asha"));
    assert_eq!(p.truthy_text("empty"), None);
    assert_eq!(p.truthy_text("zero"), None);
    assert_eq!(p.truthy_text("count").as_deref(), Some("3"));
    assert_eq!(p.truthy_text("ratio").as_deref(), Some("8.5"));
    assert_eq!(p.truthy_text("flag").as_deref(), Some("true"));
    assert_eq!(p.truthy_text("off"), None);
    assert_eq!(p.truthy_text("missing"), None);
    assert_eq!(p.truthy_text("dash").as_deref(), Some("-"));
    assert_eq!(p.truthy_text("list"), None);
    assert_eq!(p.truthy_text("absent"), None);
}

#[test]
fn display_hides_sentinel() {
    let p = profile(serde_json::json!({ "city": "-", "pincode": "600001" }));
    assert_eq!(p.display("city"), None);
    assert_eq!(p.display("pincode").as_deref(), Some("600001"));
}

#[test]
fn envelope_prefers_profile_key() {
    let env: ProfileEnvelope = serde_json::from_value(serde_json::json!({
        "profile": { "name": "A" },
        "student": { "name": "B" }
    }))
    .unwrap();
    let p = env.into_profile().unwrap();
    assert_eq!(p.truthy_text("name").as_deref(), Some("A"));
}

#[test]
fn envelope_falls_back_to_student_key() {
    let env: ProfileEnvelope =
        serde_json::from_value(serde_json::json!({ "student": { "official_email": "a@college.edu" } })).unwrap();
    let p = env.into_profile().unwrap();
    assert_eq!(p.truthy_text("official_email").as_deref(), Some("a@college.edu"));
}

#[test]
fn envelope_without_profile_is_none() {
    let env: ProfileEnvelope = serde_json::from_value(serde_json::json!({ "message": "ok" })).unwrap();
    assert!(env.into_profile().is_none());
}

#[test]
fn profile_serializes_as_plain_object() {
    let p = profile(serde_json::json!({ "skill_python": "Advanced" }));
    assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"skill_python":"Advanced"}"#);
}

#[test]
fn dashboard_envelope_tolerates_partial_stats() {
    let env: DashboardEnvelope = serde_json::from_value(serde_json::json!({
        "admin": { "name": "Dean" },
        "stats": { "total_students": 350, "profiles_completed": 120 }
    }))
    .unwrap();
    assert_eq!(env.stats.total_students, 350);
    assert_eq!(env.stats.profiles_completed, 120);
    assert_eq!(env.stats.students_placed, 0);
}
