use aeromed_audit::events::AuditEvent;

#[test]
fn new_event_stringifies_ids() {
    let event = AuditEvent::new("create", "complaint", 42, "user-7");
    assert_eq!(event.action, "create");
    assert_eq!(event.resource_type, "complaint");
    assert_eq!(event.resource_id, "42");
    assert_eq!(event.user_id, "user-7");
    assert!(event.details.is_none());
}

#[test]
fn details_serialize_with_the_event() {
    let event = AuditEvent::new("read", "notification", "n-1", "u-1")
        .with_details(serde_json::json!({ "complaint_id": "c-9" }));

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["details"]["complaint_id"], "c-9");
    assert_eq!(json["resource_id"], "n-1");

    // emitting without a subscriber is a no-op
    event.emit();
}
