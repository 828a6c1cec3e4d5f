pub mod fixtures;

use canon_catalog::employee::EmployeeRow;
use canon_catalog::employment::EmploymentType;
use canon_catalog::role::Role;
use canon_catalog::{CatalogError, SET_NAMES};
use canon_domain::config::{DecodeForm, EncodeForm};
use canon_registry::{Closed, DecodeError, RegistryError};
use fixtures::*;

#[test]
fn test_every_set_is_listed_under_its_closed_name() {
    let catalog = catalog();
    let names: Vec<&str> = catalog.views().map(|view| view.name()).collect();
    assert_eq!(names, SET_NAMES);
    assert!(names.contains(&Role::SET_NAME));
    assert!(names.contains(&EmploymentType::SET_NAME));
}

#[test]
fn test_views_list_entries_in_declaration_order() {
    let catalog = catalog();
    let entries = catalog.view("EmploymentType").unwrap().entries();
    let listed: Vec<(usize, &str, &str)> =
        entries.iter().map(|e| (e.ordinal, e.identity.as_str(), e.encoded.as_str())).collect();
    assert_eq!(
        listed,
        [(0, "FULL_TIME", "Full time"), (1, "PART_TIME", "Part time"), (2, "CONTRACTOR", "Contractor")]
    );
}

#[test]
fn test_unknown_set_name_is_reported() {
    let catalog = catalog();
    let err = catalog.view("Currency").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownSet { ref name, .. } if name == "Currency"));
}

#[test]
fn test_views_report_their_alternate_indexes() {
    let catalog = catalog();
    assert!(catalog.view("Role").unwrap().indexes().is_empty());
    assert_eq!(catalog.view("EmploymentType").unwrap().indexes(), ["display"]);
    assert_eq!(catalog.view("TimeZoneInfo").unwrap().indexes(), ["region"]);
}

#[test]
fn test_lookup_failures_are_told_apart_from_declaration_failures() {
    let catalog = catalog();
    assert!(catalog.view("Currency").unwrap_err().is_lookup_failure());

    let roles = catalog.view("Role").unwrap();
    assert!(roles.decode("boss").unwrap_err().is_lookup_failure());
    assert!(roles.encode("BOSS").unwrap_err().is_lookup_failure());

    let internal = CatalogError::Internal { message: "unreachable arm".into(), context: None };
    assert!(!internal.is_lookup_failure());
}

#[test]
fn test_view_decode_and_encode_use_the_set_codec() {
    let catalog = catalog();
    let statuses = catalog.view("TaskStatus").unwrap();
    assert_eq!(statuses.decode("completed").unwrap(), "DONE");
    assert_eq!(statuses.encode("IN_PROGRESS").unwrap(), "In progress");

    let zones = catalog.view("TimeZoneInfo").unwrap();
    assert_eq!(zones.decode("ASIA_TOKYO").unwrap(), "ASIA_TOKYO");
    assert!(zones.decode("Asia/Tokyo").is_err());
}

#[test]
fn test_employee_json_uses_configured_forms() {
    let catalog = catalog();
    let json = catalog.employee_to_json(&driver()).unwrap();
    assert_eq!(json, r#"{"name":"Olena","role":"DRIVER","employmentType":"Part time"}"#);
    assert_eq!(catalog.employee_from_json(&json).unwrap(), driver());

    let by_identity = r#"{"name":"Olena","role":"DRIVER","employmentType":"PART_TIME"}"#;
    assert_eq!(catalog.employee_from_json(by_identity).unwrap(), driver());
}

#[test]
fn test_employee_json_rejects_unknown_values_with_set_and_input() {
    let catalog = catalog();
    let err = catalog
        .employee_from_json(r#"{"name":"Ivan","role":"USER","employmentType":"Freelance"}"#)
        .unwrap_err();
    let CatalogError::Decode { source, .. } = err else { panic!("expected a decode error") };
    assert_eq!(source.set_name(), "EmploymentType");
    assert_eq!(source.input(), "Freelance");
    assert!(matches!(source, DecodeError::UnrecognizedRepresentation { .. }));

    let err = catalog.employee_from_json(r#"{"name":"Ivan","role":"admin"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
}

#[test]
fn test_identity_encoding_is_configurable() {
    let catalog = catalog_with(|config| {
        config.codec.encode_as = EncodeForm::Identity;
        config.codec.decode_forms = vec![DecodeForm::Identity];
    });
    let json = catalog.employee_to_json(&driver()).unwrap();
    assert_eq!(json, r#"{"name":"Olena","role":"DRIVER","employmentType":"PART_TIME"}"#);
    assert!(catalog.employee_from_json(r#"{"name":"Olena","role":"DRIVER","employmentType":"Part time"}"#).is_err());
}

#[test]
fn test_rows_store_identities_and_reject_unknown_keys() {
    let catalog = catalog();
    let row = catalog.employee_row(&driver()).unwrap();
    assert_eq!(row.role, "DRIVER");
    assert_eq!(row.employment_type, "PART_TIME");
    assert_eq!(catalog.employee_from_row(&row).unwrap(), driver());

    let stale = EmployeeRow { role: "MANAGER".to_owned(), ..row };
    let err = catalog.employee_from_row(&stale).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Registry { source: RegistryError::UnknownIdentity { ref identity, .. }, .. } if identity == "MANAGER"
    ));
}

#[test]
fn test_catalog_is_shared_across_threads() {
    let catalog = catalog();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let catalog = catalog.clone();
            scope.spawn(move || {
                let fare = catalog.transport_types.cost_of("BUS", 4.0).unwrap();
                assert!((fare - 10.0).abs() < 1e-9);
                assert_eq!(catalog.notification_channels.broadcast("ping").len(), 3);
            });
        }
    });
    assert_eq!(catalog.handles(), 1);
}
