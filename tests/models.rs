use betasdk::models::enums::{
    DeviceConfigAssignmentIntent, PageLayoutType, VpnTrafficRuleRoutingPolicyType,
    Windows10VpnConnectionType,
};
use betasdk::models::{
    AssignmentTargetKind, BaseItemKind, DeviceConfigurationKind, EntityKind, WebPartKind,
};
use graph_serialization::{create_from_bytes, serialize_content, SerializationError};
use serde_json::Value;

mod stubs;

use stubs::payloads;

fn decode(payload: &str) -> Result<EntityKind, SerializationError> {
    create_from_bytes(payload.as_bytes(), EntityKind::create_from_discriminator_value)
}

fn normalised(entity: &EntityKind) -> Value {
    serde_json::from_slice(&serialize_content(entity).unwrap()).unwrap()
}

#[test]
fn test_windows10_vpn_profile() {
    let entity = decode(payloads::WINDOWS10_VPN).unwrap();
    let EntityKind::DeviceConfiguration(DeviceConfigurationKind::Windows10Vpn(vpn)) = &entity
    else {
        panic!("unexpected kind {entity:?}");
    };

    assert_eq!(vpn.display_name().map(String::as_str), Some("Corp VPN"));
    assert_eq!(vpn.version(), Some(&3));
    assert_eq!(vpn.connection_type(), Some(&Windows10VpnConnectionType::IkEv2));
    assert_eq!(vpn.servers().unwrap()[0].address().map(String::as_str), Some("vpn.contoso.com"));
    assert_eq!(
        vpn.traffic_rules().unwrap()[0].routing_policy_type(),
        Some(&VpnTrafficRuleRoutingPolicyType::SplitTunnel)
    );

    let assignment = &vpn.assignments().unwrap()[0];
    assert_eq!(assignment.intent(), Some(&DeviceConfigAssignmentIntent::Apply));
    match assignment.target() {
        Some(AssignmentTargetKind::Group(group)) => {
            assert_eq!(group.group_id().map(String::as_str), Some("g-123"))
        }
        other => panic!("unexpected target {other:?}"),
    }

    assert_eq!(entity.id().map(String::as_str), Some("b4a1c5de-0000-4000-8000-000000000001"));
    assert_eq!(
        entity.odata_type(),
        Some("#microsoft.graph.windows10VpnConfiguration")
    );
}

#[test]
fn test_payloads_survive_a_round_trip() {
    for payload in [
        payloads::WINDOWS10_VPN,
        payloads::SITE_PAGE,
        payloads::UNKNOWN_DEVICE_CONFIGURATION,
    ] {
        let entity = decode(payload).unwrap();
        let original: Value = serde_json::from_str(payload).unwrap();
        assert_eq!(normalised(&entity), original);
    }
}

#[test]
fn test_site_page_layout() {
    let entity = decode(payloads::SITE_PAGE).unwrap();
    let EntityKind::BaseItem(BaseItemKind::SitePage(page)) = &entity else {
        panic!("unexpected kind {entity:?}");
    };
    assert_eq!(page.page_layout(), Some(&PageLayoutType::Home));
    assert_eq!(
        page.created_by()
            .and_then(|by| by.user())
            .and_then(|user| user.display_name())
            .map(String::as_str),
        Some("Adele Vance")
    );

    let layout = page.canvas_layout().unwrap();
    let column = &layout.horizontal_sections().unwrap()[0].columns().unwrap()[0];
    assert_eq!(column.width(), Some(&12));
    assert!(matches!(&column.webparts().unwrap()[0], WebPartKind::Text(_)));
}

#[test]
fn test_unknown_subtype_falls_back_to_base() {
    let configuration = create_from_bytes(
        payloads::UNKNOWN_DEVICE_CONFIGURATION.as_bytes(),
        DeviceConfigurationKind::create_from_discriminator_value,
    )
    .unwrap();
    let DeviceConfigurationKind::Base(base) = &configuration else {
        panic!("unexpected kind {configuration:?}");
    };
    assert_eq!(base.display_name().map(String::as_str), Some("Health monitoring"));
    assert_eq!(
        graph_serialization::AdditionalDataHolder::additional_data(base)["allowDeviceHealthMonitoring"],
        "enabled"
    );

    // Outside a family the top-level factory can only go as far as Entity
    let entity = decode(payloads::UNKNOWN_DEVICE_CONFIGURATION).unwrap();
    assert!(matches!(entity, EntityKind::Entity(_)));
    assert_eq!(entity.id().map(String::as_str), Some("c0ffee00-0000-4000-8000-000000000003"));
}

#[test]
fn test_bad_enum_names_the_field() {
    let err = decode(payloads::BAD_ENUM).unwrap_err();
    assert!(matches!(err, SerializationError::Field { ref field, .. } if field == "connectionType"));
    assert!(err.to_string().contains("carrierPigeon"));
}
