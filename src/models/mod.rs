//! Typed models for the Graph beta resources this crate works with.
//!
//! Every struct implements [`Parsable`](graph_serialization::Parsable) and
//! [`FieldValue`](graph_serialization::FieldValue), so it can be read with
//! [`create_from_bytes`](graph_serialization::create_from_bytes) through its
//! `create_from_discriminator_value` factory, or nested inside another model.
//! Derived types dereference to their base, which is how the base getters and
//! setters show up on them. The `*Kind` enums resolve polymorphic payloads
//! from their `@odata.type`.

#[macro_use]
mod macros;

pub mod enums;

mod certificates;
mod device_configuration;
mod email;
mod entity;
mod pages;
mod sites;
mod vpn;
mod wifi;

pub use certificates::{
    AndroidCertificateProfileBase, ExtendedKeyUsage, IosCertificateProfile,
    IosCertificateProfileBase, IosTrustedRootCertificate, WindowsCertificateProfileBase,
};
pub use device_configuration::{
    AllDevicesAssignmentTarget, AllLicensedUsersAssignmentTarget, AssignmentTargetKind,
    DeviceAndAppManagementAssignmentTarget, DeviceConfiguration, DeviceConfigurationAssignment,
    DeviceConfigurationDeviceOverview, DeviceConfigurationDeviceStatus, DeviceConfigurationKind,
    DeviceConfigurationUserOverview, DeviceConfigurationUserStatus,
    DeviceManagementApplicabilityRuleDeviceMode, DeviceManagementApplicabilityRuleOsEdition,
    DeviceManagementApplicabilityRuleOsVersion, DeviceManagementDerivedCredentialSettings,
    ExclusionGroupAssignmentTarget, GroupAssignmentTarget,
};
pub use email::{
    AndroidEasEmailProfileConfiguration, EasEmailProfileConfigurationBase,
    IosEasEmailProfileConfiguration,
};
pub use entity::{Entity, EntityKind};
pub use pages::{
    CanvasLayout, ContentTypeInfo, HorizontalSection, HorizontalSectionColumn,
    MetaDataKeyStringPair, MetaDataKeyValuePair, PublicationFacet, ReactionsFacet,
    ServerProcessedContent, SitePage, StandardWebPart, TextWebPart, TitleArea, VerticalSection,
    WebPart, WebPartData, WebPartKind,
};
pub use sites::{
    BaseItem, BaseItemKind, Identity, IdentitySet, ItemReference, SharepointIds, Site,
    SiteCollection, SitePageCollectionResponse,
};
pub use vpn::{
    AndroidVpnConfiguration, AppleVpnConfiguration, CryptographySuite, IPv4Range,
    IosVpnConfiguration, KeyValue, KeyValuePair, NumberRange, VpnDnsRule, VpnOnDemandRule,
    VpnProxyServer, VpnRoute, VpnServer, VpnTrafficRule, Windows10AssociatedApps,
    Windows10VpnConfiguration, Windows10VpnProxyServer, WindowsVpnConfiguration,
};
pub use wifi::{
    IosEnterpriseWiFiConfiguration, IosWiFiConfiguration, MacOSWiFiConfiguration,
    WindowsWifiConfiguration,
};
