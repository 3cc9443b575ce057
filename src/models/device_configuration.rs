use chrono::{DateTime, Utc};

use super::certificates::{
    AndroidCertificateProfileBase, IosCertificateProfile, IosCertificateProfileBase,
    IosTrustedRootCertificate, WindowsCertificateProfileBase,
};
use super::email::{
    AndroidEasEmailProfileConfiguration, EasEmailProfileConfigurationBase,
    IosEasEmailProfileConfiguration,
};
use super::entity::Entity;
use super::enums::{
    ComplianceStatus, DeviceAndAppManagementAssignmentFilterType,
    DeviceAndAppManagementAssignmentSource, DeviceConfigAssignmentIntent,
    DeviceManagementApplicabilityRuleType, DeviceManagementDerivedCredentialIssuer,
    DeviceManagementDerivedCredentialNotificationType, Windows10DeviceModeType,
    Windows10EditionType,
};
use super::vpn::{
    AndroidVpnConfiguration, AppleVpnConfiguration, IosVpnConfiguration,
    Windows10VpnConfiguration, WindowsVpnConfiguration,
};
use super::wifi::{
    IosEnterpriseWiFiConfiguration, IosWiFiConfiguration, MacOSWiFiConfiguration,
    WindowsWifiConfiguration,
};

graph_model! {
    /// Intune device configuration profile. Every concrete profile embeds it.
    pub struct DeviceConfiguration("#microsoft.graph.deviceConfiguration"): Entity {
        assignments / set_assignments: Vec<DeviceConfigurationAssignment> => "assignments",
        created_date_time / set_created_date_time: DateTime<Utc> => "createdDateTime",
        description / set_description: String => "description",
        device_management_applicability_rule_device_mode / set_device_management_applicability_rule_device_mode:
            DeviceManagementApplicabilityRuleDeviceMode => "deviceManagementApplicabilityRuleDeviceMode",
        device_management_applicability_rule_os_edition / set_device_management_applicability_rule_os_edition:
            DeviceManagementApplicabilityRuleOsEdition => "deviceManagementApplicabilityRuleOsEdition",
        device_management_applicability_rule_os_version / set_device_management_applicability_rule_os_version:
            DeviceManagementApplicabilityRuleOsVersion => "deviceManagementApplicabilityRuleOsVersion",
        device_statuses / set_device_statuses: Vec<DeviceConfigurationDeviceStatus> => "deviceStatuses",
        device_status_overview / set_device_status_overview: DeviceConfigurationDeviceOverview => "deviceStatusOverview",
        display_name / set_display_name: String => "displayName",
        last_modified_date_time / set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime",
        role_scope_tag_ids / set_role_scope_tag_ids: Vec<String> => "roleScopeTagIds",
        supports_scope_tags / set_supports_scope_tags: bool => "supportsScopeTags",
        user_statuses / set_user_statuses: Vec<DeviceConfigurationUserStatus> => "userStatuses",
        user_status_overview / set_user_status_overview: DeviceConfigurationUserOverview => "userStatusOverview",
        /// Incremented by the service on every change.
        version / set_version: i32 => "version",
    }
}

graph_family! {
    /// Device configuration profiles, resolved from `@odata.type`.
    pub enum DeviceConfigurationKind: DeviceConfiguration {
        AndroidVpn(AndroidVpnConfiguration),
        AppleVpn(AppleVpnConfiguration),
        IosVpn(IosVpnConfiguration),
        WindowsVpn(WindowsVpnConfiguration),
        Windows10Vpn(Windows10VpnConfiguration),
        AndroidCertificateProfileBase(AndroidCertificateProfileBase),
        IosCertificateProfile(IosCertificateProfile),
        IosCertificateProfileBase(IosCertificateProfileBase),
        IosTrustedRootCertificate(IosTrustedRootCertificate),
        WindowsCertificateProfileBase(WindowsCertificateProfileBase),
        IosWiFi(IosWiFiConfiguration),
        IosEnterpriseWiFi(IosEnterpriseWiFiConfiguration),
        MacOSWiFi(MacOSWiFiConfiguration),
        WindowsWifi(WindowsWifiConfiguration),
        EasEmailProfileBase(EasEmailProfileConfigurationBase),
        IosEasEmail(IosEasEmailProfileConfiguration),
        AndroidEasEmail(AndroidEasEmailProfileConfiguration),
    }
}

graph_model! {
    pub struct DeviceConfigurationAssignment("#microsoft.graph.deviceConfigurationAssignment"): Entity {
        intent / set_intent: DeviceConfigAssignmentIntent => "intent",
        source / set_source: DeviceAndAppManagementAssignmentSource => "source",
        source_id / set_source_id: String => "sourceId",
        target / set_target: AssignmentTargetKind => "target",
    }
}

graph_model! {
    /// Base type for the targets a configuration can be assigned to.
    pub struct DeviceAndAppManagementAssignmentTarget("#microsoft.graph.deviceAndAppManagementAssignmentTarget") {
        device_and_app_management_assignment_filter_id / set_device_and_app_management_assignment_filter_id:
            String => "deviceAndAppManagementAssignmentFilterId",
        device_and_app_management_assignment_filter_type / set_device_and_app_management_assignment_filter_type:
            DeviceAndAppManagementAssignmentFilterType => "deviceAndAppManagementAssignmentFilterType",
    }
}

graph_model! {
    pub struct AllDevicesAssignmentTarget("#microsoft.graph.allDevicesAssignmentTarget"): DeviceAndAppManagementAssignmentTarget {}
}

graph_model! {
    pub struct AllLicensedUsersAssignmentTarget("#microsoft.graph.allLicensedUsersAssignmentTarget"): DeviceAndAppManagementAssignmentTarget {}
}

graph_model! {
    pub struct GroupAssignmentTarget("#microsoft.graph.groupAssignmentTarget"): DeviceAndAppManagementAssignmentTarget {
        group_id / set_group_id: String => "groupId",
    }
}

graph_model! {
    pub struct ExclusionGroupAssignmentTarget("#microsoft.graph.exclusionGroupAssignmentTarget"): GroupAssignmentTarget {}
}

graph_family! {
    pub enum AssignmentTargetKind: DeviceAndAppManagementAssignmentTarget {
        AllDevices(AllDevicesAssignmentTarget),
        AllLicensedUsers(AllLicensedUsersAssignmentTarget),
        Group(GroupAssignmentTarget),
        ExclusionGroup(ExclusionGroupAssignmentTarget),
    }
}

graph_model! {
    pub struct DeviceManagementApplicabilityRuleDeviceMode("#microsoft.graph.deviceManagementApplicabilityRuleDeviceMode") {
        device_mode / set_device_mode: Windows10DeviceModeType => "deviceMode",
        name / set_name: String => "name",
        rule_type / set_rule_type: DeviceManagementApplicabilityRuleType => "ruleType",
    }
}

graph_model! {
    pub struct DeviceManagementApplicabilityRuleOsEdition("#microsoft.graph.deviceManagementApplicabilityRuleOsEdition") {
        name / set_name: String => "name",
        os_edition_types / set_os_edition_types: Vec<Windows10EditionType> => "osEditionTypes",
        rule_type / set_rule_type: DeviceManagementApplicabilityRuleType => "ruleType",
    }
}

graph_model! {
    pub struct DeviceManagementApplicabilityRuleOsVersion("#microsoft.graph.deviceManagementApplicabilityRuleOsVersion") {
        max_os_version / set_max_os_version: String => "maxOSVersion",
        min_os_version / set_min_os_version: String => "minOSVersion",
        name / set_name: String => "name",
        rule_type / set_rule_type: DeviceManagementApplicabilityRuleType => "ruleType",
    }
}

graph_model! {
    /// Per-device deployment counts for one profile.
    pub struct DeviceConfigurationDeviceOverview("#microsoft.graph.deviceConfigurationDeviceOverview"): Entity {
        configuration_version / set_configuration_version: i32 => "configurationVersion",
        conflict_count / set_conflict_count: i32 => "conflictCount",
        error_count / set_error_count: i32 => "errorCount",
        failed_count / set_failed_count: i32 => "failedCount",
        last_update_date_time / set_last_update_date_time: DateTime<Utc> => "lastUpdateDateTime",
        not_applicable_count / set_not_applicable_count: i32 => "notApplicableCount",
        not_applicable_platform_count / set_not_applicable_platform_count: i32 => "notApplicablePlatformCount",
        pending_count / set_pending_count: i32 => "pendingCount",
        success_count / set_success_count: i32 => "successCount",
    }
}

graph_model! {
    /// Per-user deployment counts for one profile.
    pub struct DeviceConfigurationUserOverview("#microsoft.graph.deviceConfigurationUserOverview"): Entity {
        configuration_version / set_configuration_version: i32 => "configurationVersion",
        conflict_count / set_conflict_count: i32 => "conflictCount",
        error_count / set_error_count: i32 => "errorCount",
        failed_count / set_failed_count: i32 => "failedCount",
        last_update_date_time / set_last_update_date_time: DateTime<Utc> => "lastUpdateDateTime",
        not_applicable_count / set_not_applicable_count: i32 => "notApplicableCount",
        pending_count / set_pending_count: i32 => "pendingCount",
        success_count / set_success_count: i32 => "successCount",
    }
}

graph_model! {
    pub struct DeviceConfigurationDeviceStatus("#microsoft.graph.deviceConfigurationDeviceStatus"): Entity {
        compliance_grace_period_expiration_date_time / set_compliance_grace_period_expiration_date_time:
            DateTime<Utc> => "complianceGracePeriodExpirationDateTime",
        device_display_name / set_device_display_name: String => "deviceDisplayName",
        device_model / set_device_model: String => "deviceModel",
        last_reported_date_time / set_last_reported_date_time: DateTime<Utc> => "lastReportedDateTime",
        platform / set_platform: i32 => "platform",
        status / set_status: ComplianceStatus => "status",
        user_name / set_user_name: String => "userName",
        user_principal_name / set_user_principal_name: String => "userPrincipalName",
    }
}

graph_model! {
    pub struct DeviceConfigurationUserStatus("#microsoft.graph.deviceConfigurationUserStatus"): Entity {
        devices_count / set_devices_count: i32 => "devicesCount",
        last_reported_date_time / set_last_reported_date_time: DateTime<Utc> => "lastReportedDateTime",
        status / set_status: ComplianceStatus => "status",
        user_display_name / set_user_display_name: String => "userDisplayName",
        user_principal_name / set_user_principal_name: String => "userPrincipalName",
    }
}

graph_model! {
    /// Derived credential provider settings shared by VPN, Wi-Fi and email profiles.
    pub struct DeviceManagementDerivedCredentialSettings("#microsoft.graph.deviceManagementDerivedCredentialSettings"): Entity {
        display_name / set_display_name: String => "displayName",
        help_url / set_help_url: String => "helpUrl",
        issuer / set_issuer: DeviceManagementDerivedCredentialIssuer => "issuer",
        notification_type / set_notification_type: DeviceManagementDerivedCredentialNotificationType => "notificationType",
        renewal_threshold_percentage / set_renewal_threshold_percentage: i32 => "renewalThresholdPercentage",
    }
}
