use super::certificates::{IosCertificateProfileBase, IosTrustedRootCertificate};
use super::device_configuration::{DeviceConfiguration, DeviceManagementDerivedCredentialSettings};
use super::enums::{
    EapFastConfiguration, EapType, MeteredConnectionLimitType,
    NonEapAuthenticationMethodForEapTtlsType, WiFiAuthenticationMethod, WiFiProxySetting,
    WiFiSecurityType,
};

graph_model! {
    pub struct IosWiFiConfiguration("#microsoft.graph.iosWiFiConfiguration"): DeviceConfiguration {
        connect_automatically / set_connect_automatically: bool => "connectAutomatically",
        connect_when_network_name_is_hidden / set_connect_when_network_name_is_hidden: bool => "connectWhenNetworkNameIsHidden",
        disable_mac_address_randomization / set_disable_mac_address_randomization: bool => "disableMacAddressRandomization",
        network_name / set_network_name: String => "networkName",
        pre_shared_key / set_pre_shared_key: String => "preSharedKey",
        proxy_automatic_configuration_url / set_proxy_automatic_configuration_url: String => "proxyAutomaticConfigurationUrl",
        proxy_manual_address / set_proxy_manual_address: String => "proxyManualAddress",
        proxy_manual_port / set_proxy_manual_port: i32 => "proxyManualPort",
        proxy_settings / set_proxy_settings: WiFiProxySetting => "proxySettings",
        ssid / set_ssid: String => "ssid",
        wi_fi_security_type / set_wi_fi_security_type: WiFiSecurityType => "wiFiSecurityType",
    }
}

graph_model! {
    pub struct IosEnterpriseWiFiConfiguration("#microsoft.graph.iosEnterpriseWiFiConfiguration"): IosWiFiConfiguration {
        authentication_method / set_authentication_method: WiFiAuthenticationMethod => "authenticationMethod",
        derived_credential_settings / set_derived_credential_settings:
            DeviceManagementDerivedCredentialSettings => "derivedCredentialSettings",
        eap_fast_configuration / set_eap_fast_configuration: EapFastConfiguration => "eapFastConfiguration",
        eap_type / set_eap_type: EapType => "eapType",
        identity_certificate_for_client_authentication / set_identity_certificate_for_client_authentication:
            IosCertificateProfileBase => "identityCertificateForClientAuthentication",
        inner_authentication_protocol_for_eap_ttls / set_inner_authentication_protocol_for_eap_ttls:
            NonEapAuthenticationMethodForEapTtlsType => "innerAuthenticationProtocolForEapTtls",
        outer_identity_privacy_temporary_value / set_outer_identity_privacy_temporary_value:
            String => "outerIdentityPrivacyTemporaryValue",
        password_format_string / set_password_format_string: String => "passwordFormatString",
        root_certificates_for_server_validation / set_root_certificates_for_server_validation:
            Vec<IosTrustedRootCertificate> => "rootCertificatesForServerValidation",
        trusted_server_certificate_names / set_trusted_server_certificate_names: Vec<String> => "trustedServerCertificateNames",
        username_format_string / set_username_format_string: String => "usernameFormatString",
    }
}

graph_model! {
    pub struct MacOSWiFiConfiguration("#microsoft.graph.macOSWiFiConfiguration"): DeviceConfiguration {
        connect_automatically / set_connect_automatically: bool => "connectAutomatically",
        connect_when_network_name_is_hidden / set_connect_when_network_name_is_hidden: bool => "connectWhenNetworkNameIsHidden",
        network_name / set_network_name: String => "networkName",
        pre_shared_key / set_pre_shared_key: String => "preSharedKey",
        proxy_automatic_configuration_url / set_proxy_automatic_configuration_url: String => "proxyAutomaticConfigurationUrl",
        proxy_manual_address / set_proxy_manual_address: String => "proxyManualAddress",
        proxy_manual_port / set_proxy_manual_port: i32 => "proxyManualPort",
        proxy_settings / set_proxy_settings: WiFiProxySetting => "proxySettings",
        ssid / set_ssid: String => "ssid",
        wi_fi_security_type / set_wi_fi_security_type: WiFiSecurityType => "wiFiSecurityType",
    }
}

graph_model! {
    /// Windows 8.1+ Wi-Fi profile. Note the lower-case `wifi` in its wire names.
    pub struct WindowsWifiConfiguration("#microsoft.graph.windowsWifiConfiguration"): DeviceConfiguration {
        connect_automatically / set_connect_automatically: bool => "connectAutomatically",
        connect_to_preferred_network / set_connect_to_preferred_network: bool => "connectToPreferredNetwork",
        connect_when_network_name_is_hidden / set_connect_when_network_name_is_hidden: bool => "connectWhenNetworkNameIsHidden",
        force_fips_compliance / set_force_fips_compliance: bool => "forceFIPSCompliance",
        metered_connection_limit / set_metered_connection_limit: MeteredConnectionLimitType => "meteredConnectionLimit",
        network_name / set_network_name: String => "networkName",
        pre_shared_key / set_pre_shared_key: String => "preSharedKey",
        proxy_automatic_configuration_url / set_proxy_automatic_configuration_url: String => "proxyAutomaticConfigurationUrl",
        proxy_manual_address / set_proxy_manual_address: String => "proxyManualAddress",
        proxy_manual_port / set_proxy_manual_port: i32 => "proxyManualPort",
        proxy_setting / set_proxy_setting: WiFiProxySetting => "proxySetting",
        ssid / set_ssid: String => "ssid",
        wifi_security_type / set_wifi_security_type: WiFiSecurityType => "wifiSecurityType",
    }
}
