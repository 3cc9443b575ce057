//! VPN profiles and the complex types they carry.

use graph_serialization::ByteArray;

use super::certificates::{
    AndroidCertificateProfileBase, ExtendedKeyUsage, IosCertificateProfileBase,
    WindowsCertificateProfileBase,
};
use super::device_configuration::{DeviceConfiguration, DeviceManagementDerivedCredentialSettings};
use super::enums::{
    AndroidVpnConnectionType, AppleVpnConnectionType, AuthenticationTransformConstant,
    DiffieHellmanGroup, PerfectForwardSecrecyGroup, VpnAuthenticationMethod,
    VpnEncryptionAlgorithmType, VpnIntegrityAlgorithmType, VpnOnDemandRuleConnectionAction,
    VpnOnDemandRuleConnectionDomainAction, VpnOnDemandRuleInterfaceTypeMatch, VpnProviderType,
    VpnTrafficRuleAppType, VpnTrafficRuleRoutingPolicyType, Windows10AppType,
    Windows10VpnAuthenticationMethod, Windows10VpnConnectionType, Windows10VpnProfileTarget,
};

graph_model! {
    pub struct KeyValue("#microsoft.graph.keyValue") {
        key / set_key: String => "key",
        value / set_value: String => "value",
    }
}

graph_model! {
    pub struct KeyValuePair("#microsoft.graph.keyValuePair") {
        name / set_name: String => "name",
        value / set_value: String => "value",
    }
}

graph_model! {
    pub struct VpnServer("#microsoft.graph.vpnServer") {
        address / set_address: String => "address",
        description / set_description: String => "description",
        is_default_server / set_is_default_server: bool => "isDefaultServer",
    }
}

graph_model! {
    pub struct VpnProxyServer("#microsoft.graph.vpnProxyServer") {
        address / set_address: String => "address",
        automatic_configuration_script_url / set_automatic_configuration_script_url: String => "automaticConfigurationScriptUrl",
        port / set_port: i32 => "port",
    }
}

graph_model! {
    pub struct Windows10VpnProxyServer("#microsoft.graph.windows10VpnProxyServer"): VpnProxyServer {
        bypass_proxy_server_for_local_address / set_bypass_proxy_server_for_local_address: bool => "bypassProxyServerForLocalAddress",
    }
}

graph_model! {
    /// When an Apple device should bring the tunnel up on its own.
    pub struct VpnOnDemandRule("#microsoft.graph.vpnOnDemandRule") {
        action / set_action: VpnOnDemandRuleConnectionAction => "action",
        dns_search_domains / set_dns_search_domains: Vec<String> => "dnsSearchDomains",
        dns_server_address_match / set_dns_server_address_match: Vec<String> => "dnsServerAddressMatch",
        domain_action / set_domain_action: VpnOnDemandRuleConnectionDomainAction => "domainAction",
        domains / set_domains: Vec<String> => "domains",
        interface_type_match / set_interface_type_match: VpnOnDemandRuleInterfaceTypeMatch => "interfaceTypeMatch",
        probe_required_url / set_probe_required_url: String => "probeRequiredUrl",
        probe_url / set_probe_url: String => "probeUrl",
        ssids / set_ssids: Vec<String> => "ssids",
    }
}

graph_model! {
    pub struct VpnRoute("#microsoft.graph.vpnRoute") {
        destination_prefix / set_destination_prefix: String => "destinationPrefix",
        prefix_size / set_prefix_size: i32 => "prefixSize",
    }
}

graph_model! {
    pub struct VpnDnsRule("#microsoft.graph.vpnDnsRule") {
        auto_trigger / set_auto_trigger: bool => "autoTrigger",
        name / set_name: String => "name",
        persistent / set_persistent: bool => "persistent",
        proxy_server_uri / set_proxy_server_uri: String => "proxyServerUri",
        servers / set_servers: Vec<String> => "servers",
    }
}

graph_model! {
    pub struct IPv4Range("#microsoft.graph.iPv4Range") {
        lower_address / set_lower_address: String => "lowerAddress",
        upper_address / set_upper_address: String => "upperAddress",
    }
}

graph_model! {
    pub struct NumberRange("#microsoft.graph.numberRange") {
        lower_number / set_lower_number: i32 => "lowerNumber",
        upper_number / set_upper_number: i32 => "upperNumber",
    }
}

graph_model! {
    pub struct VpnTrafficRule("#microsoft.graph.vpnTrafficRule") {
        app_id / set_app_id: String => "appId",
        app_type / set_app_type: VpnTrafficRuleAppType => "appType",
        claims / set_claims: String => "claims",
        local_address_ranges / set_local_address_ranges: Vec<IPv4Range> => "localAddressRanges",
        local_port_ranges / set_local_port_ranges: Vec<NumberRange> => "localPortRanges",
        name / set_name: String => "name",
        /// IP protocol number, 0-255.
        protocols / set_protocols: i32 => "protocols",
        remote_address_ranges / set_remote_address_ranges: Vec<IPv4Range> => "remoteAddressRanges",
        remote_port_ranges / set_remote_port_ranges: Vec<NumberRange> => "remotePortRanges",
        routing_policy_type / set_routing_policy_type: VpnTrafficRuleRoutingPolicyType => "routingPolicyType",
    }
}

graph_model! {
    pub struct Windows10AssociatedApps("#microsoft.graph.windows10AssociatedApps") {
        app_type / set_app_type: Windows10AppType => "appType",
        identifier / set_identifier: String => "identifier",
    }
}

graph_model! {
    /// IKEv2 cryptography parameters.
    pub struct CryptographySuite("#microsoft.graph.cryptographySuite") {
        authentication_transform_constants / set_authentication_transform_constants:
            AuthenticationTransformConstant => "authenticationTransformConstants",
        cipher_transform_constants / set_cipher_transform_constants: VpnEncryptionAlgorithmType => "cipherTransformConstants",
        dh_group / set_dh_group: DiffieHellmanGroup => "dhGroup",
        encryption_method / set_encryption_method: VpnEncryptionAlgorithmType => "encryptionMethod",
        integrity_check_method / set_integrity_check_method: VpnIntegrityAlgorithmType => "integrityCheckMethod",
        pfs_group / set_pfs_group: PerfectForwardSecrecyGroup => "pfsGroup",
    }
}

graph_model! {
    pub struct AndroidVpnConfiguration("#microsoft.graph.androidVpnConfiguration"): DeviceConfiguration {
        authentication_method / set_authentication_method: VpnAuthenticationMethod => "authenticationMethod",
        connection_name / set_connection_name: String => "connectionName",
        connection_type / set_connection_type: AndroidVpnConnectionType => "connectionType",
        custom_data / set_custom_data: Vec<KeyValue> => "customData",
        custom_key_value_data / set_custom_key_value_data: Vec<KeyValuePair> => "customKeyValueData",
        fingerprint / set_fingerprint: String => "fingerprint",
        identity_certificate / set_identity_certificate: AndroidCertificateProfileBase => "identityCertificate",
        realm / set_realm: String => "realm",
        role / set_role: String => "role",
        servers / set_servers: Vec<VpnServer> => "servers",
    }
}

graph_model! {
    pub struct AppleVpnConfiguration("#microsoft.graph.appleVpnConfiguration"): DeviceConfiguration {
        associated_domains / set_associated_domains: Vec<String> => "associatedDomains",
        authentication_method / set_authentication_method: VpnAuthenticationMethod => "authenticationMethod",
        connection_name / set_connection_name: String => "connectionName",
        connection_type / set_connection_type: AppleVpnConnectionType => "connectionType",
        custom_data / set_custom_data: Vec<KeyValue> => "customData",
        custom_key_value_data / set_custom_key_value_data: Vec<KeyValuePair> => "customKeyValueData",
        disable_on_demand_user_override / set_disable_on_demand_user_override: bool => "disableOnDemandUserOverride",
        disconnect_on_idle / set_disconnect_on_idle: bool => "disconnectOnIdle",
        disconnect_on_idle_timer_in_seconds / set_disconnect_on_idle_timer_in_seconds: i32 => "disconnectOnIdleTimerInSeconds",
        enable_per_app / set_enable_per_app: bool => "enablePerApp",
        enable_split_tunneling / set_enable_split_tunneling: bool => "enableSplitTunneling",
        excluded_domains / set_excluded_domains: Vec<String> => "excludedDomains",
        identifier / set_identifier: String => "identifier",
        login_group_or_domain / set_login_group_or_domain: String => "loginGroupOrDomain",
        on_demand_rules / set_on_demand_rules: Vec<VpnOnDemandRule> => "onDemandRules",
        opt_in_to_device_id_sharing / set_opt_in_to_device_id_sharing: bool => "optInToDeviceIdSharing",
        provider_type / set_provider_type: VpnProviderType => "providerType",
        proxy_server / set_proxy_server: VpnProxyServer => "proxyServer",
        realm / set_realm: String => "realm",
        role / set_role: String => "role",
        safari_domains / set_safari_domains: Vec<String> => "safariDomains",
        server / set_server: VpnServer => "server",
    }
}

graph_model! {
    pub struct IosVpnConfiguration("#microsoft.graph.iosVpnConfiguration"): AppleVpnConfiguration {
        cloud_name / set_cloud_name: String => "cloudName",
        derived_credential_settings / set_derived_credential_settings:
            DeviceManagementDerivedCredentialSettings => "derivedCredentialSettings",
        exclude_list / set_exclude_list: Vec<String> => "excludeList",
        identity_certificate / set_identity_certificate: IosCertificateProfileBase => "identityCertificate",
        microsoft_tunnel_site_id / set_microsoft_tunnel_site_id: String => "microsoftTunnelSiteId",
        strict_enforcement / set_strict_enforcement: bool => "strictEnforcement",
        user_domain / set_user_domain: String => "userDomain",
    }
}

graph_model! {
    pub struct WindowsVpnConfiguration("#microsoft.graph.windowsVpnConfiguration"): DeviceConfiguration {
        connection_name / set_connection_name: String => "connectionName",
        /// Raw ProfileXML, base64 on the wire.
        custom_xml / set_custom_xml: ByteArray => "customXml",
        servers / set_servers: Vec<VpnServer> => "servers",
    }
}

graph_model! {
    pub struct Windows10VpnConfiguration("#microsoft.graph.windows10VpnConfiguration"): WindowsVpnConfiguration {
        associated_apps / set_associated_apps: Vec<Windows10AssociatedApps> => "associatedApps",
        authentication_method / set_authentication_method: Windows10VpnAuthenticationMethod => "authenticationMethod",
        connection_type / set_connection_type: Windows10VpnConnectionType => "connectionType",
        cryptography_suite / set_cryptography_suite: CryptographySuite => "cryptographySuite",
        dns_rules / set_dns_rules: Vec<VpnDnsRule> => "dnsRules",
        dns_suffixes / set_dns_suffixes: Vec<String> => "dnsSuffixes",
        eap_xml / set_eap_xml: ByteArray => "eapXml",
        enable_always_on / set_enable_always_on: bool => "enableAlwaysOn",
        enable_conditional_access / set_enable_conditional_access: bool => "enableConditionalAccess",
        enable_device_tunnel / set_enable_device_tunnel: bool => "enableDeviceTunnel",
        enable_dns_registration / set_enable_dns_registration: bool => "enableDnsRegistration",
        enable_single_sign_on_with_alternate_certificate / set_enable_single_sign_on_with_alternate_certificate:
            bool => "enableSingleSignOnWithAlternateCertificate",
        enable_split_tunneling / set_enable_split_tunneling: bool => "enableSplitTunneling",
        identity_certificate / set_identity_certificate: WindowsCertificateProfileBase => "identityCertificate",
        microsoft_tunnel_site_id / set_microsoft_tunnel_site_id: String => "microsoftTunnelSiteId",
        only_associated_apps_can_use_connection / set_only_associated_apps_can_use_connection:
            bool => "onlyAssociatedAppsCanUseConnection",
        profile_target / set_profile_target: Windows10VpnProfileTarget => "profileTarget",
        proxy_server / set_proxy_server: Windows10VpnProxyServer => "proxyServer",
        remember_user_credentials / set_remember_user_credentials: bool => "rememberUserCredentials",
        routes / set_routes: Vec<VpnRoute> => "routes",
        single_sign_on_eku / set_single_sign_on_eku: ExtendedKeyUsage => "singleSignOnEku",
        single_sign_on_issuer_hash / set_single_sign_on_issuer_hash: String => "singleSignOnIssuerHash",
        traffic_rules / set_traffic_rules: Vec<VpnTrafficRule> => "trafficRules",
        trusted_network_domains / set_trusted_network_domains: Vec<String> => "trustedNetworkDomains",
        windows_information_protection_domain / set_windows_information_protection_domain:
            String => "windowsInformationProtectionDomain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use graph_serialization::{create_from_bytes, serialize_content};
    use serde_json::{json, Value};

    use crate::models::DeviceConfigurationKind;

    #[test]
    fn test_windows10_vpn_reads_inherited_and_own_fields() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.windows10VpnConfiguration",
            "id": "vpn-1",
            "displayName": "Corp VPN",
            "connectionName": "corp",
            "customXml": "PHhtbC8+",
            "servers": [{"address": "vpn.contoso.com", "isDefaultServer": true}],
            "connectionType": "ikEv2",
            "authenticationMethod": "certificate",
            "proxyServer": {"address": "proxy", "port": 8080, "bypassProxyServerForLocalAddress": true},
            "trafficRules": [{
                "name": "rdp",
                "protocols": 6,
                "remotePortRanges": [{"lowerNumber": 3389, "upperNumber": 3389}],
                "routingPolicyType": "splitTunnel"
            }],
            "cryptographySuite": {"dhGroup": "group14", "integrityCheckMethod": "sha2_256"}
        });
        let parsed = create_from_bytes(
            payload.to_string().as_bytes(),
            DeviceConfigurationKind::create_from_discriminator_value,
        )
        .unwrap();

        let DeviceConfigurationKind::Windows10Vpn(vpn) = &parsed else {
            panic!("expected a Windows 10 VPN profile, got {parsed:?}");
        };
        assert_eq!(vpn.id().map(String::as_str), Some("vpn-1"));
        assert_eq!(vpn.display_name().map(String::as_str), Some("Corp VPN"));
        assert_eq!(vpn.connection_name().map(String::as_str), Some("corp"));
        assert_eq!(vpn.custom_xml().map(|x| x.as_ref().to_vec()), Some(b"<xml/>".to_vec()));
        assert_eq!(vpn.connection_type(), Some(&Windows10VpnConnectionType::IkEv2));
        let proxy = vpn.proxy_server().unwrap();
        assert_eq!(proxy.port(), Some(&8080));
        assert_eq!(proxy.bypass_proxy_server_for_local_address(), Some(&true));
        let rule = &vpn.traffic_rules().unwrap()[0];
        assert_eq!(rule.remote_port_ranges().unwrap()[0].lower_number(), Some(&3389));
        assert_eq!(
            vpn.cryptography_suite().unwrap().integrity_check_method(),
            Some(&VpnIntegrityAlgorithmType::Sha256)
        );

        // Nested complex types gain their own @odata.type on the way out.
        let content = serialize_content(&parsed).unwrap();
        let written: Value = serde_json::from_slice(&content).unwrap();
        assert_eq!(
            written["servers"][0]["@odata.type"],
            json!("#microsoft.graph.vpnServer")
        );
        let reparsed = create_from_bytes(
            &content,
            DeviceConfigurationKind::create_from_discriminator_value,
        )
        .unwrap();
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_build_and_serialize_android_vpn() {
        let mut vpn = AndroidVpnConfiguration::new();
        vpn.set_display_name(Some("Field VPN".to_string()));
        vpn.set_connection_type(Some(AndroidVpnConnectionType::MicrosoftTunnel));
        let mut server = VpnServer::new();
        server.set_address(Some("tunnel.contoso.com".to_string()));
        vpn.set_servers(Some(vec![server]));

        let content = serialize_content(&vpn).unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&content).unwrap(),
            json!({
                "@odata.type": "#microsoft.graph.androidVpnConfiguration",
                "displayName": "Field VPN",
                "connectionType": "microsoftTunnel",
                "servers": [{
                    "@odata.type": "#microsoft.graph.vpnServer",
                    "address": "tunnel.contoso.com"
                }]
            })
        );
    }

    #[test]
    fn test_ios_vpn_embeds_apple_vpn() {
        let payload = br##"{
            "@odata.type": "#microsoft.graph.iosVpnConfiguration",
            "connectionType": "ciscoAnyConnectV2",
            "onDemandRules": [{"action": "connect", "ssids": ["corp-wifi"], "interfaceTypeMatch": "wiFi"}],
            "strictEnforcement": true
        }"##;
        let vpn =
            create_from_bytes(payload, IosVpnConfiguration::create_from_discriminator_value).unwrap();
        assert_eq!(vpn.connection_type(), Some(&AppleVpnConnectionType::CiscoAnyConnectV2));
        assert_eq!(vpn.strict_enforcement(), Some(&true));
        let rule = &vpn.on_demand_rules().unwrap()[0];
        assert_eq!(rule.action(), Some(&VpnOnDemandRuleConnectionAction::Connect));
        assert_eq!(
            rule.interface_type_match(),
            Some(&VpnOnDemandRuleInterfaceTypeMatch::WiFi)
        );
        assert_eq!(vpn.base().connection_type(), vpn.connection_type());
    }
}
