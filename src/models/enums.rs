//! Enum types referenced by the models.
//!
//! Each enum is backed by an `i32` in declaration order and travels as its
//! camelCase name. Flag enums travel as a comma separated list of names.

// Device configuration

graph_enum! {
    pub enum DeviceConfigAssignmentIntent {
        Apply => "apply",
        Remove => "remove",
    }
}

graph_enum! {
    pub enum DeviceAndAppManagementAssignmentSource {
        Direct => "direct",
        PolicySets => "policySets",
    }
}

graph_enum! {
    pub enum DeviceAndAppManagementAssignmentFilterType {
        None => "none",
        Include => "include",
        Exclude => "exclude",
    }
}

graph_enum! {
    pub enum DeviceManagementApplicabilityRuleType {
        Include => "include",
        Exclude => "exclude",
    }
}

graph_enum! {
    pub enum Windows10DeviceModeType {
        StandardConfiguration => "standardConfiguration",
        SModeConfiguration => "sModeConfiguration",
    }
}

graph_enum! {
    pub enum Windows10EditionType {
        Windows10Enterprise => "windows10Enterprise",
        Windows10EnterpriseN => "windows10EnterpriseN",
        Windows10Education => "windows10Education",
        Windows10EducationN => "windows10EducationN",
        Windows10MobileEnterprise => "windows10MobileEnterprise",
        Windows10HolographicEnterprise => "windows10HolographicEnterprise",
        Windows10Professional => "windows10Professional",
        Windows10ProfessionalN => "windows10ProfessionalN",
        Windows10ProfessionalEducation => "windows10ProfessionalEducation",
        Windows10ProfessionalEducationN => "windows10ProfessionalEducationN",
        Windows10ProfessionalWorkstation => "windows10ProfessionalWorkstation",
        Windows10ProfessionalWorkstationN => "windows10ProfessionalWorkstationN",
        NotConfigured => "notConfigured",
        Windows10Home => "windows10Home",
        Windows10HomeChina => "windows10HomeChina",
        Windows10HomeN => "windows10HomeN",
        Windows10HomeSingleLanguage => "windows10HomeSingleLanguage",
        Windows10Mobile => "windows10Mobile",
        Windows10IoTCore => "windows10IoTCore",
        Windows10IoTCoreCommercial => "windows10IoTCoreCommercial",
    }
}

graph_enum! {
    pub enum ComplianceStatus {
        Unknown => "unknown",
        NotApplicable => "notApplicable",
        Compliant => "compliant",
        Remediated => "remediated",
        NonCompliant => "nonCompliant",
        Error => "error",
        Conflict => "conflict",
        NotAssigned => "notAssigned",
    }
}

graph_enum! {
    pub enum DeviceManagementDerivedCredentialIssuer {
        Intercede => "intercede",
        EntrustDatacard => "entrustDatacard",
        Purebred => "purebred",
        XTec => "xTec",
    }
}

graph_flags! {
    pub struct DeviceManagementDerivedCredentialNotificationType {
        const NONE = 1 => "none";
        const COMPANY_PORTAL = 2 => "companyPortal";
        const EMAIL = 4 => "email";
    }
}

// Certificates

graph_enum! {
    pub enum CertificateValidityPeriodScale {
        Days => "days",
        Months => "months",
        Years => "years",
    }
}

graph_enum! {
    pub enum SubjectNameFormat {
        CommonName => "commonName",
        CommonNameIncludingEmail => "commonNameIncludingEmail",
        CommonNameAsEmail => "commonNameAsEmail",
        Custom => "custom",
        CommonNameAsImei => "commonNameAsIMEI",
        CommonNameAsSerialNumber => "commonNameAsSerialNumber",
        CommonNameAsAadDeviceId => "commonNameAsAadDeviceId",
        CommonNameAsIntuneDeviceId => "commonNameAsIntuneDeviceId",
        CommonNameAsDurableDeviceId => "commonNameAsDurableDeviceId",
    }
}

graph_enum! {
    pub enum AppleSubjectNameFormat {
        CommonName => "commonName",
        CommonNameAsEmail => "commonNameAsEmail",
        Custom => "custom",
        CommonNameIncludingEmail => "commonNameIncludingEmail",
        CommonNameAsImei => "commonNameAsIMEI",
        CommonNameAsSerialNumber => "commonNameAsSerialNumber",
    }
}

graph_flags! {
    pub struct SubjectAlternativeNameType {
        const NONE = 1 => "none";
        const EMAIL_ADDRESS = 2 => "emailAddress";
        const USER_PRINCIPAL_NAME = 4 => "userPrincipalName";
        const CUSTOM_AZURE_AD_ATTRIBUTE = 8 => "customAzureADAttribute";
        const DOMAIN_NAME_SERVICE = 16 => "domainNameService";
        const UNIVERSAL_RESOURCE_IDENTIFIER = 32 => "universalResourceIdentifier";
    }
}

graph_enum! {
    pub enum KeyStorageProviderOption {
        UseTpmKspOtherwiseUseSoftwareKsp => "useTpmKspOtherwiseUseSoftwareKsp",
        UseTpmKspOtherwiseFail => "useTpmKspOtherwiseFail",
        UsePassportForWorkKspOtherwiseFail => "usePassportForWorkKspOtherwiseFail",
        UseSoftwareKsp => "useSoftwareKsp",
    }
}

// VPN

graph_enum! {
    pub enum VpnAuthenticationMethod {
        Certificate => "certificate",
        UsernameAndPassword => "usernameAndPassword",
        SharedSecret => "sharedSecret",
        DerivedCredential => "derivedCredential",
        AzureAd => "azureAD",
    }
}

graph_enum! {
    pub enum AndroidVpnConnectionType {
        CiscoAnyConnect => "ciscoAnyConnect",
        PulseSecure => "pulseSecure",
        F5EdgeClient => "f5EdgeClient",
        DellSonicWallMobileConnect => "dellSonicWallMobileConnect",
        CheckPointCapsuleVpn => "checkPointCapsuleVpn",
        Citrix => "citrix",
        MicrosoftTunnel => "microsoftTunnel",
        NetMotionMobility => "netMotionMobility",
        MicrosoftProtect => "microsoftProtect",
    }
}

graph_enum! {
    pub enum AppleVpnConnectionType {
        CiscoAnyConnect => "ciscoAnyConnect",
        PulseSecure => "pulseSecure",
        F5EdgeClient => "f5EdgeClient",
        DellSonicWallMobileConnect => "dellSonicWallMobileConnect",
        CheckPointCapsuleVpn => "checkPointCapsuleVpn",
        CustomVpn => "customVpn",
        CiscoIpSec => "ciscoIPSec",
        Citrix => "citrix",
        CiscoAnyConnectV2 => "ciscoAnyConnectV2",
        PaloAltoGlobalProtect => "paloAltoGlobalProtect",
        ZscalerPrivateAccess => "zscalerPrivateAccess",
        F5Access2018 => "f5Access2018",
        CitrixSso => "citrixSso",
        PaloAltoGlobalProtectV2 => "paloAltoGlobalProtectV2",
        IkEv2 => "ikEv2",
        AlwaysOn => "alwaysOn",
        MicrosoftTunnel => "microsoftTunnel",
        NetMotionMobility => "netMotionMobility",
        MicrosoftProtect => "microsoftProtect",
    }
}

graph_enum! {
    pub enum VpnProviderType {
        NotConfigured => "notConfigured",
        AppProxy => "appProxy",
        PacketTunnel => "packetTunnel",
    }
}

graph_enum! {
    pub enum Windows10VpnAuthenticationMethod {
        Certificate => "certificate",
        UsernameAndPassword => "usernameAndPassword",
        CustomEapXml => "customEapXml",
        DerivedCredential => "derivedCredential",
    }
}

graph_enum! {
    pub enum Windows10VpnConnectionType {
        PulseSecure => "pulseSecure",
        F5EdgeClient => "f5EdgeClient",
        DellSonicWallMobileConnect => "dellSonicWallMobileConnect",
        CheckPointCapsuleVpn => "checkPointCapsuleVpn",
        Automatic => "automatic",
        IkEv2 => "ikEv2",
        L2tp => "l2tp",
        Pptp => "pptp",
        Citrix => "citrix",
        PaloAltoGlobalProtect => "paloAltoGlobalProtect",
        CiscoAnyConnect => "ciscoAnyConnect",
        UnknownFutureValue => "unknownFutureValue",
        MicrosoftTunnel => "microsoftTunnel",
    }
}

graph_enum! {
    pub enum Windows10VpnProfileTarget {
        User => "user",
        Device => "device",
        AutoPilotDevice => "autoPilotDevice",
    }
}

graph_enum! {
    pub enum Windows10AppType {
        Desktop => "desktop",
        Universal => "universal",
    }
}

graph_enum! {
    pub enum VpnTrafficRuleAppType {
        None => "none",
        Desktop => "desktop",
        Universal => "universal",
    }
}

graph_enum! {
    pub enum VpnTrafficRuleRoutingPolicyType {
        None => "none",
        SplitTunnel => "splitTunnel",
        ForceTunnel => "forceTunnel",
    }
}

graph_enum! {
    pub enum VpnOnDemandRuleConnectionAction {
        Connect => "connect",
        EvaluateConnection => "evaluateConnection",
        Ignore => "ignore",
        Disconnect => "disconnect",
    }
}

graph_enum! {
    pub enum VpnOnDemandRuleConnectionDomainAction {
        ConnectIfNeeded => "connectIfNeeded",
        NeverConnect => "neverConnect",
    }
}

graph_enum! {
    pub enum VpnOnDemandRuleInterfaceTypeMatch {
        NotConfigured => "notConfigured",
        Ethernet => "ethernet",
        WiFi => "wiFi",
        Cellular => "cellular",
    }
}

graph_enum! {
    pub enum AuthenticationTransformConstant {
        Md5Bit96 => "md5_96",
        Sha1Bit96 => "sha1_96",
        Sha256Bit128 => "sha_256_128",
        Aes128Gcm => "aes128Gcm",
        Aes192Gcm => "aes192Gcm",
        Aes256Gcm => "aes256Gcm",
    }
}

graph_enum! {
    pub enum VpnEncryptionAlgorithmType {
        Aes256 => "aes256",
        Des => "des",
        TripleDes => "tripleDes",
        Aes128 => "aes128",
        Aes128Gcm => "aes128Gcm",
        Aes256Gcm => "aes256Gcm",
        Aes192 => "aes192",
        Aes192Gcm => "aes192Gcm",
        ChaCha20Poly1305 => "chaCha20Poly1305",
    }
}

graph_enum! {
    pub enum VpnIntegrityAlgorithmType {
        Sha256 => "sha2_256",
        Sha1Bit96 => "sha1_96",
        Sha1Bit160 => "sha1_160",
        Sha384 => "sha2_384",
        Sha512 => "sha2_512",
        Md5 => "md5",
    }
}

graph_enum! {
    pub enum DiffieHellmanGroup {
        Group1 => "group1",
        Group2 => "group2",
        Group14 => "group14",
        Ecp256 => "ecp256",
        Ecp384 => "ecp384",
        Group24 => "group24",
    }
}

graph_enum! {
    pub enum PerfectForwardSecrecyGroup {
        Pfs1 => "pfs1",
        Pfs2 => "pfs2",
        Pfs2048 => "pfs2048",
        Ecp256 => "ecp256",
        Ecp384 => "ecp384",
        PfsMm => "pfsMM",
        Pfs24 => "pfs24",
    }
}

// Wi-Fi

graph_enum! {
    pub enum WiFiSecurityType {
        Open => "open",
        WpaPersonal => "wpaPersonal",
        WpaEnterprise => "wpaEnterprise",
        Wep => "wep",
        Wpa2Personal => "wpa2Personal",
        Wpa2Enterprise => "wpa2Enterprise",
    }
}

graph_enum! {
    pub enum WiFiProxySetting {
        None => "none",
        Manual => "manual",
        Automatic => "automatic",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum WiFiAuthenticationMethod {
        Certificate => "certificate",
        UsernameAndPassword => "usernameAndPassword",
        DerivedCredential => "derivedCredential",
    }
}

graph_enum! {
    pub enum EapFastConfiguration {
        NoProtectedAccessCredential => "noProtectedAccessCredential",
        UseProtectedAccessCredential => "useProtectedAccessCredential",
        UseProtectedAccessCredentialAndProvision => "useProtectedAccessCredentialAndProvision",
        UseProtectedAccessCredentialAndProvisionAnonymously => "useProtectedAccessCredentialAndProvisionAnonymously",
    }
}

graph_enum! {
    pub enum EapType {
        EapTls => "eapTls",
        Leap => "leap",
        EapSim => "eapSim",
        EapTtls => "eapTtls",
        Peap => "peap",
        EapFast => "eapFast",
        Teap => "teap",
    }
}

graph_enum! {
    pub enum NonEapAuthenticationMethodForEapTtlsType {
        UnencryptedPassword => "unencryptedPassword",
        ChallengeHandshakeAuthenticationProtocol => "challengeHandshakeAuthenticationProtocol",
        MicrosoftChap => "microsoftChap",
        MicrosoftChapVersionTwo => "microsoftChapVersionTwo",
    }
}

graph_enum! {
    pub enum MeteredConnectionLimitType {
        Unrestricted => "unrestricted",
        Fixed => "fixed",
        Variable => "variable",
    }
}

// Email

graph_enum! {
    pub enum EasAuthenticationMethod {
        UsernameAndPassword => "usernameAndPassword",
        Certificate => "certificate",
        DerivedCredential => "derivedCredential",
    }
}

graph_enum! {
    pub enum EmailSyncDuration {
        UserDefined => "userDefined",
        OneDay => "oneDay",
        ThreeDays => "threeDays",
        OneWeek => "oneWeek",
        TwoWeeks => "twoWeeks",
        OneMonth => "oneMonth",
        Unlimited => "unlimited",
    }
}

graph_enum! {
    pub enum EmailSyncSchedule {
        UserDefined => "userDefined",
        AsMessagesArrive => "asMessagesArrive",
        Manual => "manual",
        FifteenMinutes => "fifteenMinutes",
        ThirtyMinutes => "thirtyMinutes",
        SixtyMinutes => "sixtyMinutes",
        BasedOnMyUsage => "basedOnMyUsage",
    }
}

graph_enum! {
    pub enum UserEmailSource {
        UserPrincipalName => "userPrincipalName",
        PrimarySmtpAddress => "primarySmtpAddress",
    }
}

graph_enum! {
    pub enum UsernameSource {
        UserPrincipalName => "userPrincipalName",
        PrimarySmtpAddress => "primarySmtpAddress",
        SamAccountName => "samAccountName",
    }
}

graph_enum! {
    pub enum AndroidUsernameSource {
        Username => "username",
        UserPrincipalName => "userPrincipalName",
        SamAccountName => "samAccountName",
        PrimarySmtpAddress => "primarySmtpAddress",
    }
}

graph_enum! {
    pub enum DomainNameSource {
        FullDomainName => "fullDomainName",
        NetBiosDomainName => "netBiosDomainName",
    }
}

graph_enum! {
    pub enum EmailCertificateType {
        None => "none",
        Certificate => "certificate",
        DerivedCredential => "derivedCredential",
    }
}

graph_flags! {
    pub struct EasServices {
        const NONE = 1 => "none";
        const CALENDARS = 2 => "calendars";
        const CONTACTS = 4 => "contacts";
        const EMAIL = 8 => "email";
        const NOTES = 16 => "notes";
        const REMINDERS = 32 => "reminders";
    }
}

// Site pages

graph_enum! {
    pub enum PageLayoutType {
        MicrosoftReserved => "microsoftReserved",
        Article => "article",
        Home => "home",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum PagePromotionType {
        MicrosoftReserved => "microsoftReserved",
        Page => "page",
        NewsPost => "newsPost",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum TitleAreaLayoutType {
        ImageAndTitle => "imageAndTitle",
        Plain => "plain",
        ColorBlock => "colorBlock",
        Overlap => "overlap",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum TitleAreaTextAlignmentType {
        Left => "left",
        Center => "center",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum SectionEmphasisType {
        None => "none",
        /// Misspelled by the service; kept as is.
        Neutral => "netural",
        Soft => "soft",
        Strong => "strong",
        UnknownFutureValue => "unknownFutureValue",
    }
}

graph_enum! {
    pub enum HorizontalSectionLayoutType {
        None => "none",
        OneColumn => "oneColumn",
        TwoColumns => "twoColumns",
        ThreeColumns => "threeColumns",
        OneThirdLeftColumn => "oneThirdLeftColumn",
        OneThirdRightColumn => "oneThirdRightColumn",
        FullWidth => "fullWidth",
        UnknownFutureValue => "unknownFutureValue",
    }
}
