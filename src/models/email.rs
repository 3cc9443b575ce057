//! Exchange ActiveSync email profiles.

use super::certificates::{AndroidCertificateProfileBase, IosCertificateProfile, IosCertificateProfileBase};
use super::device_configuration::{DeviceConfiguration, DeviceManagementDerivedCredentialSettings};
use super::enums::{
    AndroidUsernameSource, DomainNameSource, EasAuthenticationMethod, EasServices,
    EmailCertificateType, EmailSyncDuration, EmailSyncSchedule, UserEmailSource, UsernameSource,
};

graph_model! {
    pub struct EasEmailProfileConfigurationBase("#microsoft.graph.easEmailProfileConfigurationBase"): DeviceConfiguration {
        custom_domain_name / set_custom_domain_name: String => "customDomainName",
        user_domain_name_source / set_user_domain_name_source: DomainNameSource => "userDomainNameSource",
        username_aad_source / set_username_aad_source: UsernameSource => "usernameAADSource",
        username_source / set_username_source: UserEmailSource => "usernameSource",
    }
}

graph_model! {
    pub struct IosEasEmailProfileConfiguration("#microsoft.graph.iosEasEmailProfileConfiguration"): EasEmailProfileConfigurationBase {
        account_name / set_account_name: String => "accountName",
        authentication_method / set_authentication_method: EasAuthenticationMethod => "authenticationMethod",
        block_moving_messages_to_other_email_accounts / set_block_moving_messages_to_other_email_accounts:
            bool => "blockMovingMessagesToOtherEmailAccounts",
        block_sending_email_from_third_party_apps / set_block_sending_email_from_third_party_apps:
            bool => "blockSendingEmailFromThirdPartyApps",
        block_syncing_recently_used_email_addresses / set_block_syncing_recently_used_email_addresses:
            bool => "blockSyncingRecentlyUsedEmailAddresses",
        derived_credential_settings / set_derived_credential_settings:
            DeviceManagementDerivedCredentialSettings => "derivedCredentialSettings",
        duration_of_email_to_sync / set_duration_of_email_to_sync: EmailSyncDuration => "durationOfEmailToSync",
        eas_services / set_eas_services: EasServices => "easServices",
        eas_services_user_override_enabled / set_eas_services_user_override_enabled: bool => "easServicesUserOverrideEnabled",
        email_address_source / set_email_address_source: UserEmailSource => "emailAddressSource",
        encryption_certificate_type / set_encryption_certificate_type: EmailCertificateType => "encryptionCertificateType",
        host_name / set_host_name: String => "hostName",
        identity_certificate / set_identity_certificate: IosCertificateProfileBase => "identityCertificate",
        per_app_vpn_profile_id / set_per_app_vpn_profile_id: String => "perAppVPNProfileId",
        require_smime / set_require_smime: bool => "requireSmime",
        require_ssl / set_require_ssl: bool => "requireSsl",
        signing_certificate_type / set_signing_certificate_type: EmailCertificateType => "signingCertificateType",
        smime_enable_per_message_switch / set_smime_enable_per_message_switch: bool => "smimeEnablePerMessageSwitch",
        smime_encrypt_by_default_enabled / set_smime_encrypt_by_default_enabled: bool => "smimeEncryptByDefaultEnabled",
        smime_encrypt_by_default_user_override_enabled / set_smime_encrypt_by_default_user_override_enabled:
            bool => "smimeEncryptByDefaultUserOverrideEnabled",
        smime_encryption_certificate / set_smime_encryption_certificate: IosCertificateProfile => "smimeEncryptionCertificate",
        smime_encryption_certificate_user_override_enabled / set_smime_encryption_certificate_user_override_enabled:
            bool => "smimeEncryptionCertificateUserOverrideEnabled",
        smime_signing_certificate / set_smime_signing_certificate: IosCertificateProfile => "smimeSigningCertificate",
        smime_signing_certificate_user_override_enabled / set_smime_signing_certificate_user_override_enabled:
            bool => "smimeSigningCertificateUserOverrideEnabled",
        smime_signing_enabled / set_smime_signing_enabled: bool => "smimeSigningEnabled",
        smime_signing_user_override_enabled / set_smime_signing_user_override_enabled: bool => "smimeSigningUserOverrideEnabled",
        use_o_auth / set_use_o_auth: bool => "useOAuth",
    }
}

graph_model! {
    pub struct AndroidEasEmailProfileConfiguration("#microsoft.graph.androidEasEmailProfileConfiguration"): DeviceConfiguration {
        account_name / set_account_name: String => "accountName",
        authentication_method / set_authentication_method: EasAuthenticationMethod => "authenticationMethod",
        custom_domain_name / set_custom_domain_name: String => "customDomainName",
        duration_of_email_to_sync / set_duration_of_email_to_sync: EmailSyncDuration => "durationOfEmailToSync",
        email_address_source / set_email_address_source: UserEmailSource => "emailAddressSource",
        email_sync_schedule / set_email_sync_schedule: EmailSyncSchedule => "emailSyncSchedule",
        host_name / set_host_name: String => "hostName",
        identity_certificate / set_identity_certificate: AndroidCertificateProfileBase => "identityCertificate",
        require_smime / set_require_smime: bool => "requireSmime",
        require_ssl / set_require_ssl: bool => "requireSsl",
        smime_signing_certificate / set_smime_signing_certificate: AndroidCertificateProfileBase => "smimeSigningCertificate",
        sync_calendar / set_sync_calendar: bool => "syncCalendar",
        sync_contacts / set_sync_contacts: bool => "syncContacts",
        sync_notes / set_sync_notes: bool => "syncNotes",
        sync_tasks / set_sync_tasks: bool => "syncTasks",
        user_domain_name_source / set_user_domain_name_source: DomainNameSource => "userDomainNameSource",
        username_source / set_username_source: AndroidUsernameSource => "usernameSource",
    }
}
