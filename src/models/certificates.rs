//! Certificate profile bases referenced by VPN, Wi-Fi and email profiles.

use graph_serialization::ByteArray;

use super::device_configuration::DeviceConfiguration;
use super::enums::{
    AppleSubjectNameFormat, CertificateValidityPeriodScale, KeyStorageProviderOption,
    SubjectAlternativeNameType, SubjectNameFormat,
};

graph_model! {
    pub struct ExtendedKeyUsage("#microsoft.graph.extendedKeyUsage") {
        name / set_name: String => "name",
        object_identifier / set_object_identifier: String => "objectIdentifier",
    }
}

graph_model! {
    pub struct AndroidCertificateProfileBase("#microsoft.graph.androidCertificateProfileBase"): DeviceConfiguration {
        certificate_validity_period_scale / set_certificate_validity_period_scale:
            CertificateValidityPeriodScale => "certificateValidityPeriodScale",
        certificate_validity_period_value / set_certificate_validity_period_value: i32 => "certificateValidityPeriodValue",
        extended_key_usages / set_extended_key_usages: Vec<ExtendedKeyUsage> => "extendedKeyUsages",
        /// 1-99.
        renewal_threshold_percentage / set_renewal_threshold_percentage: i32 => "renewalThresholdPercentage",
        subject_alternative_name_type / set_subject_alternative_name_type:
            SubjectAlternativeNameType => "subjectAlternativeNameType",
        subject_name_format / set_subject_name_format: SubjectNameFormat => "subjectNameFormat",
    }
}

graph_model! {
    pub struct IosCertificateProfile("#microsoft.graph.iosCertificateProfile"): DeviceConfiguration {}
}

graph_model! {
    pub struct IosCertificateProfileBase("#microsoft.graph.iosCertificateProfileBase"): IosCertificateProfile {
        certificate_validity_period_scale / set_certificate_validity_period_scale:
            CertificateValidityPeriodScale => "certificateValidityPeriodScale",
        certificate_validity_period_value / set_certificate_validity_period_value: i32 => "certificateValidityPeriodValue",
        extended_key_usages / set_extended_key_usages: Vec<ExtendedKeyUsage> => "extendedKeyUsages",
        renewal_threshold_percentage / set_renewal_threshold_percentage: i32 => "renewalThresholdPercentage",
        subject_alternative_name_type / set_subject_alternative_name_type:
            SubjectAlternativeNameType => "subjectAlternativeNameType",
        subject_name_format / set_subject_name_format: AppleSubjectNameFormat => "subjectNameFormat",
    }
}

graph_model! {
    pub struct IosTrustedRootCertificate("#microsoft.graph.iosTrustedRootCertificate"): DeviceConfiguration {
        cert_file_name / set_cert_file_name: String => "certFileName",
        trusted_root_certificate / set_trusted_root_certificate: ByteArray => "trustedRootCertificate",
    }
}

graph_model! {
    pub struct WindowsCertificateProfileBase("#microsoft.graph.windowsCertificateProfileBase"): DeviceConfiguration {
        certificate_validity_period_scale / set_certificate_validity_period_scale:
            CertificateValidityPeriodScale => "certificateValidityPeriodScale",
        certificate_validity_period_value / set_certificate_validity_period_value: i32 => "certificateValidityPeriodValue",
        key_storage_provider / set_key_storage_provider: KeyStorageProviderOption => "keyStorageProvider",
        renewal_threshold_percentage / set_renewal_threshold_percentage: i32 => "renewalThresholdPercentage",
        subject_alternative_name_type / set_subject_alternative_name_type:
            SubjectAlternativeNameType => "subjectAlternativeNameType",
        subject_name_format / set_subject_name_format: SubjectNameFormat => "subjectNameFormat",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use graph_serialization::{create_from_bytes, serialize_content};
    use serde_json::{json, Value};

    #[test]
    fn test_flags_field_round_trip() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.windowsCertificateProfileBase",
            "subjectAlternativeNameType": "emailAddress,userPrincipalName",
            "keyStorageProvider": "useTpmKspOtherwiseFail",
            "certificateValidityPeriodScale": "years",
            "certificateValidityPeriodValue": 1
        });
        let profile = create_from_bytes(
            payload.to_string().as_bytes(),
            WindowsCertificateProfileBase::create_from_discriminator_value,
        )
        .unwrap();

        let san = profile.subject_alternative_name_type().unwrap();
        assert!(san.contains(SubjectAlternativeNameType::EMAIL_ADDRESS));
        assert!(!san.contains(SubjectAlternativeNameType::DOMAIN_NAME_SERVICE));

        let content = serialize_content(&profile).unwrap();
        assert_eq!(serde_json::from_slice::<Value>(&content).unwrap(), payload);
    }

    #[test]
    fn test_trusted_root_bytes() {
        let payload = br#"{"certFileName": "root.cer", "trustedRootCertificate": "AQID"}"#;
        let cert = create_from_bytes(
            payload,
            IosTrustedRootCertificate::create_from_discriminator_value,
        )
        .unwrap();
        assert_eq!(
            cert.trusted_root_certificate(),
            Some(&ByteArray(vec![1, 2, 3]))
        );
        assert_eq!(
            cert.odata_type(),
            Some("#microsoft.graph.iosTrustedRootCertificate")
        );
    }

    #[test]
    fn test_bad_base64_is_a_field_error() {
        let payload = br#"{"trustedRootCertificate": "***"}"#;
        let err = create_from_bytes(
            payload,
            IosTrustedRootCertificate::create_from_discriminator_value,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("deserialization of field 'trustedRootCertificate' failed"));
    }
}
