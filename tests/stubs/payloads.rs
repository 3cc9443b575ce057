#![allow(dead_code)]
// Each integration test binary uses a different subset of these

pub const WINDOWS10_VPN: &str = r##"
{
    "@odata.type": "#microsoft.graph.windows10VpnConfiguration",
    "id": "b4a1c5de-0000-4000-8000-000000000001",
    "displayName": "Corp VPN",
    "createdDateTime": "2024-03-01T10:00:00Z",
    "lastModifiedDateTime": "2024-03-02T08:30:00Z",
    "version": 3,
    "roleScopeTagIds": ["0"],
    "supportsScopeTags": true,
    "connectionName": "Corp",
    "servers": [
        {
            "@odata.type": "#microsoft.graph.vpnServer",
            "address": "vpn.contoso.com",
            "description": "Primary",
            "isDefaultServer": true
        }
    ],
    "connectionType": "ikEv2",
    "authenticationMethod": "certificate",
    "profileTarget": "device",
    "enableSplitTunneling": true,
    "dnsSuffixes": ["corp.contoso.com"],
    "trafficRules": [
        {
            "@odata.type": "#microsoft.graph.vpnTrafficRule",
            "name": "rdp",
            "protocols": 6,
            "routingPolicyType": "splitTunnel",
            "appType": "none"
        }
    ],
    "assignments": [
        {
            "@odata.type": "#microsoft.graph.deviceConfigurationAssignment",
            "id": "a1",
            "intent": "apply",
            "source": "direct",
            "target": {
                "@odata.type": "#microsoft.graph.groupAssignmentTarget",
                "groupId": "g-123"
            }
        }
    ],
    "someBrandNewProperty": {"nested": [1, 2, 3]}
}
"##;

pub const SITE_PAGE: &str = r##"
{
    "@odata.type": "#microsoft.graph.sitePage",
    "id": "f9b6c2a1-0000-4000-8000-000000000002",
    "name": "Home.aspx",
    "title": "Home",
    "webUrl": "SitePages/Home.aspx",
    "pageLayout": "home",
    "promotionKind": "page",
    "createdDateTime": "2024-01-15T12:00:00Z",
    "createdBy": {
        "@odata.type": "#microsoft.graph.identitySet",
        "user": {
            "@odata.type": "#microsoft.graph.identity",
            "displayName": "Adele Vance"
        }
    },
    "canvasLayout": {
        "@odata.type": "#microsoft.graph.canvasLayout",
        "horizontalSections": [
            {
                "@odata.type": "#microsoft.graph.horizontalSection",
                "id": "1",
                "layout": "oneColumn",
                "emphasis": "none",
                "columns": [
                    {
                        "@odata.type": "#microsoft.graph.horizontalSectionColumn",
                        "id": "1",
                        "width": 12,
                        "webparts": [
                            {
                                "@odata.type": "#microsoft.graph.textWebPart",
                                "id": "wp-1",
                                "innerHtml": "<p>Welcome</p>"
                            }
                        ]
                    }
                ]
            }
        ]
    }
}
"##;

pub const UNKNOWN_DEVICE_CONFIGURATION: &str = r##"
{
    "@odata.type": "#microsoft.graph.windowsHealthMonitoringConfiguration",
    "id": "c0ffee00-0000-4000-8000-000000000003",
    "displayName": "Health monitoring",
    "version": 1,
    "allowDeviceHealthMonitoring": "enabled"
}
"##;

pub const BAD_ENUM: &str = r##"
{
    "@odata.type": "#microsoft.graph.windows10VpnConfiguration",
    "connectionType": "carrierPigeon"
}
"##;
