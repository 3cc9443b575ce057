//! SharePoint sites and the base item every site resource derives from.

use chrono::{DateTime, Utc};

use super::entity::Entity;
use super::pages::SitePage;

graph_model! {
    pub struct Identity("#microsoft.graph.identity") {
        display_name / set_display_name: String => "displayName",
        id / set_id: String => "id",
    }
}

graph_model! {
    pub struct IdentitySet("#microsoft.graph.identitySet") {
        application / set_application: Identity => "application",
        device / set_device: Identity => "device",
        user / set_user: Identity => "user",
    }
}

graph_model! {
    pub struct SharepointIds("#microsoft.graph.sharepointIds") {
        list_id / set_list_id: String => "listId",
        list_item_id / set_list_item_id: String => "listItemId",
        list_item_unique_id / set_list_item_unique_id: String => "listItemUniqueId",
        site_id / set_site_id: String => "siteId",
        site_url / set_site_url: String => "siteUrl",
        tenant_id / set_tenant_id: String => "tenantId",
        web_id / set_web_id: String => "webId",
    }
}

graph_model! {
    pub struct ItemReference("#microsoft.graph.itemReference") {
        drive_id / set_drive_id: String => "driveId",
        drive_type / set_drive_type: String => "driveType",
        id / set_id: String => "id",
        name / set_name: String => "name",
        path / set_path: String => "path",
        share_id / set_share_id: String => "shareId",
        sharepoint_ids / set_sharepoint_ids: SharepointIds => "sharepointIds",
        site_id / set_site_id: String => "siteId",
    }
}

graph_model! {
    pub struct SiteCollection("#microsoft.graph.siteCollection") {
        data_location_code / set_data_location_code: String => "dataLocationCode",
        hostname / set_hostname: String => "hostname",
        /// Present (as an empty object) only on root site collections.
        root / set_root: serde_json::Value => "root",
    }
}

graph_model! {
    pub struct BaseItem("#microsoft.graph.baseItem"): Entity {
        created_by / set_created_by: IdentitySet => "createdBy",
        created_date_time / set_created_date_time: DateTime<Utc> => "createdDateTime",
        description / set_description: String => "description",
        e_tag / set_e_tag: String => "eTag",
        last_modified_by / set_last_modified_by: IdentitySet => "lastModifiedBy",
        last_modified_date_time / set_last_modified_date_time: DateTime<Utc> => "lastModifiedDateTime",
        name / set_name: String => "name",
        parent_reference / set_parent_reference: ItemReference => "parentReference",
        web_url / set_web_url: String => "webUrl",
    }
}

graph_model! {
    pub struct Site("#microsoft.graph.site"): BaseItem {
        display_name / set_display_name: String => "displayName",
        pages / set_pages: Vec<SitePage> => "pages",
        root / set_root: serde_json::Value => "root",
        sharepoint_ids / set_sharepoint_ids: SharepointIds => "sharepointIds",
        site_collection / set_site_collection: SiteCollection => "siteCollection",
    }
}

graph_family! {
    pub enum BaseItemKind: BaseItem {
        Site(Site),
        SitePage(SitePage),
    }
}

graph_model! {
    /// One page of `GET /sites/{id}/pages`.
    pub struct SitePageCollectionResponse("#microsoft.graph.sitePageCollectionResponse") {
        odata_count / set_odata_count: i64 => "@odata.count",
        odata_next_link / set_odata_next_link: String => "@odata.nextLink",
        value / set_value: Vec<SitePage> => "value",
    }
}
