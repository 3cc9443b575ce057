//! Modern SharePoint pages: layout, sections and web parts.

use super::entity::Entity;
use super::enums::{
    HorizontalSectionLayoutType, PageLayoutType, PagePromotionType, SectionEmphasisType,
    TitleAreaLayoutType, TitleAreaTextAlignmentType,
};
use super::sites::{BaseItem, IdentitySet};

graph_model! {
    pub struct SitePage("#microsoft.graph.sitePage"): BaseItem {
        canvas_layout / set_canvas_layout: CanvasLayout => "canvasLayout",
        content_type / set_content_type: ContentTypeInfo => "contentType",
        page_layout / set_page_layout: PageLayoutType => "pageLayout",
        promotion_kind / set_promotion_kind: PagePromotionType => "promotionKind",
        publishing_state / set_publishing_state: PublicationFacet => "publishingState",
        reactions / set_reactions: ReactionsFacet => "reactions",
        show_comments / set_show_comments: bool => "showComments",
        show_recommended_pages / set_show_recommended_pages: bool => "showRecommendedPages",
        thumbnail_web_url / set_thumbnail_web_url: String => "thumbnailWebUrl",
        title / set_title: String => "title",
        title_area / set_title_area: TitleArea => "titleArea",
        web_parts / set_web_parts: Vec<WebPartKind> => "webParts",
    }
}

graph_model! {
    pub struct ContentTypeInfo("#microsoft.graph.contentTypeInfo") {
        id / set_id: String => "id",
        name / set_name: String => "name",
    }
}

graph_model! {
    pub struct PublicationFacet("#microsoft.graph.publicationFacet") {
        checked_out_by / set_checked_out_by: IdentitySet => "checkedOutBy",
        /// `published` or `checkout`.
        level / set_level: String => "level",
        version_id / set_version_id: String => "versionId",
    }
}

graph_model! {
    pub struct ReactionsFacet("#microsoft.graph.reactionsFacet") {
        comment_count / set_comment_count: i32 => "commentCount",
        like_count / set_like_count: i32 => "likeCount",
        share_count / set_share_count: i32 => "shareCount",
    }
}

graph_model! {
    pub struct TitleArea("#microsoft.graph.titleArea") {
        alternative_text / set_alternative_text: String => "alternativeText",
        enable_gradient_effect / set_enable_gradient_effect: bool => "enableGradientEffect",
        image_web_url / set_image_web_url: String => "imageWebUrl",
        layout / set_layout: TitleAreaLayoutType => "layout",
        server_processed_content / set_server_processed_content: ServerProcessedContent => "serverProcessedContent",
        show_author / set_show_author: bool => "showAuthor",
        show_published_date / set_show_published_date: bool => "showPublishedDate",
        show_text_block_above_title / set_show_text_block_above_title: bool => "showTextBlockAboveTitle",
        text_above_title / set_text_above_title: String => "textAboveTitle",
        text_alignment / set_text_alignment: TitleAreaTextAlignmentType => "textAlignment",
    }
}

graph_model! {
    /// Content the server renders for a web part or title area.
    pub struct ServerProcessedContent("#microsoft.graph.serverProcessedContent") {
        component_dependencies / set_component_dependencies: Vec<MetaDataKeyStringPair> => "componentDependencies",
        custom_metadata / set_custom_metadata: Vec<MetaDataKeyValuePair> => "customMetadata",
        html_strings / set_html_strings: Vec<MetaDataKeyStringPair> => "htmlStrings",
        image_sources / set_image_sources: Vec<MetaDataKeyStringPair> => "imageSources",
        links / set_links: Vec<MetaDataKeyStringPair> => "links",
        searchable_plain_texts / set_searchable_plain_texts: Vec<MetaDataKeyStringPair> => "searchablePlainTexts",
    }
}

graph_model! {
    pub struct MetaDataKeyStringPair("#microsoft.graph.metaDataKeyStringPair") {
        key / set_key: String => "key",
        value / set_value: String => "value",
    }
}

graph_model! {
    pub struct MetaDataKeyValuePair("#microsoft.graph.metaDataKeyValuePair") {
        key / set_key: String => "key",
        /// Untyped; any JSON value.
        value / set_value: serde_json::Value => "value",
    }
}

graph_model! {
    pub struct CanvasLayout("#microsoft.graph.canvasLayout"): Entity {
        horizontal_sections / set_horizontal_sections: Vec<HorizontalSection> => "horizontalSections",
        vertical_section / set_vertical_section: VerticalSection => "verticalSection",
    }
}

graph_model! {
    pub struct HorizontalSection("#microsoft.graph.horizontalSection"): Entity {
        columns / set_columns: Vec<HorizontalSectionColumn> => "columns",
        emphasis / set_emphasis: SectionEmphasisType => "emphasis",
        layout / set_layout: HorizontalSectionLayoutType => "layout",
    }
}

graph_model! {
    pub struct HorizontalSectionColumn("#microsoft.graph.horizontalSectionColumn"): Entity {
        webparts / set_webparts: Vec<WebPartKind> => "webparts",
        /// Share of the section, in twelfths.
        width / set_width: i32 => "width",
    }
}

graph_model! {
    pub struct VerticalSection("#microsoft.graph.verticalSection"): Entity {
        emphasis / set_emphasis: SectionEmphasisType => "emphasis",
        webparts / set_webparts: Vec<WebPartKind> => "webparts",
    }
}

graph_model! {
    pub struct WebPart("#microsoft.graph.webPart"): Entity {}
}

graph_model! {
    pub struct TextWebPart("#microsoft.graph.textWebPart"): WebPart {
        inner_html / set_inner_html: String => "innerHtml",
    }
}

graph_model! {
    pub struct StandardWebPart("#microsoft.graph.standardWebPart"): WebPart {
        data / set_data: WebPartData => "data",
        /// Identifier of the web part's component, a GUID.
        web_part_type / set_web_part_type: String => "webPartType",
    }
}

graph_model! {
    pub struct WebPartData("#microsoft.graph.webPartData") {
        audiences / set_audiences: Vec<String> => "audiences",
        data_version / set_data_version: String => "dataVersion",
        description / set_description: String => "description",
        properties / set_properties: serde_json::Value => "properties",
        server_processed_content / set_server_processed_content: ServerProcessedContent => "serverProcessedContent",
        title / set_title: String => "title",
    }
}

graph_family! {
    pub enum WebPartKind: WebPart {
        Text(TextWebPart),
        Standard(StandardWebPart),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use graph_serialization::{create_from_bytes, serialize_content};
    use serde_json::{json, Value};

    #[test]
    fn test_canvas_layout_with_mixed_web_parts() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.canvasLayout",
            "horizontalSections": [{
                "@odata.type": "#microsoft.graph.horizontalSection",
                "id": "1",
                "layout": "twoColumns",
                "emphasis": "netural",
                "columns": [{
                    "@odata.type": "#microsoft.graph.horizontalSectionColumn",
                    "id": "1",
                    "width": 6,
                    "webparts": [
                        {"@odata.type": "#microsoft.graph.textWebPart", "id": "t", "innerHtml": "<p>Hi</p>"},
                        {
                            "@odata.type": "#microsoft.graph.standardWebPart",
                            "id": "s",
                            "webPartType": "d1d91016-032f-456d-98a4-721247c305e8",
                            "data": {
                                "@odata.type": "#microsoft.graph.webPartData",
                                "dataVersion": "1.9",
                                "properties": {"imageSourceType": 2, "altText": ""}
                            }
                        },
                        {"@odata.type": "#microsoft.graph.someFutureWebPart", "id": "f", "payload": 1}
                    ]
                }]
            }]
        });
        let layout = create_from_bytes(
            payload.to_string().as_bytes(),
            CanvasLayout::create_from_discriminator_value,
        )
        .unwrap();

        let section = &layout.horizontal_sections().unwrap()[0];
        assert_eq!(section.layout(), Some(&HorizontalSectionLayoutType::TwoColumns));
        assert_eq!(section.emphasis(), Some(&SectionEmphasisType::Neutral));
        let parts = section.columns().unwrap()[0].webparts().unwrap();
        assert!(matches!(&parts[0], WebPartKind::Text(t) if t.inner_html().map(String::as_str) == Some("<p>Hi</p>")));
        match &parts[1] {
            WebPartKind::Standard(part) => {
                let data = part.data().unwrap();
                assert_eq!(data.properties().unwrap()["imageSourceType"], json!(2));
            }
            other => panic!("unexpected web part {other:?}"),
        }
        assert!(matches!(&parts[2], WebPartKind::Base(_)));
        assert_eq!(parts[2].id().map(String::as_str), Some("f"));

        let content = serialize_content(&layout).unwrap();
        assert_eq!(serde_json::from_slice::<Value>(&content).unwrap(), payload);
    }

    #[test]
    fn test_build_page_from_setters() {
        let mut title_area = TitleArea::new();
        title_area.set_layout(Some(TitleAreaLayoutType::ColorBlock));
        title_area.set_show_author(Some(false));

        let mut text = TextWebPart::new();
        text.set_id(Some("wp-1".to_string()));
        text.set_inner_html(Some("<h2>News</h2>".to_string()));

        let mut page = SitePage::new();
        page.set_name(Some("news.aspx".to_string()));
        page.set_title(Some("News".to_string()));
        page.set_page_layout(Some(PageLayoutType::Article));
        page.set_promotion_kind(Some(PagePromotionType::NewsPost));
        page.set_title_area(Some(title_area));
        page.set_web_parts(Some(vec![text.into()]));

        let content = serialize_content(&page).unwrap();
        assert_eq!(
            serde_json::from_slice::<Value>(&content).unwrap(),
            json!({
                "@odata.type": "#microsoft.graph.sitePage",
                "name": "news.aspx",
                "title": "News",
                "pageLayout": "article",
                "promotionKind": "newsPost",
                "titleArea": {
                    "@odata.type": "#microsoft.graph.titleArea",
                    "layout": "colorBlock",
                    "showAuthor": false
                },
                "webParts": [{
                    "@odata.type": "#microsoft.graph.textWebPart",
                    "id": "wp-1",
                    "innerHtml": "<h2>News</h2>"
                }]
            })
        );

        let reparsed =
            create_from_bytes(&content, SitePage::create_from_discriminator_value).unwrap();
        assert_eq!(reparsed, page);
    }
}
