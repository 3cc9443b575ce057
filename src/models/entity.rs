use std::ops::{Deref, DerefMut};

use graph_serialization::{
    AdditionalData, AdditionalDataHolder, FieldValue, ParseNode, ParseNodeExt, Parsable,
    SerializationError, SerializationWriter,
};

use super::device_configuration::{
    DeviceConfigurationAssignment, DeviceConfigurationDeviceOverview,
    DeviceConfigurationDeviceStatus, DeviceConfigurationKind, DeviceConfigurationUserOverview,
    DeviceConfigurationUserStatus, DeviceManagementDerivedCredentialSettings,
};
use super::pages::{
    CanvasLayout, HorizontalSection, HorizontalSectionColumn, VerticalSection, WebPartKind,
};
use super::sites::BaseItemKind;

graph_model! {
    /// Root of every addressable Graph resource.
    pub struct Entity("#microsoft.graph.entity") {
        id / set_id: String => "id",
    }
}

/// Any entity this crate models, picked by `@odata.type`.
///
/// Families are checked first, then the standalone entity types. A
/// discriminator nobody claims parses as a bare [`Entity`].
#[derive(Clone, Debug, PartialEq)]
pub enum EntityKind {
    Entity(Entity),
    DeviceConfiguration(DeviceConfigurationKind),
    BaseItem(BaseItemKind),
    WebPart(WebPartKind),
    DeviceConfigurationAssignment(DeviceConfigurationAssignment),
    DeviceConfigurationDeviceOverview(DeviceConfigurationDeviceOverview),
    DeviceConfigurationUserOverview(DeviceConfigurationUserOverview),
    DeviceConfigurationDeviceStatus(DeviceConfigurationDeviceStatus),
    DeviceConfigurationUserStatus(DeviceConfigurationUserStatus),
    DeviceManagementDerivedCredentialSettings(DeviceManagementDerivedCredentialSettings),
    CanvasLayout(CanvasLayout),
    HorizontalSection(HorizontalSection),
    HorizontalSectionColumn(HorizontalSectionColumn),
    VerticalSection(VerticalSection),
}

impl EntityKind {
    pub fn from_discriminator(odata_type: Option<&str>) -> Self {
        let Some(odata_type) = odata_type else {
            return Self::Entity(Entity::new());
        };
        if DeviceConfigurationKind::DISCRIMINATORS.contains(&odata_type) {
            return Self::DeviceConfiguration(DeviceConfigurationKind::from_discriminator(Some(
                odata_type,
            )));
        }
        if BaseItemKind::DISCRIMINATORS.contains(&odata_type) {
            return Self::BaseItem(BaseItemKind::from_discriminator(Some(odata_type)));
        }
        if WebPartKind::DISCRIMINATORS.contains(&odata_type) {
            return Self::WebPart(WebPartKind::from_discriminator(Some(odata_type)));
        }
        match odata_type {
            DeviceConfigurationAssignment::ODATA_TYPE => {
                Self::DeviceConfigurationAssignment(DeviceConfigurationAssignment::new())
            }
            DeviceConfigurationDeviceOverview::ODATA_TYPE => {
                Self::DeviceConfigurationDeviceOverview(DeviceConfigurationDeviceOverview::new())
            }
            DeviceConfigurationUserOverview::ODATA_TYPE => {
                Self::DeviceConfigurationUserOverview(DeviceConfigurationUserOverview::new())
            }
            DeviceConfigurationDeviceStatus::ODATA_TYPE => {
                Self::DeviceConfigurationDeviceStatus(DeviceConfigurationDeviceStatus::new())
            }
            DeviceConfigurationUserStatus::ODATA_TYPE => {
                Self::DeviceConfigurationUserStatus(DeviceConfigurationUserStatus::new())
            }
            DeviceManagementDerivedCredentialSettings::ODATA_TYPE => {
                Self::DeviceManagementDerivedCredentialSettings(
                    DeviceManagementDerivedCredentialSettings::new(),
                )
            }
            CanvasLayout::ODATA_TYPE => Self::CanvasLayout(CanvasLayout::new()),
            HorizontalSection::ODATA_TYPE => Self::HorizontalSection(HorizontalSection::new()),
            HorizontalSectionColumn::ODATA_TYPE => {
                Self::HorizontalSectionColumn(HorizontalSectionColumn::new())
            }
            VerticalSection::ODATA_TYPE => Self::VerticalSection(VerticalSection::new()),
            other => {
                log::debug!("no model for discriminator '{other}', parsing as entity");
                Self::Entity(Entity::new())
            }
        }
    }

    pub fn create_from_discriminator_value(node: &dyn ParseNode) -> Result<Self, SerializationError> {
        let odata_type = match node.get_child_node("@odata.type")? {
            Some(child) => child.get_string_value()?,
            None => None,
        };
        Ok(Self::from_discriminator(odata_type.as_deref()))
    }

    fn as_parsable(&self) -> &dyn Parsable {
        match self {
            Self::Entity(v) => v,
            Self::DeviceConfiguration(v) => v,
            Self::BaseItem(v) => v,
            Self::WebPart(v) => v,
            Self::DeviceConfigurationAssignment(v) => v,
            Self::DeviceConfigurationDeviceOverview(v) => v,
            Self::DeviceConfigurationUserOverview(v) => v,
            Self::DeviceConfigurationDeviceStatus(v) => v,
            Self::DeviceConfigurationUserStatus(v) => v,
            Self::DeviceManagementDerivedCredentialSettings(v) => v,
            Self::CanvasLayout(v) => v,
            Self::HorizontalSection(v) => v,
            Self::HorizontalSectionColumn(v) => v,
            Self::VerticalSection(v) => v,
        }
    }

    fn as_parsable_mut(&mut self) -> &mut dyn Parsable {
        match self {
            Self::Entity(v) => v,
            Self::DeviceConfiguration(v) => v,
            Self::BaseItem(v) => v,
            Self::WebPart(v) => v,
            Self::DeviceConfigurationAssignment(v) => v,
            Self::DeviceConfigurationDeviceOverview(v) => v,
            Self::DeviceConfigurationUserOverview(v) => v,
            Self::DeviceConfigurationDeviceStatus(v) => v,
            Self::DeviceConfigurationUserStatus(v) => v,
            Self::DeviceManagementDerivedCredentialSettings(v) => v,
            Self::CanvasLayout(v) => v,
            Self::HorizontalSection(v) => v,
            Self::HorizontalSectionColumn(v) => v,
            Self::VerticalSection(v) => v,
        }
    }
}

impl Deref for EntityKind {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        match self {
            Self::Entity(v) => v,
            Self::DeviceConfiguration(v) => v,
            Self::BaseItem(v) => v,
            Self::WebPart(v) => v,
            Self::DeviceConfigurationAssignment(v) => v,
            Self::DeviceConfigurationDeviceOverview(v) => v,
            Self::DeviceConfigurationUserOverview(v) => v,
            Self::DeviceConfigurationDeviceStatus(v) => v,
            Self::DeviceConfigurationUserStatus(v) => v,
            Self::DeviceManagementDerivedCredentialSettings(v) => v,
            Self::CanvasLayout(v) => v,
            Self::HorizontalSection(v) => v,
            Self::HorizontalSectionColumn(v) => v,
            Self::VerticalSection(v) => v,
        }
    }
}

impl DerefMut for EntityKind {
    fn deref_mut(&mut self) -> &mut Entity {
        match self {
            Self::Entity(v) => v,
            Self::DeviceConfiguration(v) => v,
            Self::BaseItem(v) => v,
            Self::WebPart(v) => v,
            Self::DeviceConfigurationAssignment(v) => v,
            Self::DeviceConfigurationDeviceOverview(v) => v,
            Self::DeviceConfigurationUserOverview(v) => v,
            Self::DeviceConfigurationDeviceStatus(v) => v,
            Self::DeviceConfigurationUserStatus(v) => v,
            Self::DeviceManagementDerivedCredentialSettings(v) => v,
            Self::CanvasLayout(v) => v,
            Self::HorizontalSection(v) => v,
            Self::HorizontalSectionColumn(v) => v,
            Self::VerticalSection(v) => v,
        }
    }
}

impl AdditionalDataHolder for EntityKind {
    fn additional_data(&self) -> &AdditionalData {
        self.as_parsable().additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.as_parsable_mut().additional_data_mut()
    }
}

impl Parsable for EntityKind {
    fn deserialize_fields(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        self.as_parsable_mut().deserialize_fields(node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.as_parsable().serialize(writer)
    }
}

impl FieldValue for EntityKind {
    fn read(node: &dyn ParseNode) -> Result<Option<Self>, SerializationError> {
        node.get_object_value(Self::create_from_discriminator_value)
    }

    fn write(
        &self,
        writer: &mut dyn SerializationWriter,
        key: Option<&str>,
    ) -> Result<(), SerializationError> {
        writer.write_object_value(key, self)
    }
}
