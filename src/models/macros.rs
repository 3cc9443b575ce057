//! Declarative generators for the Graph beta model glue.
//!
//! Every model, enum and polymorphic family in this crate is stamped out by
//! one of the macros below so that the field table, the serializer and the
//! accessors of a type can never disagree about a wire name.

/// Declares a model struct.
///
/// Each field line reads `field / setter: Type => "wireName"`. Every field is
/// optional; the getter returns `Option<&Type>` and the setter takes
/// `Option<Type>`. A `: Base` after the discriminator embeds `Base` and
/// exposes its accessors through `Deref`.
macro_rules! graph_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($odata:literal) {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            additional_data: ::graph_serialization::AdditionalData,
            odata_type: Option<String>,
            $( $field: Option<$ty>, )*
        }

        impl $name {
            pub const ODATA_TYPE: &'static str = $odata;

            /// A fresh instance with `@odata.type` preset.
            pub fn new() -> Self {
                Self {
                    odata_type: Some(Self::ODATA_TYPE.to_string()),
                    ..Default::default()
                }
            }

            pub fn create_from_discriminator_value(
                _node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<Self, ::graph_serialization::SerializationError> {
                Ok(Self::new())
            }

            pub fn odata_type(&self) -> Option<&str> {
                self.odata_type.as_deref()
            }

            pub fn set_odata_type(&mut self, value: Option<String>) {
                self.odata_type = value;
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }
            )*
        }

        impl ::graph_serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &::graph_serialization::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut ::graph_serialization::AdditionalData {
                &mut self.additional_data
            }
        }

        impl ::graph_serialization::HasFieldDeserializers for $name {
            fn field_deserializers() -> ::graph_serialization::FieldDeserializers<Self> {
                let mut res: ::graph_serialization::FieldDeserializers<Self> =
                    ::graph_serialization::FieldDeserializers::new();
                res.insert(
                    "@odata.type",
                    Box::new(|m: &mut Self, n: &dyn ::graph_serialization::ParseNode| {
                        if let Some(val) = n.get_string_value()? {
                            m.odata_type = Some(val);
                        }
                        Ok(())
                    }),
                );
                $(
                    res.insert(
                        $wire,
                        Box::new(|m: &mut Self, n: &dyn ::graph_serialization::ParseNode| {
                            if let Some(val) =
                                <$ty as ::graph_serialization::FieldValue>::read(n)?
                            {
                                m.$field = Some(val);
                            }
                            Ok(())
                        }),
                    );
                )*
                res
            }
        }

        impl ::graph_serialization::Parsable for $name {
            fn deserialize_fields(
                &mut self,
                node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                ::graph_serialization::deserialize_with_table(self, node)
            }

            fn serialize(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                if let Some(value) = &self.odata_type {
                    writer.write_string_value(Some("@odata.type"), value)?;
                }
                $(
                    if let Some(value) = &self.$field {
                        ::graph_serialization::FieldValue::write(value, writer, Some($wire))?;
                    }
                )*
                writer.write_additional_data(&self.additional_data)
            }
        }

        graph_model!(@field_value $name);
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident($odata:literal) : $base:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident / $setter:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            base: $base,
            $( $field: Option<$ty>, )*
        }

        impl $name {
            pub const ODATA_TYPE: &'static str = $odata;

            /// A fresh instance with `@odata.type` preset.
            pub fn new() -> Self {
                let mut m = Self::default();
                m.set_odata_type(Some(Self::ODATA_TYPE.to_string()));
                m
            }

            pub fn create_from_discriminator_value(
                _node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<Self, ::graph_serialization::SerializationError> {
                Ok(Self::new())
            }

            pub fn base(&self) -> &$base {
                &self.base
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }
            )*
        }

        impl ::std::ops::Deref for $name {
            type Target = $base;

            fn deref(&self) -> &$base {
                &self.base
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $base {
                &mut self.base
            }
        }

        impl ::graph_serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &::graph_serialization::AdditionalData {
                ::graph_serialization::AdditionalDataHolder::additional_data(&self.base)
            }

            fn additional_data_mut(&mut self) -> &mut ::graph_serialization::AdditionalData {
                ::graph_serialization::AdditionalDataHolder::additional_data_mut(&mut self.base)
            }
        }

        impl ::graph_serialization::HasFieldDeserializers for $name {
            fn field_deserializers() -> ::graph_serialization::FieldDeserializers<Self> {
                let mut res: ::graph_serialization::FieldDeserializers<Self> =
                    ::graph_serialization::FieldDeserializers::new();
                let inherited =
                    <$base as ::graph_serialization::HasFieldDeserializers>::field_deserializers();
                for (key, deserialize) in inherited {
                    res.insert(
                        key,
                        Box::new(move |m: &mut Self, n: &dyn ::graph_serialization::ParseNode| {
                            deserialize(&mut m.base, n)
                        }),
                    );
                }
                $(
                    res.insert(
                        $wire,
                        Box::new(|m: &mut Self, n: &dyn ::graph_serialization::ParseNode| {
                            if let Some(val) =
                                <$ty as ::graph_serialization::FieldValue>::read(n)?
                            {
                                m.$field = Some(val);
                            }
                            Ok(())
                        }),
                    );
                )*
                res
            }
        }

        impl ::graph_serialization::Parsable for $name {
            fn deserialize_fields(
                &mut self,
                node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                ::graph_serialization::deserialize_with_table(self, node)
            }

            fn serialize(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                // The root ancestor writes the additional data too.
                ::graph_serialization::Parsable::serialize(&self.base, writer)?;
                $(
                    if let Some(value) = &self.$field {
                        ::graph_serialization::FieldValue::write(value, writer, Some($wire))?;
                    }
                )*
                Ok(())
            }
        }

        graph_model!(@field_value $name);
    };

    (@field_value $name:ident) => {
        impl ::graph_serialization::FieldValue for $name {
            fn read(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<Option<Self>, ::graph_serialization::SerializationError> {
                ::graph_serialization::ParseNodeExt::get_object_value(
                    node,
                    Self::create_from_discriminator_value,
                )
            }

            fn write(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
                key: Option<&str>,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                writer.write_object_value(key, self)
            }
        }
    };
}

/// Declares an int-backed enum whose wire form is a camelCase string.
///
/// Variants are numbered from zero in declaration order, which is the order
/// of the service's own enum table.
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[repr(i32)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant, )*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )*
                }
            }

            pub fn serialize_values(values: &[$name]) -> Vec<String> {
                values.iter().map(|v| v.as_str().to_string()).collect()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::graph_serialization::ParseEnumError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $( $wire => Ok($name::$variant), )*
                    _ => Err(::graph_serialization::ParseEnumError::new(stringify!($name), value)),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }

        impl ::graph_serialization::FieldValue for $name {
            fn read(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<Option<Self>, ::graph_serialization::SerializationError> {
                ::graph_serialization::ParseNodeExt::get_enum_value(node)
            }

            fn write(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
                key: Option<&str>,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                writer.write_string_value(key, self.as_str())
            }
        }
    };
}

/// Declares a flags enum: a bit set whose wire form is a comma separated
/// list of member names.
macro_rules! graph_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( const $flag:ident = $bit:literal => $wire:literal; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
        pub struct $name(u32);

        impl $name {
            $( pub const $flag: $name = $name($bit); )*

            pub const ALL: &'static [$name] = &[$( $name::$flag, )*];

            const NAMES: &'static [($name, &'static str)] = &[$( ($name::$flag, $wire), )*];

            pub const fn empty() -> Self {
                Self(0)
            }

            pub fn bits(&self) -> u32 {
                self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0 == 0
            }

            pub fn contains(&self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let names: Vec<&str> = Self::NAMES
                    .iter()
                    .filter(|(flag, _)| self.contains(*flag))
                    .map(|(_, name)| *name)
                    .collect();
                f.write_str(&names.join(","))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::graph_serialization::ParseEnumError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let mut res = Self::empty();
                // An empty set is written as ""
                if value.trim().is_empty() {
                    return Ok(res);
                }
                for part in value.split(',') {
                    let part = part.trim();
                    let flag = Self::NAMES
                        .iter()
                        .find(|(_, name)| *name == part)
                        .map(|(flag, _)| *flag)
                        .ok_or_else(|| {
                            ::graph_serialization::ParseEnumError::new(stringify!($name), part)
                        })?;
                    res.insert(flag);
                }
                Ok(res)
            }
        }

        impl ::graph_serialization::FieldValue for $name {
            fn read(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<Option<Self>, ::graph_serialization::SerializationError> {
                ::graph_serialization::ParseNodeExt::get_enum_value(node)
            }

            fn write(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
                key: Option<&str>,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                writer.write_string_value(key, &self.to_string())
            }
        }
    };
}

/// Declares a closed polymorphic family rooted at `$base`.
///
/// The family's factory reads the node's `@odata.type` and builds the
/// matching variant; anything it does not recognise parses as `Base`, so
/// the payload still round-trips through additional data.
macro_rules! graph_family {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $base:ident {
            $( $variant:ident($ty:ty) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub enum $name {
            Base($base),
            $( $variant($ty), )*
        }

        impl $name {
            /// Every `@odata.type` this family dispatches on, base first.
            pub const DISCRIMINATORS: &'static [&'static str] =
                &[$base::ODATA_TYPE, $( <$ty>::ODATA_TYPE, )*];

            pub fn from_discriminator(odata_type: Option<&str>) -> Self {
                $(
                    if odata_type == Some(<$ty>::ODATA_TYPE) {
                        return Self::$variant(<$ty>::new());
                    }
                )*
                Self::Base($base::new())
            }

            pub fn create_from_discriminator_value(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<Self, ::graph_serialization::SerializationError> {
                let odata_type = match node.get_child_node("@odata.type")? {
                    Some(child) => child.get_string_value()?,
                    None => None,
                };
                Ok(Self::from_discriminator(odata_type.as_deref()))
            }

            fn as_parsable(&self) -> &dyn ::graph_serialization::Parsable {
                match self {
                    Self::Base(v) => v,
                    $( Self::$variant(v) => v, )*
                }
            }

            fn as_parsable_mut(&mut self) -> &mut dyn ::graph_serialization::Parsable {
                match self {
                    Self::Base(v) => v,
                    $( Self::$variant(v) => v, )*
                }
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $base;

            fn deref(&self) -> &$base {
                match self {
                    Self::Base(v) => v,
                    $( Self::$variant(v) => v, )*
                }
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $base {
                match self {
                    Self::Base(v) => v,
                    $( Self::$variant(v) => v, )*
                }
            }
        }

        impl From<$base> for $name {
            fn from(value: $base) -> Self {
                Self::Base(value)
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*

        impl ::graph_serialization::AdditionalDataHolder for $name {
            fn additional_data(&self) -> &::graph_serialization::AdditionalData {
                ::graph_serialization::AdditionalDataHolder::additional_data(self.as_parsable())
            }

            fn additional_data_mut(&mut self) -> &mut ::graph_serialization::AdditionalData {
                ::graph_serialization::AdditionalDataHolder::additional_data_mut(
                    self.as_parsable_mut(),
                )
            }
        }

        impl ::graph_serialization::Parsable for $name {
            fn deserialize_fields(
                &mut self,
                node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                self.as_parsable_mut().deserialize_fields(node)
            }

            fn serialize(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                self.as_parsable().serialize(writer)
            }
        }

        impl ::graph_serialization::FieldValue for $name {
            fn read(
                node: &dyn ::graph_serialization::ParseNode,
            ) -> Result<Option<Self>, ::graph_serialization::SerializationError> {
                ::graph_serialization::ParseNodeExt::get_object_value(
                    node,
                    Self::create_from_discriminator_value,
                )
            }

            fn write(
                &self,
                writer: &mut dyn ::graph_serialization::SerializationWriter,
                key: Option<&str>,
            ) -> Result<(), ::graph_serialization::SerializationError> {
                writer.write_object_value(key, self)
            }
        }
    };
}
