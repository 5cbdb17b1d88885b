/// Declares an enum whose wire form is an integer literal.
///
/// Generates the enum together with its serde implementations (serializing as the integer,
/// rejecting any integer outside the declared literal set) and an OpenAPI integer schema listing
/// the accepted literals.
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every accepted variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The integer sent on the wire for this variant.
            pub const fn value(self) -> $repr {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Resolves a wire integer, returning `None` for undeclared literals.
            pub fn from_value(value: $repr) -> Option<Self> {
                match value {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.value(), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <$repr as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_value(value).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "{} is not a valid {}",
                        value,
                        stringify!($name)
                    ))
                })
            }
        }

        impl utoipa::PartialSchema for $name {
            fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
                let object = utoipa::openapi::schema::ObjectBuilder::new()
                    .schema_type(utoipa::openapi::schema::Type::Integer)
                    .format(Some(utoipa::openapi::schema::SchemaFormat::KnownFormat(
                        utoipa::openapi::schema::KnownFormat::Int32,
                    )))
                    .enum_values(Some([$($value,)+]))
                    .build();

                utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(object))
            }
        }

        impl utoipa::ToSchema for $name {
            fn name() -> std::borrow::Cow<'static, str> {
                std::borrow::Cow::Borrowed(stringify!($name))
            }
        }
    };
}

/// Declares an exactly-one-of union discriminated by the integer `type` key.
///
/// Each variant wraps a schema type and lists the discriminator literals that select it. The
/// payload is deserialized into the selected variant whole, so the variant type keeps its own
/// `type` field. A failure inside the variant keeps its path below the union. Serialization
/// writes the wrapped value unchanged.
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident by $disc:ident {
            $(
                $variant:ident($ty:ty) = [$($tag:ident),+ $(,)?],
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $($variant($ty),)+
        }

        impl $name {
            /// The discriminator carried by the wrapped value.
            pub fn kind(&self) -> $disc {
                match self {
                    $($name::$variant(inner) => inner.kind,)+
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $($name::$variant(inner) => serde::Serialize::serialize(inner, serializer),)+
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use serde::de::Error;

                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                let tag = value.get("type").ok_or_else(|| D::Error::missing_field("type"))?;
                let tag = <$disc as serde::Deserialize>::deserialize(tag).map_err(D::Error::custom)?;

                #[allow(unreachable_patterns)]
                let parsed = match tag {
                    $(
                        $($disc::$tag)|+ => serde_path_to_error::deserialize::<_, $ty>(value)
                            .map($name::$variant)
                            .map_err(|err| {
                                D::Error::custom(crate::error::nested_message(&err))
                            }),
                    )+
                    other => Err(D::Error::custom(format!(
                        "type {} is not accepted by {}",
                        other.value(),
                        stringify!($name)
                    ))),
                };

                parsed
            }
        }

        impl utoipa::PartialSchema for $name {
            fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
                let one_of = utoipa::openapi::schema::OneOfBuilder::new()
                    $(
                        .item(utoipa::openapi::RefOr::Ref(utoipa::openapi::Ref::from_schema_name(
                            <$ty as utoipa::ToSchema>::name(),
                        )))
                    )+
                    .build();

                utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::OneOf(one_of))
            }
        }

        impl utoipa::ToSchema for $name {
            fn name() -> std::borrow::Cow<'static, str> {
                std::borrow::Cow::Borrowed(stringify!($name))
            }

            fn schemas(
                schemas: &mut Vec<(
                    String,
                    utoipa::openapi::RefOr<utoipa::openapi::schema::Schema>,
                )>,
            ) {
                $(
                    schemas.push((
                        <$ty as utoipa::ToSchema>::name().into_owned(),
                        <$ty as utoipa::PartialSchema>::schema(),
                    ));
                    <$ty as utoipa::ToSchema>::schemas(schemas);
                )+
            }
        }
    };
}

/// Declares an enum whose wire form is a string literal.
///
/// Like [`int_enum!`], undeclared literals are rejected and the OpenAPI schema lists the
/// accepted values.
macro_rules! str_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every accepted variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!("'{}' is not a valid {}", other, stringify!($name))),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        impl utoipa::PartialSchema for $name {
            fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
                let object = utoipa::openapi::schema::ObjectBuilder::new()
                    .schema_type(utoipa::openapi::schema::Type::String)
                    .enum_values(Some([$($value,)+]))
                    .build();

                utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(object))
            }
        }

        impl utoipa::ToSchema for $name {
            fn name() -> std::borrow::Cow<'static, str> {
                std::borrow::Cow::Borrowed(stringify!($name))
            }
        }
    };
}
