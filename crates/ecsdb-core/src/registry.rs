use std::collections::BTreeMap;

use crate::component::{
    BooleanComponent, ComponentDescriptor, DatetimeComponent, EmailComponent, IntegerComponent,
    ReferenceComponent, TextComponent, UrlComponent,
};

/// Decodes a raw component payload into a concrete descriptor variant.
pub type ComponentDecoder =
    fn(serde_json::Value) -> Result<ComponentDescriptor, serde_json::Error>;

/// Mapping from a component type tag to its payload decoder.
///
/// Built once, passed to a [`crate::SchemaLoader`] by value, and never
/// mutated afterwards. Registering a new component kind is the only change
/// needed to teach the loader a new tag; tests may build registries with
/// only the tags they exercise.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    decoders: BTreeMap<String, ComponentDecoder>,
}

impl ComponentRegistry {
    /// Empty registry with no tags registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry covering every built-in component kind.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("text", |value| {
            Ok(ComponentDescriptor::Text(serde_json::from_value::<
                TextComponent,
            >(value)?))
        });
        registry.register("integer", |value| {
            Ok(ComponentDescriptor::Integer(serde_json::from_value::<
                IntegerComponent,
            >(value)?))
        });
        registry.register("reference", |value| {
            Ok(ComponentDescriptor::Reference(serde_json::from_value::<
                ReferenceComponent,
            >(value)?))
        });
        registry.register("datetime", |value| {
            Ok(ComponentDescriptor::Datetime(serde_json::from_value::<
                DatetimeComponent,
            >(value)?))
        });
        registry.register("url", |value| {
            Ok(ComponentDescriptor::Url(serde_json::from_value::<
                UrlComponent,
            >(value)?))
        });
        registry.register("email", |value| {
            Ok(ComponentDescriptor::Email(serde_json::from_value::<
                EmailComponent,
            >(value)?))
        });
        registry.register("boolean", |value| {
            Ok(ComponentDescriptor::Boolean(serde_json::from_value::<
                BooleanComponent,
            >(value)?))
        });
        registry
    }

    /// Register a decoder for a type tag, replacing any previous one.
    pub fn register(&mut self, tag: impl Into<String>, decoder: ComponentDecoder) {
        self.decoders.insert(tag.into(), decoder);
    }

    /// Look up the decoder for a tag.
    pub fn lookup(&self, tag: &str) -> Option<&ComponentDecoder> {
        self.decoders.get(tag)
    }
}
