use crate::content_type::panel::Panel;
use crate::content_type::{ContentKind, ContentModel, ContentTypeKey};
use crate::error::{ContentError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// ContentTypeDefinition 描述一个内容类型：字段、后台面板、搜索字段以及页面树中的位置约束
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeDefinition {
    pub key: ContentTypeKey,
    pub kind: ContentKind,
    pub verbose_name: String,
    /// 默认在单数名称后加s
    pub verbose_name_plural: String,
    pub fields: Vec<String>,
    pub panels: Vec<Panel>,
    pub search_fields: Vec<String>,
    /// 为空表示可以放在任意父页面下（包括根）
    pub parent_page_types: Vec<ContentTypeKey>,
    /// 为空表示允许任意子页面
    pub subpage_types: Vec<ContentTypeKey>,
}

impl ContentTypeDefinition {
    pub fn new(key: ContentTypeKey, kind: ContentKind, verbose_name: impl Into<String>) -> Self {
        let verbose_name = verbose_name.into();
        Self {
            key,
            kind,
            verbose_name_plural: format!("{}s", verbose_name),
            verbose_name,
            fields: Vec::new(),
            panels: Vec::new(),
            search_fields: Vec::new(),
            parent_page_types: Vec::new(),
            subpage_types: Vec::new(),
        }
    }

    pub fn of<M: ContentModel>(kind: ContentKind, verbose_name: impl Into<String>) -> Self {
        Self::new(M::content_type(), kind, verbose_name)
    }

    pub fn with_verbose_name_plural(mut self, plural: impl Into<String>) -> Self {
        self.verbose_name_plural = plural.into();
        self
    }

    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_panels(mut self, panels: Vec<Panel>) -> Self {
        self.panels = panels;
        self
    }

    pub fn with_search_fields(mut self, fields: &[&str]) -> Self {
        self.search_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_parent_page_types(mut self, types: Vec<ContentTypeKey>) -> Self {
        self.parent_page_types = types;
        self
    }

    pub fn with_subpage_types(mut self, types: Vec<ContentTypeKey>) -> Self {
        self.subpage_types = types;
        self
    }

    fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    /// 面板和搜索字段只能引用已声明的字段
    fn check(&self) -> Result<()> {
        let panel_fields = self.panels.iter().flat_map(|p| p.field_names());
        for name in panel_fields.chain(self.search_fields.iter().map(String::as_str)) {
            if !self.has_field(name) {
                return Err(ContentError::Validation(format!(
                    "{} references undeclared field '{}'",
                    self.key, name
                )));
            }
        }

        let places_pages = !self.parent_page_types.is_empty() || !self.subpage_types.is_empty();
        if places_pages && self.kind != ContentKind::Page {
            return Err(ContentError::Validation(format!(
                "{} is not a page type but declares page placement rules",
                self.key
            )));
        }
        Ok(())
    }
}

/// ContentTypeRegistry 管理所有内容类型定义，启动时显式填充
pub trait ContentTypeRegistry: Send + Sync {
    fn register(&mut self, definition: ContentTypeDefinition) -> Result<()>;
    fn get(&self, key: &ContentTypeKey) -> Option<&ContentTypeDefinition>;
    fn list(&self) -> Vec<&ContentTypeDefinition>;

    /// 判断 `child` 类型的页面能否创建在 `parent` 类型的页面下，`None` 表示根
    fn can_create_at(&self, child: &ContentTypeKey, parent: Option<&ContentTypeKey>) -> bool {
        let Some(child_def) = self.get(child) else {
            return false;
        };
        if child_def.kind != ContentKind::Page {
            return false;
        }

        match parent {
            None => child_def.parent_page_types.is_empty(),
            Some(parent) => {
                let Some(parent_def) = self.get(parent) else {
                    return false;
                };
                let parent_allows = parent_def.subpage_types.is_empty()
                    || parent_def.subpage_types.contains(child);
                let child_allows = child_def.parent_page_types.is_empty()
                    || child_def.parent_page_types.contains(parent);
                parent_def.kind == ContentKind::Page && parent_allows && child_allows
            }
        }
    }
}

/// DefaultContentTypeRegistry 默认的内容类型注册表实现
#[derive(Debug, Default)]
pub struct DefaultContentTypeRegistry {
    definitions: HashMap<ContentTypeKey, ContentTypeDefinition>,
}

impl DefaultContentTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentTypeRegistry for DefaultContentTypeRegistry {
    fn register(&mut self, definition: ContentTypeDefinition) -> Result<()> {
        if self.definitions.contains_key(&definition.key) {
            return Err(ContentError::AlreadyRegistered(definition.key.to_string()));
        }
        definition.check()?;
        self.definitions.insert(definition.key.clone(), definition);
        Ok(())
    }

    fn get(&self, key: &ContentTypeKey) -> Option<&ContentTypeDefinition> {
        self.definitions.get(key)
    }

    fn list(&self) -> Vec<&ContentTypeDefinition> {
        let mut definitions: Vec<_> = self.definitions.values().collect();
        definitions.sort_by(|a, b| a.key.cmp(&b.key));
        definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(model: &str) -> ContentTypeKey {
        ContentTypeKey::new("test", model)
    }

    fn registry() -> DefaultContentTypeRegistry {
        let mut registry = DefaultContentTypeRegistry::new();
        registry
            .register(
                ContentTypeDefinition::new(key("Index"), ContentKind::Page, "index")
                    .with_subpage_types(vec![key("Post")]),
            )
            .unwrap();
        registry
            .register(
                ContentTypeDefinition::new(key("Post"), ContentKind::Page, "post")
                    .with_fields(&["intro"])
                    .with_panels(vec![Panel::field("intro")])
                    .with_search_fields(&["intro"])
                    .with_parent_page_types(vec![key("Index")]),
            )
            .unwrap();
        registry
            .register(ContentTypeDefinition::new(key("Snippet"), ContentKind::Snippet, "snippet"))
            .unwrap();
        registry
    }

    #[test]
    fn test_register_duplicate_rejected() {
        let mut registry = registry();
        let result = registry.register(ContentTypeDefinition::new(
            key("Post"),
            ContentKind::Page,
            "again",
        ));
        assert!(matches!(result, Err(ContentError::AlreadyRegistered(_))));
    }

    #[test]
    fn test_register_undeclared_field_rejected() {
        let mut registry = DefaultContentTypeRegistry::new();
        let result = registry.register(
            ContentTypeDefinition::new(key("Broken"), ContentKind::Page, "broken")
                .with_fields(&["intro"])
                .with_search_fields(&["body"]),
        );
        assert!(matches!(result, Err(ContentError::Validation(_))));
        assert!(registry.get(&key("Broken")).is_none());
    }

    #[test]
    fn test_snippet_cannot_declare_page_rules() {
        let mut registry = DefaultContentTypeRegistry::new();
        let result = registry.register(
            ContentTypeDefinition::new(key("Author"), ContentKind::Snippet, "author")
                .with_parent_page_types(vec![key("Index")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_can_create_at() {
        let registry = registry();
        assert!(registry.can_create_at(&key("Index"), None));
        assert!(registry.can_create_at(&key("Post"), Some(&key("Index"))));
        assert!(!registry.can_create_at(&key("Post"), None));
        assert!(!registry.can_create_at(&key("Index"), Some(&key("Index"))));
        assert!(!registry.can_create_at(&key("Snippet"), None));
        assert!(!registry.can_create_at(&key("Unknown"), None));
    }

    #[test]
    fn test_list_is_sorted() {
        let registry = registry();
        let models: Vec<_> = registry.list().iter().map(|d| d.key.model.clone()).collect();
        assert_eq!(models, vec!["Index", "Post", "Snippet"]);
    }

    #[test]
    fn test_definition_json_uses_camel_case() {
        let registry = registry();
        let post = registry.get(&key("Post")).unwrap();
        assert_eq!(post.verbose_name_plural, "posts");

        let json = serde_json::to_value(post).unwrap();
        assert_eq!(json["key"], "test.Post");
        assert_eq!(json["verboseName"], "post");
        assert_eq!(json["verboseNamePlural"], "posts");
        assert_eq!(json["parentPageTypes"], serde_json::json!(["test.Index"]));
        assert_eq!(json["searchFields"], serde_json::json!(["intro"]));
        assert_eq!(json["panels"][0]["fieldName"], "intro");
        assert!(json.get("parent_page_types").is_none());
    }
}
