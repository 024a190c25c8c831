use serde::{Deserialize, Serialize};

/// Panel 声明字段在后台编辑界面中的展示方式，只作为数据，不负责渲染
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Panel {
    /// 单个字段
    Field {
        #[serde(rename = "fieldName")]
        field_name: String,
    },

    /// 带标题的字段分组
    MultiField { heading: String, children: Vec<Panel> },

    /// 内联编辑的子对象集合
    Inline {
        #[serde(rename = "relationName")]
        relation_name: String,
        label: String,
    },
}

impl Panel {
    pub fn field(field_name: impl Into<String>) -> Self {
        Self::Field {
            field_name: field_name.into(),
        }
    }

    pub fn multi_field(heading: impl Into<String>, children: Vec<Panel>) -> Self {
        Self::MultiField {
            heading: heading.into(),
            children,
        }
    }

    pub fn inline(relation_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Inline {
            relation_name: relation_name.into(),
            label: label.into(),
        }
    }

    /// 面板引用到的所有字段名（递归展开分组）
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            Self::Field { field_name } => vec![field_name.as_str()],
            Self::MultiField { children, .. } => {
                children.iter().flat_map(|child| child.field_names()).collect()
            }
            Self::Inline { relation_name, .. } => vec![relation_name.as_str()],
        }
    }
}
