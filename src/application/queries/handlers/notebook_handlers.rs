//! Notebook Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::NotebookStorePort;
use crate::application::queries::{ListNotebooks, PreviewNotebook};
use crate::domain::notebook::PREVIEW_LANGUAGE;
use crate::domain::{NamingRule, NotebookRef, PreviewPolicy};

// ============================================================================
// Response DTOs
// ============================================================================

/// 笔记本预览响应
#[derive(Debug, Clone)]
pub struct NotebookPreview {
    pub name: String,
    /// 截断后的内容（始终带截断标记）
    pub content: String,
    /// 代码块语言
    pub language: &'static str,
    /// 外部查看链接
    pub viewer_url: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListNotebooks Handler
pub struct ListNotebooksHandler {
    store: Arc<dyn NotebookStorePort>,
}

impl ListNotebooksHandler {
    pub fn new(store: Arc<dyn NotebookStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListNotebooks) -> Result<Vec<String>, ApplicationError> {
        let notebooks = self.store.list().await?;
        Ok(notebooks.into_iter().map(NotebookRef::into_string).collect())
    }
}

/// PreviewNotebook Handler
pub struct PreviewNotebookHandler {
    store: Arc<dyn NotebookStorePort>,
    rule: NamingRule,
    policy: PreviewPolicy,
}

impl PreviewNotebookHandler {
    pub fn new(store: Arc<dyn NotebookStorePort>, rule: NamingRule, policy: PreviewPolicy) -> Self {
        Self {
            store,
            rule,
            policy,
        }
    }

    pub async fn handle(
        &self,
        query: PreviewNotebook,
    ) -> Result<NotebookPreview, ApplicationError> {
        let notebook = NotebookRef::parse(query.name, &self.rule)?;
        let raw = self.store.read(&notebook).await?;
        let preview = self.policy.render(&raw);

        tracing::debug!(
            notebook = %notebook,
            raw_chars = raw.chars().count(),
            "Notebook previewed"
        );

        Ok(NotebookPreview {
            viewer_url: self.policy.viewer_url(&notebook),
            name: notebook.into_string(),
            content: preview.into_string(),
            language: PREVIEW_LANGUAGE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotebookError;
    use async_trait::async_trait;
    use std::collections::BTreeMap;

    struct InMemoryStore {
        files: BTreeMap<String, String>,
    }

    #[async_trait]
    impl NotebookStorePort for InMemoryStore {
        async fn list(&self) -> Result<Vec<NotebookRef>, NotebookError> {
            let rule = NamingRule::default();
            Ok(self
                .files
                .keys()
                .filter_map(|name| NotebookRef::parse(name.clone(), &rule).ok())
                .collect())
        }

        async fn read(&self, notebook: &NotebookRef) -> Result<String, NotebookError> {
            self.files
                .get(notebook.as_str())
                .cloned()
                .ok_or_else(|| NotebookError::NotFound(notebook.to_string()))
        }
    }

    fn store() -> Arc<dyn NotebookStorePort> {
        let mut files = BTreeMap::new();
        files.insert("agi1.ipynb".to_string(), "{\"cells\": []}".to_string());
        files.insert("agi_voice.ipynb".to_string(), "z".repeat(3000));
        files.insert("readme.ipynb".to_string(), "{}".to_string());
        Arc::new(InMemoryStore { files })
    }

    #[tokio::test]
    async fn test_list_notebooks() {
        let handler = ListNotebooksHandler::new(store());
        let names = handler.handle(ListNotebooks).await.unwrap();
        assert_eq!(names, vec!["agi1.ipynb", "agi_voice.ipynb"]);
    }

    #[tokio::test]
    async fn test_preview_notebook() {
        let handler =
            PreviewNotebookHandler::new(store(), NamingRule::default(), PreviewPolicy::default());
        let preview = handler
            .handle(PreviewNotebook {
                name: "agi_voice.ipynb".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(preview.name, "agi_voice.ipynb");
        assert_eq!(preview.content, format!("{}\n...", "z".repeat(2000)));
        assert_eq!(preview.language, "json");
        assert!(preview.viewer_url.ends_with("/blob/main/agi_voice.ipynb"));
    }

    #[tokio::test]
    async fn test_preview_missing_notebook() {
        let handler =
            PreviewNotebookHandler::new(store(), NamingRule::default(), PreviewPolicy::default());
        let err = handler
            .handle(PreviewNotebook {
                name: "agi_missing.ipynb".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_preview_rejects_foreign_name() {
        let handler =
            PreviewNotebookHandler::new(store(), NamingRule::default(), PreviewPolicy::default());
        let err = handler
            .handle(PreviewNotebook {
                name: "readme.ipynb".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }
}
