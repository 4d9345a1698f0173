//! Mock asynchronous data source backing the demo pages.

use std::time::Duration;

use serde_json::{json, Value};

use crate::pages::LoadError;

#[derive(Debug, Clone)]
pub struct DataSource {
    latency: Duration,
}

impl DataSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Fetch a canned payload after the simulated latency.
    pub async fn fetch(&self, endpoint: &str) -> Result<Value, LoadError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        tracing::trace!(endpoint, "Mock fetch");

        match endpoint {
            "/api/user" => Ok(json!({
                "id": 1,
                "name": "张三",
                "email": "zhangsan@example.com",
                "avatar": "https://avatars.githubusercontent.com/u/1?v=4"
            })),
            "/api/posts" => Ok(json!([
                {
                    "id": 1,
                    "title": "React 18的新特性",
                    "content": "React 18 引入了许多令人兴奋的新特性...",
                    "author": "张三",
                    "publishDate": "2024-01-15",
                    "tags": ["React", "JavaScript", "Frontend"]
                },
                {
                    "id": 2,
                    "title": "Vite与传统构建工具的对比",
                    "content": "Vite是一个现代化的前端构建工具...",
                    "author": "李四",
                    "publishDate": "2024-01-10",
                    "tags": ["Vite", "Build Tools", "Performance"]
                },
                {
                    "id": 3,
                    "title": "TypeScript最佳实践",
                    "content": "TypeScript为JavaScript开发带来了类型安全...",
                    "author": "王五",
                    "publishDate": "2024-01-05",
                    "tags": ["TypeScript", "JavaScript", "Best Practices"]
                }
            ])),
            "/api/config" => Ok(json!({
                "siteName": "Vite React SSR",
                "description": "一个使用 Vite + React + SSR 构建的现代化应用",
                "version": "1.0.0",
                "features": ["SSR", "HMR", "TypeScript", "UnoCSS"]
            })),
            other => Err(LoadError::UnknownEndpoint(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_endpoints() {
        let source = DataSource::new(Duration::ZERO);
        assert_eq!(source.fetch("/api/user").await.unwrap()["id"], 1);
        assert_eq!(source.fetch("/api/posts").await.unwrap().as_array().unwrap().len(), 3);
        assert_eq!(source.fetch("/api/config").await.unwrap()["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_unknown_endpoint() {
        let source = DataSource::new(Duration::ZERO);
        let err = source.fetch("/api/nope").await.unwrap_err();
        assert!(matches!(err, LoadError::UnknownEndpoint(ref e) if e == "/api/nope"));
    }

    #[tokio::test]
    async fn test_simulated_latency() {
        let source = DataSource::new(Duration::from_millis(20));
        let start = std::time::Instant::now();
        source.fetch("/api/user").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
