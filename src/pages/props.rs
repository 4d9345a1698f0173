//! Initial props of each page.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{json, Value};

use crate::i18n::Catalog;
use crate::pages::fetch::DataSource;
use crate::pages::{LoadError, PageContext, PageRoute};

/// Result of a page's initial-props hook.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialProps {
    Props {
        props: Value,
        /// Seconds the payload may be reused for.
        revalidate: Option<u64>,
    },
    Redirect {
        destination: String,
        permanent: bool,
    },
    NotFound,
}

impl InitialProps {
    fn props(props: Value) -> Self {
        InitialProps::Props {
            props,
            revalidate: None,
        }
    }
}

impl PageRoute {
    pub async fn initial_props(
        self,
        ctx: &PageContext,
        catalog: &Catalog,
        source: &DataSource,
    ) -> Result<InitialProps, LoadError> {
        let lang = ctx.language;
        let section = self.catalog_key();
        let title = catalog.t(lang, &format!("pages.{section}.title"));
        let content = catalog.t(lang, &format!("pages.{section}.content"));

        match self {
            PageRoute::Index => {
                // One page of posts only.
                if let Some(page) = ctx.query.get("page") {
                    if page.parse::<u32>().map_or(true, |p| p != 1) {
                        return Ok(InitialProps::NotFound);
                    }
                }
                let posts = source.fetch("/api/posts").await?;
                Ok(InitialProps::Props {
                    props: json!({ "title": title, "content": content, "posts": posts }),
                    revalidate: Some(60),
                })
            }
            PageRoute::About => {
                let (user, config) =
                    tokio::try_join!(source.fetch("/api/user"), source.fetch("/api/config"))?;
                let name = user.get("name").and_then(Value::as_str).unwrap_or_default();
                let greeting = catalog.t_with(lang, "pages.about.greeting", &[("name", name)]);
                Ok(InitialProps::props(json!({
                    "title": title,
                    "content": content,
                    "greeting": greeting,
                    "user": user,
                    "config": config,
                })))
            }
            PageRoute::ClientOnly => {
                let timestamp = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_millis() as u64;
                Ok(InitialProps::props(json!({
                    "title": title,
                    "content": content,
                    "clientData": {
                        "timestamp": timestamp,
                        "source": "client",
                        "randomValue": fastrand::u32(0..1000),
                    },
                })))
            }
            PageRoute::StoreDemo => Ok(InitialProps::props(json!({
                "title": title,
                "content": content,
                "initialCount": 0,
            }))),
            PageRoute::Contact | PageRoute::UnoCss => Ok(InitialProps::props(json!({
                "title": title,
                "content": content,
            }))),
            PageRoute::Home => Ok(InitialProps::Redirect {
                destination: PageRoute::Index.path().to_string(),
                permanent: true,
            }),
        }
    }
}
