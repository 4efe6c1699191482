//! Тонкий клиент REST-интерфейса бэкенда (PostgREST)
//!
//! Каждый запрос несет `apikey` и `Authorization: Bearer` с публичным ключом
//! проекта. Ответ с ошибкой превращается в [`ServiceError`] с сообщением
//! сервиса.

mod error;
mod query;

pub use error::{decode_error, ServiceError};
pub use query::TableQuery;

use crate::shared::config::BackendConfig;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestClient {
    base_url: String,
    anon_key: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// `origin` используется, если в конфигурации адрес не задан
    pub fn from_config(config: &BackendConfig, origin: &str) -> Self {
        Self::new(config.resolved_url(origin), config.anon_key.clone())
    }

    pub fn url(&self, query: &TableQuery) -> String {
        format!("{}/rest/v1/{}", self.base_url, query.to_path())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        if self.anon_key.is_empty() {
            return builder;
        }
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }

    /// Все строки, подходящие под запрос
    pub async fn select<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Vec<T>, ServiceError> {
        let url = self.url(query);
        log::debug!("GET {}", url);
        let response = self.authorize(Request::get(&url)).send().await?;
        read_json(response).await
    }

    /// Вставить строку и получить ее обратно (с назначенным ID)
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let url = self.url(&TableQuery::new(table));
        log::debug!("POST {}", url);
        let response = self
            .authorize(Request::post(&url))
            .header("Prefer", "return=representation")
            .json(body)?
            .send()
            .await?;
        first_row(read_json(response).await?)
    }

    /// Обновить строку по фильтру и получить ее обратно
    pub async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        query: &TableQuery,
        body: &B,
    ) -> Result<T, ServiceError> {
        let url = self.url(query);
        log::debug!("PATCH {}", url);
        let response = self
            .authorize(Request::patch(&url))
            .header("Prefer", "return=representation")
            .json(body)?
            .send()
            .await?;
        first_row(read_json(response).await?)
    }

    pub async fn delete(&self, query: &TableQuery) -> Result<(), ServiceError> {
        let url = self.url(query);
        log::debug!("DELETE {}", url);
        let response = self.authorize(Request::delete(&url)).send().await?;
        if !response.ok() {
            return Err(read_error(response).await);
        }
        Ok(())
    }
}

async fn read_error(response: Response) -> ServiceError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    decode_error(status, &body)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    if !response.ok() {
        return Err(read_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Первая строка ответа `return=representation`
pub fn first_row<T>(rows: Vec<T>) -> Result<T, ServiceError> {
    rows.into_iter().next().ok_or(ServiceError::EmptyResult)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_trailing_slash() {
        let client = RestClient::new("https://abc.supabase.co/", "key");
        let query = TableQuery::new("suppliers").select("*").order_asc("name");
        assert_eq!(
            client.url(&query),
            "https://abc.supabase.co/rest/v1/suppliers?select=*&order=name.asc"
        );
    }

    #[test]
    fn test_first_row() {
        assert_eq!(first_row(vec![1, 2]), Ok(1));
        assert_eq!(first_row::<i32>(vec![]), Err(ServiceError::EmptyResult));
    }
}
