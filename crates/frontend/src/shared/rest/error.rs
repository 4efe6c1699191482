use serde::Deserialize;
use thiserror::Error;

/// Ошибка обращения к бэкенду.
///
/// `Display` отдает исходное сообщение сервиса без префиксов: именно оно
/// показывается пользователю.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Запрос не дошел до сервиса (сеть, CORS, DNS)
    #[error("{0}")]
    Network(String),

    /// Сервис ответил не-2xx статусом
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Тело ответа не разобралось
    #[error("{0}")]
    Decode(String),

    /// Запрос с `return=representation` вернул пустой массив
    #[error("no row returned")]
    EmptyResult,
}

impl From<gloo_net::Error> for ServiceError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ServiceError::Decode(e.to_string()),
            other => ServiceError::Network(other.to_string()),
        }
    }
}

/// Тело ошибки PostgREST
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Разобрать ответ с ошибкой: сообщение сервиса, либо `HTTP {status}`
pub fn decode_error(status: u16, body: &str) -> ServiceError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => {
            log::debug!(
                "backend error: status={} code={:?} details={:?} hint={:?}",
                status,
                err.code,
                err.details,
                err.hint
            );
            ServiceError::Backend {
                status,
                message: err.message,
            }
        }
        Err(_) => ServiceError::Backend {
            status,
            message: format!("HTTP {}", status),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_postgrest_body() {
        let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint"}"#;
        let err = decode_error(409, body);
        assert_eq!(
            err.to_string(),
            "duplicate key value violates unique constraint"
        );
        assert!(matches!(err, ServiceError::Backend { status: 409, .. }));
    }

    #[test]
    fn test_decode_unparseable_body() {
        let err = decode_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_network_message_is_verbatim() {
        assert_eq!(
            ServiceError::Network("network error".into()).to_string(),
            "network error"
        );
    }
}
