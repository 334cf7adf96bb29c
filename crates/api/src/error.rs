use axion_core::RecommenderError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("推荐服务错误: {0}")]
    Recommender(#[from] RecommenderError),

    #[error("验证错误: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("请求体解析失败: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("查询参数解析失败: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("请求参数错误: {0}")]
    BadRequest(String),

    #[error("内部服务器错误: {0}")]
    Internal(String),

    #[error("未找到资源")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_type, suggestions) = match &self {
            ApiError::Recommender(RecommenderError::UnknownPreset(name)) => (
                StatusCode::BAD_REQUEST,
                format!("评分预设 '{}' 不存在", name),
                "UNKNOWN_PRESET".to_string(),
                vec!["可用预设: three_factor, two_factor".to_string()],
            ),
            ApiError::Recommender(err) => (
                StatusCode::BAD_REQUEST,
                err.to_string(),
                "INVALID_REQUEST".to_string(),
                vec![err.user_message().to_string()],
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("请求参数验证失败: {}", errors),
                "VALIDATION_ERROR".to_string(),
                vec![
                    "fatigueLevel 必须在 [0, 1] 区间内".to_string(),
                    "工人、任务和技能的 id 不能为空".to_string(),
                ],
            ),
            ApiError::JsonRejection(rejection) => (
                rejection.status(),
                format!("请求数据格式错误: {}", rejection.body_text()),
                "SERIALIZATION_ERROR".to_string(),
                vec![
                    "请检查JSON格式是否正确".to_string(),
                    "确保所有必需字段都已提供".to_string(),
                    "确保Content-Type为application/json".to_string(),
                ],
            ),
            ApiError::QueryRejection(rejection) => (
                rejection.status(),
                format!("查询参数格式错误: {}", rejection.body_text()),
                "QUERY_ERROR".to_string(),
                vec![
                    "每个查询参数只能出现一次".to_string(),
                    "可用参数: preset=three_factor|two_factor".to_string(),
                ],
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                format!("请求参数错误: {}", msg),
                "BAD_REQUEST".to_string(),
                vec!["请检查请求格式和参数".to_string()],
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                "请求的资源不存在".to_string(),
                "NOT_FOUND".to_string(),
                vec![
                    "可用端点: GET /api/health, POST /api/recommend_worker".to_string(),
                ],
            ),
            ApiError::Internal(_) => {
                error!("请求处理失败: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "系统内部错误".to_string(),
                    "INTERNAL_ERROR".to_string(),
                    vec![
                        "系统遇到内部错误，请稍后重试".to_string(),
                        "查看 GET /api/health 检查服务状态".to_string(),
                    ],
                )
            }
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type,
                "code": status.as_u16(),
                "suggestions": suggestions,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_recommender_error_conversion() {
        let api_error: ApiError = RecommenderError::unknown_preset("five_factor").into();

        match api_error {
            ApiError::Recommender(RecommenderError::UnknownPreset(name)) => {
                assert_eq!(name, "five_factor");
            }
            _ => panic!("Expected RecommenderError::UnknownPreset"),
        }
    }

    #[test]
    fn test_api_error_into_response_unknown_preset() {
        let error = ApiError::Recommender(RecommenderError::unknown_preset("x"));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_into_response_invalid_policy() {
        let error = ApiError::Recommender(RecommenderError::invalid_policy("负权重"));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_into_response_bad_request() {
        let error = ApiError::BadRequest("Invalid parameter".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_into_response_internal() {
        let error = ApiError::Internal("Internal error".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_query_rejection_uses_rejection_status() {
        let uri: axum::http::Uri = "/api/recommend_worker?preset=a&preset=b".parse().unwrap();
        let rejection =
            axum::extract::Query::<crate::types::RecommendQuery>::try_from_uri(&uri).unwrap_err();

        let response = ApiError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_not_found() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_from_validation_errors() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("fatigueLevel", validator::ValidationError::new("range"));

        let api_error: ApiError = errors.into();
        match api_error {
            ApiError::Validation(_) => {}
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::NotFound;
        assert_eq!(format!("{}", error), "未找到资源");
    }
}
