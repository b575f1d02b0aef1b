//! 用户数据模型

use serde::Serialize;
use serde_json::Value;

use crate::core::error::CoreError;

/// 用户记录
///
/// `name` 与 `age` 原样保存客户端提交的 JSON 值（包括 `null`），不做类型转换；
/// 请求中缺失的字段在序列化时省略。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
}

impl User {
    pub fn new(id: u64, name: impl Into<Value>, age: impl Into<Value>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            age: Some(age.into()),
        }
    }
}

// 注册用户请求
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegisterUserRequest {
    pub name: Option<Value>,
    pub age: Option<Value>,
}

impl RegisterUserRequest {
    /// 从 JSON 请求体按键名读取字段
    ///
    /// 空请求体视为 `{}`；数组没有命名字段，两个字段均缺失；
    /// 顶层为其他类型或语法错误时返回 400。
    pub fn from_json_body(body: &[u8]) -> Result<Self, CoreError> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| CoreError::BadRequest(format!("请求体不是有效的 JSON: {}", e)))?;

        match value {
            Value::Object(map) => Ok(Self {
                name: map.get("name").cloned(),
                age: map.get("age").cloned(),
            }),
            Value::Array(_) => Ok(Self::default()),
            other => Err(CoreError::BadRequest(format!(
                "请求体必须是 JSON 对象或数组，收到: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_has_no_fields() {
        let request = RegisterUserRequest::from_json_body(b"").unwrap();
        assert_eq!(request, RegisterUserRequest::default());
    }

    #[test]
    fn test_null_field_is_kept() {
        let request = RegisterUserRequest::from_json_body(br#"{"name":null,"age":3}"#).unwrap();
        assert_eq!(request.name, Some(Value::Null));
        assert_eq!(request.age, Some(json!(3)));
    }

    #[test]
    fn test_array_body_has_no_fields() {
        let request = RegisterUserRequest::from_json_body(br#"["x",7]"#).unwrap();
        assert_eq!(request, RegisterUserRequest::default());
    }

    #[test]
    fn test_scalar_and_malformed_bodies_rejected() {
        assert!(RegisterUserRequest::from_json_body(b"5").is_err());
        assert!(RegisterUserRequest::from_json_body(b"   ").is_err());
        assert!(RegisterUserRequest::from_json_body(br#"{"name":"#).is_err());
    }

    #[test]
    fn test_null_serialized_absent_omitted() {
        let user = User {
            id: 3,
            name: Some(Value::Null),
            age: None,
        };
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"id": 3, "name": null}));
    }
}
