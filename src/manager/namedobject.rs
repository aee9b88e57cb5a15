use serde::Deserialize;

use super::managererror::ManagerError;

/// 設定檔中每個物件共有的 `name` 欄位，作為 manager 的索引鍵。
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn new(name: String) -> NamedJsonObject {
        NamedJsonObject { name }
    }

    /// 只讀取 `name`，不複製整個物件。
    pub fn from_json(json_value: &serde_json::Value) -> Result<NamedJsonObject, ManagerError> {
        NamedJsonObject::deserialize(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}
