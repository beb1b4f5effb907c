//! 狀態檔讀寫

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use haul_core::{new_farm_id, FarmData, HaulError, Result, DEFAULT_FARM_NAME};

/// 目前的狀態檔格式版本
pub const DATA_VERSION: u32 = 4;

/// 狀態檔名
pub const STATE_FILE_NAME: &str = "haul_state.json";

/// 狀態檔內容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedState {
    /// 格式版本
    pub version: u32,

    /// 目前選取的農場ID
    pub current_farm_id: String,

    /// 全部農場，依農場ID索引
    pub farms: HashMap<String, FarmData>,
}

/// 狀態儲存器：負責單一狀態檔的載入與保存
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// 創建指向 `<data_dir>/haul_state.json` 的儲存器
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STATE_FILE_NAME),
        }
    }

    /// 狀態檔完整路徑
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 載入應用狀態
    ///
    /// 檔案不存在時回傳一座新的預設農場（不寫入磁碟）。
    /// 版本比支援上限新的檔案直接拒絕，避免誤讀。
    pub fn load(&self) -> Result<(HashMap<String, FarmData>, String)> {
        if !self.path.exists() {
            tracing::debug!("狀態檔不存在，建立預設農場: {:?}", self.path);
            let farm_id = new_farm_id();
            let mut farms = HashMap::new();
            farms.insert(farm_id.clone(), FarmData::new(DEFAULT_FARM_NAME.to_string()));
            return Ok((farms, farm_id));
        }

        let raw = fs::read_to_string(&self.path)?;
        let state: SavedState = serde_json::from_str(&raw)?;
        if state.version > DATA_VERSION {
            return Err(HaulError::StateVersionMismatch {
                found: state.version,
                supported: DATA_VERSION,
            });
        }

        tracing::debug!(
            "已載入狀態檔: {:?}（版本 {}，農場 {} 座）",
            self.path,
            state.version,
            state.farms.len()
        );
        Ok((state.farms, state.current_farm_id))
    }

    /// 保存應用狀態
    ///
    /// 先寫入 `.tmp` 暫存檔再原子替換，中途失敗不會留下壞檔。
    pub fn save(&self, farms: &HashMap<String, FarmData>, current_farm_id: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let state = SavedState {
            version: DATA_VERSION,
            current_farm_id: current_farm_id.to_string(),
            farms: farms.clone(),
        };
        let payload = serde_json::to_string_pretty(&state)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("已保存狀態檔: {:?}（農場 {} 座）", self.path, farms.len());
        Ok(())
    }
}
