use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::http::{AssetRequest, AssetResponse};

/// 스토어 입출력 시 발생 가능한 오류.
#[derive(Debug)]
pub enum StoreError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 엔트리 메타데이터 직렬화/역직렬화 오류
    Meta(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "캐시 입출력 오류: {e}"),
            StoreError::Meta(e) => write!(f, "캐시 메타데이터 오류: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Meta(value)
    }
}

/// 엔트리 옆에 저장되는 메타데이터. 본문과 분리해 둔다.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryMeta {
    method: String,
    url: String,
    status: u16,
}

/// 버전 이름별 캐시 스토어들을 담는 루트 디렉터리.
///
/// 스토어 하나가 브라우저 Cache Storage의 명명된 캐시 하나에 해당한다.
/// 활성 버전 하나만 유지하고 나머지는 활성화 시점에 통째로 삭제된다.
#[derive(Debug, Clone)]
pub struct CacheStorage {
    root: PathBuf,
}

impl CacheStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 이름으로 스토어를 연다. 없으면 생성한다.
    pub fn open(&self, name: &str) -> Result<AssetStore, StoreError> {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir)?;
        Ok(AssetStore {
            name: name.to_string(),
            dir,
        })
    }

    /// 존재하는 스토어 이름을 모두 나열한다.
    pub fn store_names(&self) -> Result<Vec<String>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// 이름이 일치하는 스토어를 통째로 삭제한다. 존재했으면 true.
    pub fn delete(&self, name: &str) -> Result<bool, StoreError> {
        let dir = self.root.join(name);
        if dir.exists() {
            fs::remove_dir_all(dir)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// 명명된 스토어 하나. 엔트리는 요청 식별자(메서드+URL)로 키가 정해진다.
#[derive(Debug, Clone)]
pub struct AssetStore {
    name: String,
    dir: PathBuf,
}

impl AssetStore {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 요청 식별자와 정확히 일치하는 엔트리를 찾는다. 신선도 검사는 없다.
    pub fn match_request(&self, request: &AssetRequest) -> Result<Option<AssetResponse>, StoreError> {
        let key = entry_key(request);
        let meta_path = self.dir.join(format!("{key}.json"));
        let body_path = self.dir.join(format!("{key}.body"));
        if !meta_path.exists() || !body_path.exists() {
            return Ok(None);
        }
        let meta: EntryMeta = serde_json::from_str(&fs::read_to_string(&meta_path)?)?;
        // 키 해시가 겹치더라도 요청 식별자가 다르면 미스로 처리한다.
        if meta.method != request.method.as_str() || meta.url != request.url {
            return Ok(None);
        }
        let body = fs::read(&body_path)?;
        Ok(Some(AssetResponse {
            status: meta.status,
            body,
        }))
    }

    /// 응답 복사본을 요청 키로 저장한다. 같은 키가 있으면 덮어쓴다.
    pub fn put(&self, request: &AssetRequest, response: &AssetResponse) -> Result<(), StoreError> {
        let key = entry_key(request);
        let meta = EntryMeta {
            method: request.method.as_str().to_string(),
            url: request.url.clone(),
            status: response.status,
        };
        fs::write(
            self.dir.join(format!("{key}.json")),
            serde_json::to_string(&meta)?,
        )?;
        fs::write(self.dir.join(format!("{key}.body")), &response.body)?;
        Ok(())
    }

    /// 저장된 엔트리 수.
    pub fn entry_count(&self) -> Result<usize, StoreError> {
        let mut count = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.path().extension().and_then(|e| e.to_str()) == Some("body") {
                count += 1;
            }
        }
        Ok(count)
    }
}

/// 요청 식별자를 파일명으로 쓸 수 있는 해시 키로 만든다.
fn entry_key(request: &AssetRequest) -> String {
    let mut hasher = Sha256::new();
    hasher.update(request.method.as_str().as_bytes());
    hasher.update(b" ");
    hasher.update(request.url.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
