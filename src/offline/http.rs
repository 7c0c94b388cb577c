use std::time::Duration;

/// 요청 메서드. 캐시 키 구성과 저장 여부 판정(GET만 저장)에 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// 캐시/네트워크 공용 요청 식별자. 메서드 + URL이 캐시 매칭 기준이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub method: Method,
    pub url: String,
}

impl AssetRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
        }
    }
}

/// 네트워크/캐시에서 돌아온 응답.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    /// HTTP 상태 코드
    pub status: u16,
    pub body: Vec<u8>,
}

impl AssetResponse {
    /// 2xx 상태면 참.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 네트워크 요청 실패(전송 계층 오류). 상태 코드가 있는 응답은 실패가 아니다.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// 클라이언트 생성 실패
    Client(String),
    /// 요청 전송/수신 실패 (오프라인 포함)
    Transport(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Client(msg) => write!(f, "HTTP 클라이언트 생성 실패: {msg}"),
            FetchError::Transport(msg) => write!(f, "네트워크 요청 실패: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// 네트워크 계층 추상화. 테스트에서 스텁으로 대체한다.
pub trait HttpFetcher: Send + Sync {
    /// 요청을 수행해 상태/본문을 돌려준다. 전송 실패만 Err가 된다.
    fn fetch(&self, request: &AssetRequest) -> Result<AssetResponse, FetchError>;
}

/// reqwest 블로킹 클라이언트 기반 구현.
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn fetch(&self, request: &AssetRequest) -> Result<AssetResponse, FetchError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Head => self.client.head(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        let response = builder
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .to_vec();
        Ok(AssetResponse { status, body })
    }
}
