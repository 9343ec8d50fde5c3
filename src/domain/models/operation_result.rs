//! 릴레이 작업 결과 타입
//!
//! Spotify 호출 하나의 결과를 성공 데이터 또는 사용자에게 보여줄 실패 메시지로 표현합니다.
//! 업스트림 실패는 여기서 멈추고 라우터까지 에러로 전파되지 않습니다.

use super::spotify::CurrentlyPlaying;

/// 성공 데이터 또는 실패 메시지
///
/// `{success, data, error_message}` 형태의 봉투를 타입으로 옮긴 것입니다.
/// 실패 메시지는 항상 비어 있지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationResult<T> {
    Success(T),
    Failure(String),
}

impl<T> OperationResult<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            OperationResult::Failure("Unknown error".to_string())
        } else {
            OperationResult::Failure(message)
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            OperationResult::Success(data) => Some(data),
            OperationResult::Failure(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            OperationResult::Success(_) => None,
            OperationResult::Failure(message) => Some(message),
        }
    }

    pub fn map<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OperationResult::Success(data) => OperationResult::Success(f(data)),
            OperationResult::Failure(message) => OperationResult::Failure(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            OperationResult::Success(data) => Ok(data),
            OperationResult::Failure(message) => Err(message),
        }
    }
}

/// 현재 재생 상태
///
/// 아무것도 재생하지 않는 상태([`NowPlaying::Idle`])는 정상 응답이며 실패가 아닙니다.
#[derive(Debug, Clone, PartialEq)]
pub enum NowPlaying {
    Playing(CurrentlyPlaying),
    Idle,
    Failed(String),
}

impl NowPlaying {
    pub fn is_success(&self) -> bool {
        !matches!(self, NowPlaying::Failed(_))
    }
}

impl From<OperationResult<Option<CurrentlyPlaying>>> for NowPlaying {
    fn from(result: OperationResult<Option<CurrentlyPlaying>>) -> Self {
        match result {
            OperationResult::Success(Some(playing)) => NowPlaying::Playing(playing),
            OperationResult::Success(None) => NowPlaying::Idle,
            OperationResult::Failure(message) => NowPlaying::Failed(message),
        }
    }
}
