//! 요청 단위 세션 핸들
//!
//! [`SessionMiddleware`](crate::middlewares::SessionMiddleware)가 요청 extensions에 넣어 두고,
//! 핸들러는 추출자로 꺼내 씁니다. 핸들과 미들웨어는 같은 ID 슬롯을 공유하므로
//! 핸들러가 [`Session::renew`]로 바꾼 ID가 응답 쿠키에 반영됩니다.

use std::cell::{Cell, RefCell};
use std::future::{Ready, ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::session::store::SessionStore;

#[derive(Clone)]
pub struct Session {
    id: Rc<RefCell<String>>,
    renewed: Rc<Cell<bool>>,
    store: Arc<dyn SessionStore>,
}

impl Session {
    pub fn new(id: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            id: Rc::new(RefCell::new(id.into())),
            renewed: Rc::new(Cell::new(false)),
            store,
        }
    }

    pub fn id(&self) -> String {
        self.id.borrow().clone()
    }

    /// 이번 요청에서 ID가 새로 발급되었는지
    pub fn is_renewed(&self) -> bool {
        self.renewed.get()
    }

    pub async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.store.get(&self.id(), key).await
    }

    pub async fn insert(&self, key: &str, value: &str) -> AppResult<()> {
        self.store.set(&self.id(), key, value).await
    }

    pub async fn remove(&self, key: &str) -> AppResult<()> {
        self.store.remove(&self.id(), key).await
    }

    /// 세션 ID를 새로 발급하고 이전 ID에 저장된 값을 모두 폐기합니다
    ///
    /// 로그인 성공 직후 호출합니다. 로그인 전에 브라우저에 심어진 ID로는
    /// 로그인 이후의 토큰에 접근할 수 없습니다.
    pub async fn renew(&self) -> AppResult<()> {
        let previous = self.id();
        self.store.clear(&previous).await?;

        *self.id.borrow_mut() = Uuid::new_v4().to_string();
        self.renewed.set(true);
        Ok(())
    }
}

impl FromRequest for Session {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Session>()
                .cloned()
                .ok_or_else(|| AppError::SessionError("세션 미들웨어가 설치되지 않았습니다".to_string())),
        )
    }
}
