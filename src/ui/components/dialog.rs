//! 가이드 판정 다이얼로그
//!
//! 폼 상태(form), 열림/제출/취소 흐름(judge), 위젯 렌더링(render)으로 나뉩니다.

mod form;
mod judge;
mod render;

pub use form::{FormField, JudgeAction, ValidationError};
pub use judge::{JudgeDialog, JudgeEvents};
pub use render::Dialog;
