//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면(호스트)에서도 그대로 쓸 수 있게 한다.
//! 계산 함수는 모두 상태가 없는 순수 함수이며 매 호출마다 새 결과 값을 돌려준다.

pub mod app;
pub mod config;
pub mod seismic;
pub mod table;
pub mod ui_cli;
pub mod units;
pub mod wind;
