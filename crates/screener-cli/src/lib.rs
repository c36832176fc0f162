//! 스크리닝 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 시장 스크리닝 실행 및 결과 출력
//! - 개별 종목 리포트/스트레스 테스트
//! - 포트폴리오/워치리스트 관리

pub mod commands;
