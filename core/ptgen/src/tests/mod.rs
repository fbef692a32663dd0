//! モジュールをまたぐシナリオテスト

pub(crate) mod support;

mod session_tests;
